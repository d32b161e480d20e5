use std::fmt;

/// Unified error type for client and cache operations
#[derive(Debug)]
pub enum ImgurError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Failed to parse JSON response
    Parse(serde_json::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// Resource has no associated API client
    NoClient,
    /// File I/O error
    Io(std::io::Error),
}

impl fmt::Display for ImgurError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImgurError::Network(e) => write!(f, "Network error: {}", e),
            ImgurError::Parse(e) => write!(f, "Parse error: {}", e),
            ImgurError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            ImgurError::NoClient => write!(f, "No API client associated with this resource"),
            ImgurError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ImgurError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImgurError::Network(e) => Some(e),
            ImgurError::Parse(e) => Some(e),
            ImgurError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ImgurError {
    fn from(err: reqwest::Error) -> Self {
        ImgurError::Network(err)
    }
}

impl From<serde_json::Error> for ImgurError {
    fn from(err: serde_json::Error) -> Self {
        ImgurError::Parse(err)
    }
}

impl From<std::io::Error> for ImgurError {
    fn from(err: std::io::Error) -> Self {
        ImgurError::Io(err)
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ImgurError>;
