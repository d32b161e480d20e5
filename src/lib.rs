//! Imgur v3 API client with pluggable response caching.
//!
//! Requests are authenticated either anonymously (`Client-ID`) or with a
//! user bearer token, GET responses are cached by URI and credential, and
//! resource objects (images, albums) populate themselves from the API's
//! JSON responses.
//!
//! ```no_run
//! use imgur_client::ImgurClient;
//!
//! let client = ImgurClient::with_client("my-client-id", "");
//! let mut image = client.image();
//! image.fetch("orunSTu")?;
//! println!("{:?}", image.link());
//! # Ok::<(), imgur_client::ImgurError>(())
//! ```

pub mod cache;
pub mod client;
pub mod error;
pub mod resource;
pub mod transport;

// Re-export commonly used items
pub use cache::{
    default_cache, reset_default_cache, set_default_cache, Cache, CacheFactory, FileCache,
    MemoryCache, NullCache,
};
pub use client::{ImgurClient, LastResponse, API_ENDPOINT, API_VERSION};
pub use error::{ApiResult, ImgurError};
pub use resource::{Album, AlbumOptions, Fields, Image, Resource, UploadOptions};
pub use transport::{HttpTransport, Transport, TransportResponse};

pub use reqwest::Method;
