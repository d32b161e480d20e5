use reqwest::Method;

use crate::client::ImgurClient;
use crate::error::{ApiResult, ImgurError};

use super::{copy_data_fields, Fields, Resource};

/// Optional fields for album creation.
///
/// Empty fields are left out of the POST body entirely.
#[derive(Debug, Default, Clone)]
pub struct AlbumOptions {
    /// Comma-separated image ids to include in the album
    pub ids: String,
    pub title: String,
    pub description: String,
    /// "public", "hidden", or "secret"
    pub privacy: String,
    /// Image id to use as the album cover
    pub cover: String,
}

/// An album of images hosted on Imgur.
#[derive(Debug, Default)]
pub struct Album {
    api: Option<ImgurClient>,
    fields: Fields,
}

impl Album {
    /// Create an album with no associated client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an album bound to the given client.
    pub fn with_api(client: ImgurClient) -> Self {
        Self {
            api: Some(client),
            fields: Fields::new(),
        }
    }

    /// Fetch album metadata by id and populate this resource from the
    /// response's `data` object. Same decode semantics as `Image::fetch`.
    pub fn fetch(&mut self, id: &str) -> ApiResult<&mut Self> {
        let client = self.require_api()?;
        let body = client.query(&format!("album/{}", id), Method::GET, &[])?;
        copy_data_fields(&mut self.fields, &body);
        Ok(self)
    }

    /// Create an album from the given options and populate this resource
    /// from the response.
    pub fn create(&mut self, options: &AlbumOptions) -> ApiResult<&mut Self> {
        let client = self.require_api()?;
        let data = create_fields(options);

        log::info!("Creating album");
        let body = client.query("album", Method::POST, &data)?;
        copy_data_fields(&mut self.fields, &body);
        Ok(self)
    }

    fn require_api(&self) -> ApiResult<&ImgurClient> {
        self.api.as_ref().ok_or_else(|| {
            log::error!("No API client associated with this album");
            ImgurError::NoClient
        })
    }
}

impl Resource for Album {
    fn api(&self) -> Option<&ImgurClient> {
        self.api.as_ref()
    }

    fn set_api(&mut self, client: ImgurClient) {
        self.api = Some(client);
    }

    fn fields(&self) -> &Fields {
        &self.fields
    }
}

/// Build the creation form from the non-empty options.
fn create_fields(options: &AlbumOptions) -> Vec<(String, String)> {
    let optional = [
        ("ids", &options.ids),
        ("title", &options.title),
        ("description", &options.description),
        ("privacy", &options.privacy),
        ("cover", &options.cover),
    ];

    let mut data = Vec::new();
    for (name, value) in optional {
        if !value.is_empty() {
            data.push((name.to_string(), value.clone()));
        }
    }
    data
}

#[cfg(test)]
#[path = "album_tests.rs"]
mod tests;
