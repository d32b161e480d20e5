use base64::Engine;
use reqwest::Method;
use serde_json::Value;

use crate::client::ImgurClient;
use crate::error::{ApiResult, ImgurError};

use super::{copy_data_fields, Fields, Resource};

/// Optional fields attached to an image upload.
///
/// Empty fields are left out of the POST body entirely.
#[derive(Debug, Default, Clone)]
pub struct UploadOptions {
    /// Album id (or deletehash for anonymous albums) to add the image to
    pub album: String,
    pub name: String,
    pub title: String,
    pub description: String,
}

/// An image hosted on Imgur.
#[derive(Debug, Default)]
pub struct Image {
    api: Option<ImgurClient>,
    fields: Fields,
}

impl Image {
    /// Create an image with no associated client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an image bound to the given client.
    pub fn with_api(client: ImgurClient) -> Self {
        Self {
            api: Some(client),
            fields: Fields::new(),
        }
    }

    /// Direct link to the image file, once fetched or uploaded.
    pub fn link(&self) -> Option<&str> {
        self.field("link").and_then(Value::as_str)
    }

    /// Deletehash for anonymous uploads.
    pub fn deletehash(&self) -> Option<&str> {
        self.field("deletehash").and_then(Value::as_str)
    }

    /// Fetch image metadata by id and populate this resource from the
    /// response's `data` object. A response that fails to decode leaves
    /// prior fields unchanged.
    pub fn fetch(&mut self, id: &str) -> ApiResult<&mut Self> {
        let client = self.require_api()?;
        let body = client.query(&format!("image/{}", id), Method::GET, &[])?;
        copy_data_fields(&mut self.fields, &body);
        Ok(self)
    }

    /// Upload image bytes, optionally tagged with album/name/title/
    /// description, and populate this resource from the response.
    pub fn upload(&mut self, image: &[u8], options: &UploadOptions) -> ApiResult<&mut Self> {
        let client = self.require_api()?;
        let data = upload_fields(image, options);

        log::info!("Uploading image ({} bytes)", image.len());
        let body = client.query("image", Method::POST, &data)?;
        copy_data_fields(&mut self.fields, &body);
        Ok(self)
    }

    fn require_api(&self) -> ApiResult<&ImgurClient> {
        self.api.as_ref().ok_or_else(|| {
            log::error!("No API client associated with this image");
            ImgurError::NoClient
        })
    }
}

impl Resource for Image {
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

/// Build the upload form: `image` always, optional fields only when
/// non-empty.
fn upload_fields(image: &[u8], options: &UploadOptions) -> Vec<(String, String)> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(image);
    let mut data = vec![("image".to_string(), encoded)];

    let optional = [
        ("album", &options.album),
        ("name", &options.name),
        ("title", &options.title),
        ("description", &options.description),
    ];
    for (name, value) in optional {
        if !value.is_empty() {
            data.push((name.to_string(), value.clone()));
        }
    }
    data
}

#[cfg(test)]
#[path = "image_tests.rs"]
mod tests;
