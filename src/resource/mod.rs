//! Resource objects backed by API-returned JSON fields.
//!
//! Resources carry no fixed schema: whatever keys the API returns in its
//! `data` object are copied onto an ordered field map. The map preserves
//! response key order (serde_json's `preserve_order`).

pub mod album;
pub mod image;

use serde_json::{Map, Value};

use crate::client::ImgurClient;

pub use album::{Album, AlbumOptions};
pub use image::{Image, UploadOptions};

/// Ordered field map populated from API responses.
pub type Fields = Map<String, Value>;

/// Common surface of API-backed resources.
pub trait Resource {
    /// The associated API client, if any.
    fn api(&self) -> Option<&ImgurClient>;

    /// Associate (or re-associate) the resource with a client.
    fn set_api(&mut self, client: ImgurClient);

    /// All fields copied from API responses so far, in response order.
    fn fields(&self) -> &Fields;

    /// A single field by name.
    fn field(&self, name: &str) -> Option<&Value> {
        self.fields().get(name)
    }

    /// The resource id reported by the API.
    fn id(&self) -> Option<&str> {
        self.field("id").and_then(Value::as_str)
    }
}

/// Copy every key of the response's `data` object onto the field map.
///
/// A malformed body or a response without a `data` object logs a warning
/// and leaves prior fields untouched.
pub(crate) fn copy_data_fields(fields: &mut Fields, body: &str) {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut response)) => match response.remove("data") {
            Some(Value::Object(data)) => {
                for (name, value) in data {
                    fields.insert(name, value);
                }
            }
            _ => log::warn!("Response has no data object, skipping field population"),
        },
        Ok(_) => log::warn!("Response is not a JSON object, skipping field population"),
        Err(e) => log::warn!("Malformed response, skipping field population: {}", e),
    }
}
