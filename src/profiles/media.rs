//! Converts uploaded image bytes into embeddable references.
//!
//! Uploads are not validated; unknown formats are still embedded with a
//! generic MIME type.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

use super::model::{ImageRef, ProfilePatch};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Profile slot an uploaded image lands in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MediaSlot {
    ProfilePhoto,
    Logo,
}

impl MediaSlot {
    /// Patch that stores `image` in this slot.
    pub fn patch(self, image: ImageRef) -> ProfilePatch {
        match self {
            MediaSlot::ProfilePhoto => ProfilePatch {
                profile_photo: Some(Some(image)),
                ..Default::default()
            },
            MediaSlot::Logo => ProfilePatch {
                logo: Some(Some(image)),
                ..Default::default()
            },
        }
    }
}

/// Sniffs the MIME type from magic bytes.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

/// Encodes raw bytes as a `data:<mime>;base64,...` URL.
pub fn embed_image(bytes: &[u8]) -> ImageRef {
    let mime = sniff_mime(bytes);
    ImageRef::from_data_url(format!("data:{mime};base64,{}", BASE64.encode(bytes)))
}
