//! Inline image codec.
//!
//! The admin form transmits a freshly picked image as a data URL
//! (`data:<mime>;base64,<payload>`). Before upload the repository splits
//! off the declared MIME type and decodes the payload into raw bytes.
//! Already-persisted images are plain `https` URLs and pass through
//! untouched; [`is_data_url`] tells the two apart.

use base64::{Engine as _, engine::general_purpose};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ImageError {
    #[error("not a data URL")]
    NotADataUrl,
    #[error("malformed data URL header")]
    MalformedHeader,
    #[error("unsupported data URL encoding (expected base64)")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// A decoded inline image, ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// MIME type declared in the data URL header, e.g. `image/jpeg`.
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn from_data_url(url: &str) -> Result<Self, ImageError> {
        let rest = url.strip_prefix("data:").ok_or(ImageError::NotADataUrl)?;
        let (header, payload) = rest.split_once(',').ok_or(ImageError::MalformedHeader)?;
        let mime = header.strip_suffix(";base64").ok_or(ImageError::NotBase64)?;
        if mime.is_empty() {
            return Err(ImageError::MalformedHeader);
        }
        let bytes = general_purpose::STANDARD.decode(payload)?;
        Ok(ImagePayload {
            mime: mime.to_string(),
            bytes,
        })
    }
}

/// `true` for an inline (not yet uploaded) image payload.
pub fn is_data_url(value: &str) -> bool {
    value.starts_with("data:")
}

/// Bucket key of a product's image. The extension is fixed so the key can
/// be derived from the id alone when updating or deleting.
pub fn blob_key(product_id: &str) -> String {
    format!("{product_id}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    const JPEG_MAGIC: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];

    fn jpeg_data_url() -> String {
        format!(
            "data:image/jpeg;base64,{}",
            general_purpose::STANDARD.encode(JPEG_MAGIC)
        )
    }

    #[test]
    fn decodes_mime_and_bytes() {
        let payload = ImagePayload::from_data_url(&jpeg_data_url()).unwrap();
        assert_eq!(payload.mime, "image/jpeg");
        assert_eq!(payload.bytes, JPEG_MAGIC);
    }

    #[test]
    fn rejects_plain_urls() {
        assert_eq!(
            ImagePayload::from_data_url("https://cdn.example/1.jpg"),
            Err(ImageError::NotADataUrl)
        );
    }

    #[test]
    fn rejects_missing_payload_separator() {
        assert_eq!(
            ImagePayload::from_data_url("data:image/jpeg;base64"),
            Err(ImageError::MalformedHeader)
        );
    }

    #[test]
    fn rejects_non_base64_encodings() {
        assert_eq!(
            ImagePayload::from_data_url("data:image/jpeg,rawbytes"),
            Err(ImageError::NotBase64)
        );
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            ImagePayload::from_data_url("data:image/png;base64,!!!"),
            Err(ImageError::Decode(_))
        ));
    }

    #[test]
    fn distinguishes_inline_from_resolved_images() {
        assert!(is_data_url(&jpeg_data_url()));
        assert!(!is_data_url("https://cdn.example/1.jpg"));
    }

    #[test]
    fn key_is_derived_from_the_id_alone() {
        assert_eq!(blob_key("42"), "42.jpg");
    }
}
