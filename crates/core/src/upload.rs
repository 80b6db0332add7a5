//! Validation for binary image upload endpoints.

use crate::error::CoreError;

/// Maximum accepted size for an uploaded image, in bytes (10 MB).
pub const MAX_IMAGE_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Validate the declared content type and byte length of an image upload.
///
/// The content type must start with `image/` and the payload must be
/// non-empty and within [`MAX_IMAGE_UPLOAD_BYTES`].
pub fn validate_image_upload(content_type: &str, len: usize) -> Result<(), CoreError> {
    if !content_type.starts_with("image/") {
        return Err(CoreError::Validation(format!(
            "Unsupported content type '{content_type}'. Only image uploads are accepted"
        )));
    }
    if len == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if len > MAX_IMAGE_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "File size {len} bytes exceeds the {MAX_IMAGE_UPLOAD_BYTES} byte limit"
        )));
    }
    Ok(())
}

/// Probe image dimensions from the header bytes.
///
/// Returns `None` when the format is not recognised; dimension extraction is
/// best-effort metadata, never a reason to reject an upload.
pub fn probe_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

/// Map a content type to the file extension used for storage keys.
pub fn extension_for_content_type(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_rejects_non_image_content_type() {
        let err = validate_image_upload("application/pdf", 100).unwrap_err();
        assert!(err.to_string().contains("application/pdf"));
    }

    #[test]
    fn test_rejects_empty_payload() {
        assert_matches!(
            validate_image_upload("image/png", 0),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn test_rejects_oversize_payload() {
        assert_matches!(
            validate_image_upload("image/png", MAX_IMAGE_UPLOAD_BYTES + 1),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn test_accepts_image_at_limit() {
        assert!(validate_image_upload("image/png", MAX_IMAGE_UPLOAD_BYTES).is_ok());
        assert!(validate_image_upload("image/jpeg", 1).is_ok());
    }

    #[test]
    fn test_probe_dimensions_png() {
        // Encode a tiny PNG in-memory and read its dimensions back.
        let mut buf = std::io::Cursor::new(Vec::new());
        image::RgbaImage::new(3, 2)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        assert_eq!(probe_dimensions(buf.get_ref()), Some((3, 2)));
    }

    #[test]
    fn test_probe_dimensions_garbage_is_none() {
        assert_eq!(probe_dimensions(b"not an image"), None);
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(extension_for_content_type("image/png"), "png");
        assert_eq!(extension_for_content_type("image/jpeg"), "jpg");
        assert_eq!(extension_for_content_type("image/x-exotic"), "bin");
    }
}
