use std::borrow::Cow;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use url::Url;

use crate::errors::{AppError, AppResult};

pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Checks size and sniffed type of an uploaded image, returning its MIME type.
pub fn sniff_image(bytes: &[u8], max_bytes: usize) -> AppResult<&'static str> {
    if bytes.is_empty() {
        return Err(AppError::BadRequest("Image file is empty".to_string()));
    }
    if bytes.len() > max_bytes {
        return Err(AppError::BadRequest(format!(
            "File size exceeds {} byte limit",
            max_bytes
        )));
    }

    let file_type =
        infer::get(bytes).ok_or_else(|| AppError::BadRequest("Invalid file type".to_string()))?;
    let mime = file_type.mime_type();
    if !ACCEPTED_IMAGE_TYPES.contains(&mime) {
        return Err(AppError::BadRequest(
            "Only JPEG, PNG, GIF and WebP images are allowed".to_string(),
        ));
    }
    Ok(mime)
}

pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

pub fn validate_image_uri(uri: &str) -> Result<(), validator::ValidationError> {
    if Url::parse(uri).is_err() {
        let mut err = validator::ValidationError::new("image_uri");
        err.message = Some(Cow::from("Image must be a URI or data URI"));
        return Err(err);
    }
    Ok(())
}
