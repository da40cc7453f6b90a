//! Image decoding and data-URL encoding for the vision path

use crate::io::error::{Result, WithPath, file_system};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::DynamicImage;
use std::path::Path;

/// Decode an image from disk
///
/// # Errors
///
/// Returns an image load error naming `path` when the file cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    decode(path).with_path(path)
}

fn decode(path: &Path) -> image::ImageResult<DynamicImage> {
    image::ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// MIME type for an image path, guessed from its extension
pub fn guess_mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif" | "tiff") => "image/tiff",
        _ => "image/png",
    }
}

/// Base64 data URL for raw image bytes
pub fn encode_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read an image file and encode it as a data URL
///
/// # Errors
///
/// Returns a file system error when the file cannot be read
pub fn read_data_url(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| file_system(path, "read image", e))?;
    Ok(encode_data_url(&bytes, guess_mime_type(path)))
}
