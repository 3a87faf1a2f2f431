//! Format-tag to MIME lookup
//!
//! Stores report an opaque format tag next to original media bytes; the
//! handler maps it to a MIME type here. Unknown tags yield `None` and are
//! surfaced as an explicit error upstream rather than aborting.

use mime::Mime;

pub fn mime_for_tag(tag: &str) -> Option<Mime> {
    let tag = tag.to_ascii_lowercase();
    let mime = match tag.as_str() {
        "jpg" | "jpeg" => mime::IMAGE_JPEG,
        "png" => mime::IMAGE_PNG,
        "gif" => mime::IMAGE_GIF,
        "tif" | "tiff" => "image/tiff".parse().ok()?,
        "heic" => "image/heic".parse().ok()?,
        "heif" => "image/heif".parse().ok()?,
        "webp" => "image/webp".parse().ok()?,
        "mov" | "quicktime" => "video/quicktime".parse().ok()?,
        "mp4" => "video/mp4".parse().ok()?,
        "m4v" => "video/x-m4v".parse().ok()?,
        _ => return None,
    };
    Some(mime)
}
