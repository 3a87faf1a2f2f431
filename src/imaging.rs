//! Pixel helpers for thumbnail rendering

use bytes::Bytes;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

/// Resizes to cover an `edge`x`edge` square, cropping overflow.
pub fn aspect_fill(image: &DynamicImage, edge: u32) -> RgbaImage {
    image
        .resize_to_fill(edge, edge, FilterType::Lanczos3)
        .to_rgba8()
}

/// Resizes to fit inside an `edge`x`edge` square, keeping the whole frame.
pub fn aspect_fit(image: &DynamicImage, edge: u32) -> RgbaImage {
    image.resize(edge, edge, FilterType::Lanczos3).to_rgba8()
}

/// Encodes pixels in the fixed thumbnail output representation (PNG).
pub fn encode_png(image: &RgbaImage) -> Result<Bytes, image::ImageError> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png)?;
    Ok(Bytes::from(out.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide_source() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            100,
            50,
            image::Rgba([200, 10, 10, 255]),
        ))
    }

    #[test]
    fn aspect_fill_is_square() {
        let pixels = aspect_fill(&wide_source(), 32);
        assert_eq!(pixels.dimensions(), (32, 32));
    }

    #[test]
    fn aspect_fit_preserves_ratio() {
        let pixels = aspect_fit(&wide_source(), 32);
        assert_eq!(pixels.dimensions(), (32, 16));
    }

    #[test]
    fn encode_png_emits_png_signature() {
        let pixels = RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255]));
        let data = encode_png(&pixels).unwrap();
        assert_eq!(&data[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn encoded_thumbnail_roundtrips() {
        let pixels = aspect_fill(&wide_source(), 16);
        let data = encode_png(&pixels).unwrap();
        let decoded = image::load_from_memory(&data).unwrap();
        assert_eq!(decoded.to_rgba8().dimensions(), (16, 16));
    }
}
