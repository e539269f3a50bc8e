// SPDX-License-Identifier: MPL-2.0
//! Toolkit-neutral decoded bitmaps.
//!
//! The fetch layer deals in [`Bitmap`]s so that nothing below the UI adapter
//! depends on Iced types.

use crate::error::Result;
use image_rs::GenericImageView;
use std::sync::Arc;

/// A decoded RGBA8 image, independent of any UI toolkit.
///
/// Pixels are held in an `Arc` so handing the bitmap to a display surface and
/// keeping a copy around shares a single allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgba: Arc<Vec<u8>>,
}

impl Bitmap {
    /// Creates a bitmap from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize) * 4);
        Self {
            width,
            height,
            rgba: Arc::new(pixels),
        }
    }

    /// Decodes an encoded raster payload (PNG, JPEG, GIF, ...) into RGBA8.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Fetch`] when the payload is not a
    /// decodable image.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        let img = image_rs::load_from_memory(bytes)?;
        let (width, height) = img.dimensions();
        let pixels = img.to_rgba8().into_vec();
        Ok(Self::from_rgba(width, height, pixels))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixels, row-major.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba
    }

    /// True when the bitmap has no visible pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let img = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image_rs::ImageFormat::Png,
        )
        .expect("failed to encode png");
        bytes
    }

    #[test]
    fn from_encoded_decodes_png_dimensions() {
        let bitmap = Bitmap::from_encoded(&encoded_png(4, 2)).expect("png should decode");
        assert_eq!(bitmap.width(), 4);
        assert_eq!(bitmap.height(), 2);
        assert_eq!(bitmap.rgba_bytes().len(), 4 * 2 * 4);
        assert!(!bitmap.is_empty());
    }

    #[test]
    fn from_encoded_rejects_garbage() {
        match Bitmap::from_encoded(b"not an image") {
            Err(Error::Fetch(message)) => assert!(!message.is_empty()),
            other => panic!("expected Fetch error, got {other:?}"),
        }
    }

    #[test]
    fn from_rgba_keeps_pixels() {
        let bitmap = Bitmap::from_rgba(1, 1, vec![1, 2, 3, 4]);
        assert_eq!(bitmap.rgba_bytes(), &[1, 2, 3, 4]);
    }

    #[test]
    fn clones_share_the_pixel_buffer() {
        let bitmap = Bitmap::from_rgba(1, 1, vec![255; 4]);
        let copy = bitmap.clone();
        assert_eq!(bitmap, copy);
        assert!(std::ptr::eq(
            bitmap.rgba_bytes().as_ptr(),
            copy.rgba_bytes().as_ptr()
        ));
    }
}
