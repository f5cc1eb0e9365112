//! Logo asset loading
//!
//! The PDF backend embeds JPEG data directly, so the logo is decoded with
//! the `image` crate (PNG or JPEG), flattened onto a white background and
//! re-encoded as JPEG.

use crate::error::{LabelError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, Rgb, RgbImage};
use std::path::{Path, PathBuf};

const JPEG_QUALITY: u8 = 92;

/// A decoded logo, ready for embedding.
#[derive(Debug, Clone)]
pub struct Logo {
    path: PathBuf,
    width: u32,
    height: u32,
    jpeg: Vec<u8>,
}

impl Logo {
    /// Loads and converts the image at `path`.
    ///
    /// # Errors
    ///
    /// [`LabelError::MissingAsset`] if the file does not exist,
    /// [`LabelError::Image`] if it cannot be decoded or re-encoded.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LabelError::MissingAsset(path.to_path_buf()));
        }

        let decoded = image::open(path).map_err(|source| LabelError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_image(path, decoded)
    }

    /// Converts an already decoded image. `path` is only kept for messages.
    pub fn from_image(path: impl Into<PathBuf>, decoded: DynamicImage) -> Result<Self> {
        let path = path.into();
        let rgb = flatten_on_white(&decoded);
        let (width, height) = rgb.dimensions();

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
            .encode_image(&rgb)
            .map_err(|source| LabelError::Image {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), width, height, bytes = jpeg.len(), "logo loaded");
        Ok(Self {
            path,
            width,
            height,
            jpeg,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pixel dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// JPEG-encoded image data
    pub fn jpeg_data(&self) -> &[u8] {
        &self.jpeg
    }
}

fn flatten_on_white(decoded: &DynamicImage) -> RgbImage {
    let rgba = decoded.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let alpha = a as u32;
        let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_flatten_on_white() {
        let mut rgba = RgbaImage::new(3, 1);
        rgba.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        rgba.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
        rgba.put_pixel(2, 0, Rgba([0, 0, 0, 128]));

        let rgb = flatten_on_white(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(rgb.get_pixel(0, 0).0, [10, 20, 30]);
        assert_eq!(rgb.get_pixel(1, 0).0, [255, 255, 255]);
        assert_eq!(rgb.get_pixel(2, 0).0, [127, 127, 127]);
    }

    #[test]
    fn test_from_image_produces_jpeg() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 4, Rgb([200, 0, 0])));
        let logo = Logo::from_image("memory.png", image).unwrap();

        assert_eq!(logo.dimensions(), (8, 4));
        assert_eq!(&logo.jpeg_data()[..2], &[0xFF, 0xD8]);
        assert_eq!(logo.path(), Path::new("memory.png"));
    }

    #[test]
    fn test_load_png_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logo.png");
        RgbaImage::from_pixel(16, 16, Rgba([0, 90, 200, 255]))
            .save(&path)
            .unwrap();

        let logo = Logo::load(&path).unwrap();
        assert_eq!(logo.dimensions(), (16, 16));
        assert!(logo.jpeg_data().len() > 100);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.png");

        match Logo::load(&path) {
            Err(LabelError::MissingAsset(missing)) => assert_eq!(missing, path),
            other => panic!("Expected MissingAsset, got {other:?}"),
        }
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(Logo::load(&path), Err(LabelError::Image { .. })));
    }
}
