use crate::units::AspectRatio;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// A decoded raster image: either a background frame or an illustration
#[derive(Debug, Clone)]
pub struct Image {
    pub image: DynamicImage,
}

impl Image {
    pub fn new(image: DynamicImage) -> Image {
        Image { image }
    }

    /// Load and decode an image file. TGA files are recognized by their extension,
    /// every other format is guessed from the file contents.
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, ImageError> {
        let path = path.as_ref();
        let is_tga = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tga"));

        let data = std::fs::read(path)?;
        if is_tga {
            let image = image::load_from_memory_with_format(&data, image::ImageFormat::Tga)?;
            Ok(Image::new(image))
        } else {
            Self::new_from_memory(&data)
        }
    }

    /// Decode an image from encoded bytes (PNG, JPEG, ...)
    pub fn new_from_memory(data: &[u8]) -> Result<Image, ImageError> {
        let format = image::guess_format(data)?;
        let image = image::load_from_memory_with_format(data, format)?;
        Ok(Image::new(image))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The native width / height ratio, or [None] for an image with no pixels
    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        AspectRatio::new(self.width() as f32, self.height() as f32)
    }

    /// A copy of the image as 8-bit RGBA, used as a mutable drawing surface
    pub fn to_rgba8(&self) -> RgbaImage {
        self.image.to_rgba8()
    }

    /// Resample the image to exactly `width` × `height` with a Lanczos filter. The
    /// caller is responsible for keeping the aspect ratio if it should be kept.
    pub fn resized(&self, width: u32, height: u32) -> RgbaImage {
        image::imageops::resize(&self.image.to_rgba8(), width, height, FilterType::Lanczos3)
    }
}

impl From<DynamicImage> for Image {
    fn from(image: DynamicImage) -> Self {
        Image::new(image)
    }
}
