#![allow(dead_code)]

use image::{DynamicImage, Rgba, RgbaImage};
use std::collections::BTreeMap;
use std::io;
use title_card::layout::{Composer, ComposerConfig};
use title_card::{AssetError, AssetId, AssetSource, BlockFont, Image, ImageError};

pub const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// 40px per character at the default title size
pub const FACE: BlockFont = BlockFont {
    advance: 1.0 / 3.0,
    ascent: 0.8,
};

pub fn composer() -> Composer<'static, BlockFont> {
    Composer::new(&FACE, &FACE, ComposerConfig::default())
}

pub fn solid(width: u32, height: u32, colour: Rgba<u8>) -> Image {
    Image::new(DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, colour)))
}

/// An in-memory asset source. Identifiers without an image fail to fetch.
#[derive(Default)]
pub struct MemoryAssets {
    pub backgrounds: Vec<AssetId>,
    pub illustrations: Vec<AssetId>,
    pub images: BTreeMap<AssetId, Image>,
}

impl MemoryAssets {
    pub fn with_background(mut self, id: &str, image: Option<Image>) -> Self {
        self.backgrounds.push(AssetId::from(id));
        if let Some(image) = image {
            self.images.insert(AssetId::from(id), image);
        }
        self
    }

    pub fn with_illustration(mut self, id: &str, image: Option<Image>) -> Self {
        self.illustrations.push(AssetId::from(id));
        if let Some(image) = image {
            self.images.insert(AssetId::from(id), image);
        }
        self
    }
}

impl AssetSource for MemoryAssets {
    fn backgrounds(&self) -> Vec<AssetId> {
        self.backgrounds.clone()
    }

    fn illustrations(&self) -> Vec<AssetId> {
        self.illustrations.clone()
    }

    fn fetch(&self, id: &AssetId) -> Result<Image, AssetError> {
        self.images.get(id).cloned().ok_or_else(|| AssetError {
            id: id.clone(),
            source: ImageError::Io(io::Error::new(io::ErrorKind::NotFound, "no such asset")),
        })
    }
}
