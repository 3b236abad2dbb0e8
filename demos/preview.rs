//! Draws a block preview of each layout mode, no font or assets required.

use image::{DynamicImage, Rgba, RgbaImage};
use title_card::layout::{Composer, ComposerConfig, LayoutMode};
use title_card::{BlockFont, Image};

fn main() {
    let face = BlockFont::default();
    let composer = Composer::new(&face, &face, ComposerConfig::default());

    let frame = RgbaImage::from_pixel(2400, 1260, Rgba([250, 246, 238, 255]));
    let frame = Image::new(DynamicImage::ImageRgba8(frame));
    let illustration = RgbaImage::from_pixel(400, 300, Rgba([230, 120, 90, 255]));
    let illustration = Image::new(DynamicImage::ImageRgba8(illustration));

    let title = lipsum::lipsum_title();
    for (mode, name) in [
        (LayoutMode::Centered, "preview-centered.png"),
        (LayoutMode::Vertical, "preview-vertical.png"),
        (LayoutMode::Horizontal, "preview-horizontal.png"),
    ] {
        let card = composer.render(&frame, Some(&illustration), mode, title.as_str(), "Lorem ipsum");
        let mut out = std::fs::File::create(name).unwrap();
        card.write_png(&mut out).unwrap();
    }
}
