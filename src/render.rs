//! Renders composed cards to raster images.

use crate::canvas::CanvasLayout;
use crate::content::{render_contents, Faces};
use crate::font::GlyphRaster;
use crate::image::Image;
use crate::layout::{Composer, LayoutMode, TitleInput};
use crate::units::Px;
use crate::CardError;
use image::{DynamicImage, ImageOutputFormat, RgbaImage};
use std::io::{Cursor, Seek, Write};

/// A finished card, along with the lines and placements it was drawn from
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub image: RgbaImage,
    pub title_lines: Vec<String>,
    pub subtitle_lines: Vec<String>,
    pub layout: CanvasLayout,
}

impl RenderResult {
    /// Encode the card as a PNG
    pub fn write_png<W: Write + Seek>(&self, w: &mut W) -> Result<(), CardError> {
        DynamicImage::ImageRgba8(self.image.clone()).write_to(w, ImageOutputFormat::Png)?;
        Ok(())
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>, CardError> {
        let mut bytes = Cursor::new(Vec::new());
        self.write_png(&mut bytes)?;
        Ok(bytes.into_inner())
    }
}

impl<F: GlyphRaster + ?Sized> Composer<'_, F> {
    /// Compose a card on a copy of `background` and draw it.
    ///
    /// The canvas takes the background's dimensions. The background itself is left
    /// untouched, so the same template can be rendered any number of times.
    pub fn render<'t>(
        &self,
        background: &Image,
        illustration: Option<&Image>,
        mode: LayoutMode,
        title: impl Into<TitleInput<'t>>,
        subtitle: &str,
    ) -> RenderResult {
        let mut target = background.to_rgba8();
        let canvas = (Px::from(target.width()), Px::from(target.height()));

        // images without pixels have no aspect ratio and are treated as missing
        let illustration = illustration.and_then(|image| {
            let aspect = image.aspect_ratio();
            if aspect.is_none() {
                log::warn!("ignoring an illustration with no pixels");
            }
            aspect.map(|aspect| (image, aspect))
        });

        let composition = self.compose(
            canvas,
            mode,
            title,
            subtitle,
            illustration.map(|(_, aspect)| aspect),
        );

        let faces = Faces {
            title: self.title_face(),
            subtitle: self.subtitle_face(),
        };
        render_contents(
            &composition.layout.contents,
            &faces,
            illustration.map(|(image, _)| image),
            &mut target,
        );

        RenderResult {
            image: target,
            title_lines: composition.title_lines,
            subtitle_lines: composition.subtitle_lines,
            layout: composition.layout,
        }
    }
}
