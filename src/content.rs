//! Draws computed layouts onto raster canvases.

use crate::canvas::{CanvasContents, FaceRole, SpanLayout};
use crate::font::GlyphRaster;
use crate::image::Image;

/// The two faces a layout can refer to
pub(crate) struct Faces<'f, F: ?Sized> {
    pub title: &'f F,
    pub subtitle: &'f F,
}

impl<F: ?Sized> Faces<'_, F> {
    fn get(&self, role: FaceRole) -> &F {
        match role {
            FaceRole::Title => self.title,
            FaceRole::Subtitle => self.subtitle,
        }
    }
}

/// Renders layout contents onto the canvas, in order.
///
/// Text is filled directly onto the canvas; the illustration is resampled to its
/// placement size and alpha-composited on top of whatever is already there.
/// Image placements are skipped when no illustration is supplied.
pub(crate) fn render_contents<F: GlyphRaster + ?Sized>(
    contents: &[CanvasContents],
    faces: &Faces<'_, F>,
    illustration: Option<&Image>,
    target: &mut image::RgbaImage,
) {
    for content in contents.iter() {
        match content {
            CanvasContents::Text(span) => render_span(target, span, faces),
            CanvasContents::Image(layout) => {
                let Some(illustration) = illustration else {
                    continue;
                };

                let width = *layout.position.width() as u32;
                let height = *layout.position.height() as u32;
                if width == 0 || height == 0 {
                    log::warn!("skipping zero-sized illustration placement {layout:?}");
                    continue;
                }

                let scaled = illustration.resized(width, height);
                image::imageops::overlay(
                    target,
                    &scaled,
                    *layout.position.x1 as i64,
                    *layout.position.y1 as i64,
                );
            }
        }
    }
}

fn render_span<F: GlyphRaster + ?Sized>(
    target: &mut image::RgbaImage,
    span: &SpanLayout,
    faces: &Faces<'_, F>,
) {
    faces.get(span.font.role).draw_text(
        target,
        &span.text,
        span.font.size,
        span.coords,
        span.colour.to_rgba(),
    );
}
