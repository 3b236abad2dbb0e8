use crate::{units::Px, CardError};
use ab_glyph::{Font as _, FontVec};
use image::{Pixel, Rgba, RgbaImage};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// Measures text for wrapping and placement. Implementations must be deterministic:
/// measuring the same string at the same size always yields the same result.
pub trait FontMetrics {
    /// Horizontal extent of `text` when set at `size` pixels per em
    fn text_width(&self, text: &str, size: Px) -> Px;

    /// Distance from the top of a line to its baseline at `size` pixels per em
    fn ascent(&self, size: Px) -> Px;
}

/// A font that can also fill its glyphs onto a raster canvas
pub trait GlyphRaster: FontMetrics {
    /// Draw `text` with its top-left corner (ascender line) at `origin`. Pixels that
    /// fall outside of `target` are clipped.
    fn draw_text(
        &self,
        target: &mut RgbaImage,
        text: &str,
        size: Px,
        origin: (Px, Px),
        colour: Rgba<u8>,
    );
}

/// A font face together with the pixel size to set it at. This is the unit that
/// text gets measured against while wrapping.
#[derive(Debug)]
pub struct FontRef<'f, F: ?Sized> {
    pub face: &'f F,
    pub size: Px,
}

impl<F: ?Sized> Clone for FontRef<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for FontRef<'_, F> {}

impl<'f, F: FontMetrics + ?Sized> FontRef<'f, F> {
    pub fn new(face: &'f F, size: Px) -> Self {
        FontRef { face, size }
    }

    /// Calculate the width of a given string of text with this font and size
    pub fn width_of(&self, text: &str) -> Px {
        self.face.text_width(text, self.size)
    }
}

/// A parsed TTF or OTF font. Metrics are read through `owned_ttf_parser`, while
/// glyph outlines are rasterized with `ab_glyph`.
pub struct Font {
    pub face: OwnedFace,
    outlines: FontVec,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("units_per_em", &self.face.as_face_ref().units_per_em())
            .finish_non_exhaustive()
    }
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, CardError> {
        let face = OwnedFace::from_vec(bytes.clone(), 0)?;
        let outlines = FontVec::try_from_vec(bytes)?;

        Ok(Font { face, outlines })
    }

    /// Read and parse a font file
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, CardError> {
        let bytes = std::fs::read(path)?;
        Self::load(bytes)
    }

    fn scaling(&self, size: Px) -> f32 {
        *size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Find the glyph for a character, falling back to the replacement character and
    /// then to a question mark for characters the font does not cover
    fn glyph_for(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    fn advance(&self, gid: GlyphId, size: Px) -> Px {
        let units = self
            .face
            .as_face_ref()
            .glyph_hor_advance(gid)
            .unwrap_or_default();
        Px(self.scaling(size) * units as f32)
    }
}

impl FontMetrics for Font {
    fn text_width(&self, text: &str, size: Px) -> Px {
        text.chars()
            .filter_map(|ch| self.glyph_for(ch))
            .map(|gid| self.advance(gid, size))
            .sum()
    }

    fn ascent(&self, size: Px) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().ascender() as f32)
    }
}

impl GlyphRaster for Font {
    fn draw_text(
        &self,
        target: &mut RgbaImage,
        text: &str,
        size: Px,
        origin: (Px, Px),
        colour: Rgba<u8>,
    ) {
        let Some(units_per_em) = self.outlines.units_per_em() else {
            log::warn!("font has no units per em, skipping {text:?}");
            return;
        };
        // ab_glyph scales by line height, not by em
        let scale = *size * self.outlines.height_unscaled() / units_per_em;
        let baseline = *origin.1 + *self.ascent(size);

        let mut x = *origin.0;
        for ch in text.chars() {
            let Some(gid) = self.glyph_for(ch) else {
                continue;
            };

            let glyph = ab_glyph::GlyphId(gid.0)
                .with_scale_and_position(scale, ab_glyph::point(x, baseline));
            if let Some(outline) = self.outlines.outline_glyph(glyph) {
                let bounds = outline.px_bounds();
                let (left, top) = (bounds.min.x as i64, bounds.min.y as i64);
                outline.draw(|gx, gy, coverage| {
                    blend_pixel(target, left + gx as i64, top + gy as i64, colour, coverage);
                });
            }

            x += *self.advance(gid, size);
        }
    }
}

/// Fixed-advance metrics that draw every visible character as a solid block. Layouts
/// produced with it are exact and reproducible, which makes it useful for previews
/// and for checking layouts without shipping a font file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockFont {
    /// Advance of every character, as a fraction of the em size
    pub advance: f32,
    /// Ascent as a fraction of the em size
    pub ascent: f32,
}

impl BlockFont {
    pub fn new(advance: f32, ascent: f32) -> BlockFont {
        BlockFont { advance, ascent }
    }
}

impl Default for BlockFont {
    fn default() -> Self {
        BlockFont::new(0.5, 0.8)
    }
}

impl FontMetrics for BlockFont {
    /// Widths are rounded to whole pixels, like a rasterized bounding box
    fn text_width(&self, text: &str, size: Px) -> Px {
        Px((*size * self.advance * text.chars().count() as f32).round())
    }

    fn ascent(&self, size: Px) -> Px {
        size * self.ascent
    }
}

impl GlyphRaster for BlockFont {
    fn draw_text(
        &self,
        target: &mut RgbaImage,
        text: &str,
        size: Px,
        origin: (Px, Px),
        colour: Rgba<u8>,
    ) {
        let advance = *size * self.advance;
        let top = (*origin.1).floor() as i64;
        let bottom = (*origin.1 + *self.ascent(size)).floor() as i64;

        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let left = (*origin.0 + advance * i as f32).floor() as i64;
            // leave a one pixel gap between neighbouring blocks
            let right = (*origin.0 + advance * (i + 1) as f32).floor() as i64 - 1;
            for y in top..bottom {
                for x in left..right {
                    blend_pixel(target, x, y, colour, 1.0);
                }
            }
        }
    }
}

/// Blend `colour` into the pixel at (x, y) with the given coverage in `0.0..=1.0`,
/// ignoring coordinates outside of the target
pub(crate) fn blend_pixel(target: &mut RgbaImage, x: i64, y: i64, colour: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= target.width() as i64 || y >= target.height() as i64 {
        return;
    }
    let mut src = colour;
    src.0[3] = (colour.0[3] as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
    if src.0[3] == 0 {
        return;
    }
    target.get_pixel_mut(x as u32, y as u32).blend(&src);
}
