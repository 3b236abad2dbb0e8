use crate::canvas::CanvasSize;
use crate::units::Px;

/// Margins around the content band of a canvas. Nothing prevents content from
/// overflowing the margins; they are guidelines for the layout functions.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// The vertical content band of a layout mode, as fractions of the canvas height.
///
/// The band and its top and bottom margins scale with the canvas. The fractions
/// need not add up to 1; whatever is left over is unused space under the band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandMargins {
    /// Margin above the band
    pub top: f32,
    /// Height of the band itself
    pub band: f32,
    /// Margin that illustrations are kept clear of at the bottom of the canvas
    pub bottom: f32,
}

/// A [`BandMargins`] resolved against a concrete canvas, floored to whole pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top: Px,
    pub height: Px,
    pub bottom_margin: Px,
}

impl BandMargins {
    pub fn new(top: f32, band: f32, bottom: f32) -> BandMargins {
        BandMargins { top, band, bottom }
    }

    pub fn resolve(&self, canvas: CanvasSize) -> Band {
        let height = canvas.1;
        Band {
            top: height.fraction(self.top),
            height: height.fraction(self.band),
            bottom_margin: height.fraction(self.bottom),
        }
    }
}

impl Band {
    /// Margins of the band with the given fixed side margin
    pub fn margins(&self, side: Px) -> Margins {
        Margins::trbl(self.top, side, self.bottom_margin, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_scale_with_the_canvas() {
        let band = BandMargins::new(0.15, 0.75, 0.1).resolve((Px(1200.0), Px(1600.0)));
        assert_eq!(band.top, Px(240.0));
        assert_eq!(band.height, Px(1200.0));
        assert_eq!(band.bottom_margin, Px(160.0));

        let margins = band.margins(Px(100.0));
        assert_eq!(margins, Margins::trbl(Px(240.0), Px(100.0), Px(160.0), Px(100.0)));
    }

    #[test]
    fn bands_are_floored() {
        let band = BandMargins::new(0.1, 0.8, 0.1).resolve((Px(100.0), Px(1005.0)));
        assert_eq!(band.top, Px(100.0));
        assert_eq!(band.height, Px(804.0));
    }
}
