use image::Rgba;

/// An opaque fill colour for text, expressed in RGB or grey
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// RGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// Grey colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new grey colour, g ranges from 0.0 to 1.0
    pub const fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Convert to a fully opaque raster pixel
    pub fn to_rgba(self) -> Rgba<u8> {
        fn byte(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        match self {
            Colour::RGB { r, g, b } => Rgba([byte(r), byte(g), byte(b), 255]),
            Colour::Grey { g } => {
                let g = byte(g);
                Rgba([g, g, g, 255])
            }
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_grey(0.0);
    /// The secondary grey used for subtitles, rgb(100, 100, 100)
    pub const SLATE: Colour = Colour::new_grey(100.0 / 255.0);
}
