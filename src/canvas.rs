use crate::colour::Colour;
use crate::layout::Margins;
use crate::rect::Rect;
use crate::units::Px;

/// Canvas dimensions as (width, height) in pixels.
pub type CanvasSize = (Px, Px);

/// Which of the composer's two faces a span is set in
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FaceRole {
    Title,
    Subtitle,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub role: FaceRole,
    pub size: Px,
}

/// One display line, positioned by the top-left corner of its ascender line
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Px, Px),
}

/// Where the illustration gets pasted, already scaled to its final size
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub position: Rect,
}

#[derive(Clone, PartialEq, Debug)]
pub enum CanvasContents {
    Text(SpanLayout),
    Image(ImageLayout),
}

/// The placements computed for one render. Layouts are derived fresh for every
/// call and hold no reference to the canvas pixels they describe.
#[derive(Clone, PartialEq, Debug)]
pub struct CanvasLayout {
    /// The size of the canvas
    pub media_box: Rect,
    /// The content band inside of the mode's margins. Illustrations are kept within it.
    pub content_box: Rect,
    /// Text and illustration placements, in drawing order
    pub contents: Vec<CanvasContents>,
}

impl CanvasLayout {
    pub fn new(size: CanvasSize, margins: Margins) -> CanvasLayout {
        CanvasLayout {
            media_box: Rect {
                x1: Px(0.0),
                y1: Px(0.0),
                x2: size.0,
                y2: size.1,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.top,
                x2: size.0 - margins.right,
                y2: size.1 - margins.bottom,
            },
            contents: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(CanvasContents::Text(span));
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(CanvasContents::Image(image));
    }

    /// All text spans set in the given face, in drawing order
    pub fn spans(&self, role: FaceRole) -> impl Iterator<Item = &SpanLayout> + '_ {
        self.contents.iter().filter_map(move |c| match c {
            CanvasContents::Text(span) if span.font.role == role => Some(span),
            _ => None,
        })
    }

    /// The illustration placement, if the layout has room for one
    pub fn illustration(&self) -> Option<&Rect> {
        self.contents.iter().find_map(|c| match c {
            CanvasContents::Image(image) => Some(&image.position),
            _ => None,
        })
    }
}
