mod assets;
pub use assets::*;

mod batch;
pub use batch::*;

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

pub(crate) mod content;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

/// Line wrapping and the composition of title, subtitle and illustration on a canvas
pub mod layout;

mod rect;
pub use rect::*;

mod render;
pub use render::*;

mod units;
pub use units::*;

mod error;
pub use error::*;
