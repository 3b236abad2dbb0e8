//! Line wrapping and card composition.
//!
//! Layout happens in two steps, neither of which touches any pixels:
//!
//! - [`wrap_text`](crate::layout::wrap_text) breaks a title into display lines that
//!   fit a width, following locale-specific [`BreakRules`](crate::layout::BreakRules)
//! - [`Composer::compose`](crate::layout::Composer::compose) wraps the title and
//!   subtitle for a [`LayoutMode`](crate::layout::LayoutMode) and places every line
//!   and the illustration on the canvas
//!
//! # Example
//!
//! ```
//! use title_card::{AspectRatio, BlockFont, FaceRole, Px};
//! use title_card::layout::{Composer, ComposerConfig, LayoutMode};
//!
//! let face = BlockFont::default();
//! let composer = Composer::new(&face, &face, ComposerConfig::default());
//!
//! let composition = composer.compose(
//!     (Px(2400.0), Px(1260.0)),
//!     LayoutMode::Vertical,
//!     "How much to spend on wedding favours",
//!     "A guide for guests",
//!     AspectRatio::new(4.0, 3.0),
//! );
//!
//! assert_eq!(composition.layout.spans(FaceRole::Title).count(), composition.title_lines.len());
//! assert!(composition.layout.illustration().is_some());
//! ```

mod compose;
mod config;
mod margins;
mod wrap;

pub use compose::*;
pub use config::*;
pub use margins::*;
pub use wrap::*;
