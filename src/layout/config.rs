use super::margins::BandMargins;
use super::wrap::BreakRules;
use crate::colour::{colours, Colour};
use crate::units::Px;

/// Size, colour and vertical rhythm for one block of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels per em
    pub size: Px,
    /// Distance from the top of one line to the top of the next
    pub line_spacing: Px,
    pub colour: Colour,
}

/// Parameters of [`LayoutMode::Centered`](super::LayoutMode::Centered)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredParams {
    pub band: BandMargins,
    /// Maximum title width, as a fraction of the canvas width
    pub text_width: f32,
    /// Maximum illustration height, as a fraction of the canvas height
    pub illustration_height_cap: f32,
    /// Total horizontal space kept free beside the illustration
    pub illustration_clearance: Px,
}

/// Parameters of [`LayoutMode::Vertical`](super::LayoutMode::Vertical)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalParams {
    pub band: BandMargins,
    /// Left edge of the text block
    pub left: Px,
    /// Maximum text width, as a fraction of the canvas width
    pub text_width: f32,
    /// Extra space between the title block and the subtitle block
    pub subtitle_gap: Px,
    /// Maximum illustration height, as a fraction of the canvas height
    pub illustration_height_cap: f32,
    /// Total horizontal space kept free beside the illustration
    pub illustration_clearance: Px,
}

/// Illustrations shrink to `scale` while the text fills less than `below` of the
/// text zone's height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancyTier {
    pub below: f32,
    pub scale: f32,
}

/// Parameters of [`LayoutMode::Horizontal`](super::LayoutMode::Horizontal)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalParams {
    pub band: BandMargins,
    /// Fixed margin on both sides of the canvas
    pub side: Px,
    /// Share of the usable width given to the illustration zone on the left
    pub illustration_share: f32,
    /// Share of the usable width given to the text zone on the right
    pub text_share: f32,
    /// Padding inside the text zone, (horizontal, vertical)
    pub text_padding: (Px, Px),
    /// Cap on the wrapping width, as a fraction of the canvas width
    pub text_width_cap: f32,
    /// Extra space between the title block and the subtitle block
    pub subtitle_gap: Px,
    /// Tiers in increasing order of `below`
    pub occupancy_tiers: [OccupancyTier; 2],
    /// Scale used once the text fills more than every tier allows
    pub dense_scale: f32,
}

impl HorizontalParams {
    /// The illustration scale for text that fills `occupancy` of the text zone
    pub fn occupancy_scale(&self, occupancy: f32) -> f32 {
        self.occupancy_tiers
            .iter()
            .find(|tier| occupancy < tier.below)
            .map_or(self.dense_scale, |tier| tier.scale)
    }
}

/// Everything the composer needs besides the font faces themselves.
///
/// The defaults are tuned for double-resolution frames (e.g. 2400×1260 eyecatches)
/// set with a 120px title and an 80px subtitle.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerConfig {
    pub title: TextStyle,
    pub subtitle: TextStyle,
    /// Space between the text block and an illustration stacked under it
    pub text_illustration_gap: Px,
    /// Illustrations with less height than this available are left out
    pub min_illustration_height: Px,
    pub break_rules: BreakRules,
    pub centered: CenteredParams,
    pub vertical: VerticalParams,
    pub horizontal: HorizontalParams,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        ComposerConfig {
            title: TextStyle {
                size: Px(120.0),
                line_spacing: Px(160.0),
                colour: colours::BLACK,
            },
            subtitle: TextStyle {
                size: Px(80.0),
                line_spacing: Px(120.0),
                colour: colours::SLATE,
            },
            text_illustration_gap: Px(120.0),
            min_illustration_height: Px(200.0),
            break_rules: BreakRules::default(),
            centered: CenteredParams {
                band: BandMargins::new(0.15, 0.75, 0.1),
                text_width: 0.8,
                illustration_height_cap: 0.6,
                illustration_clearance: Px(200.0),
            },
            vertical: VerticalParams {
                band: BandMargins::new(0.1, 0.8, 0.1),
                left: Px(200.0),
                text_width: 0.7,
                subtitle_gap: Px(240.0),
                illustration_height_cap: 0.5,
                illustration_clearance: Px(300.0),
            },
            horizontal: HorizontalParams {
                band: BandMargins::new(0.1, 0.8, 0.1),
                side: Px(300.0),
                illustration_share: 0.3,
                text_share: 0.7,
                text_padding: (Px(120.0), Px(80.0)),
                text_width_cap: 0.4,
                subtitle_gap: Px(80.0),
                occupancy_tiers: [
                    OccupancyTier {
                        below: 0.3,
                        scale: 0.95,
                    },
                    OccupancyTier {
                        below: 0.6,
                        scale: 0.85,
                    },
                ],
                dense_scale: 0.75,
            },
        }
    }
}
