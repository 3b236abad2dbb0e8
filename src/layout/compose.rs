use super::config::{ComposerConfig, TextStyle};
use super::wrap::wrap_text;
use crate::canvas::{CanvasLayout, CanvasSize, FaceRole, ImageLayout, SpanFont, SpanLayout};
use crate::font::{FontMetrics, FontRef};
use crate::rect::Rect;
use crate::units::{AspectRatio, Px};

/// How title, subtitle and illustration are arranged on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// Centred title lines over a centred illustration, for images inserted
    /// between paragraphs. Subtitles are not drawn in this mode.
    Centered,
    /// Left-aligned title and subtitle with the illustration centred under them
    #[default]
    Vertical,
    /// Illustration zone on the left, text zone on the right
    Horizontal,
}

/// A title, either as text to be wrapped or as display lines fixed by the caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TitleInput<'a> {
    Text(&'a str),
    /// Lines are used verbatim, no matter how wide they are
    Lines(&'a [String]),
}

impl<'a> From<&'a str> for TitleInput<'a> {
    fn from(text: &'a str) -> Self {
        TitleInput::Text(text)
    }
}

impl<'a> From<&'a String> for TitleInput<'a> {
    fn from(text: &'a String) -> Self {
        TitleInput::Text(text)
    }
}

impl<'a> From<&'a [String]> for TitleInput<'a> {
    fn from(lines: &'a [String]) -> Self {
        TitleInput::Lines(lines)
    }
}

/// The outcome of composing one card
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub layout: CanvasLayout,
    pub title_lines: Vec<String>,
    pub subtitle_lines: Vec<String>,
}

/// Space left for an illustration stacked under a block of text
struct Stack {
    /// Height left in the band
    budget: Px,
    /// Maximum height, as a fraction of the canvas height
    height_cap: f32,
    /// Where the illustration starts
    top: Px,
}

/// Computes card layouts. Composition is pure: the same inputs always give the same
/// layout and nothing is retained between calls, so one composer can be shared by
/// any number of renders.
#[derive(Debug)]
pub struct Composer<'f, F: ?Sized> {
    title_face: &'f F,
    subtitle_face: &'f F,
    config: ComposerConfig,
}

impl<'f, F: FontMetrics + ?Sized> Composer<'f, F> {
    pub fn new(title_face: &'f F, subtitle_face: &'f F, config: ComposerConfig) -> Self {
        Composer {
            title_face,
            subtitle_face,
            config,
        }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub(crate) fn title_face(&self) -> &'f F {
        self.title_face
    }

    pub(crate) fn subtitle_face(&self) -> &'f F {
        self.subtitle_face
    }

    /// Lay out a card on a canvas of the given size.
    ///
    /// `illustration` is the aspect ratio of the illustration to place, if any; it is
    /// left out whenever the layout cannot give it enough room. Empty titles and
    /// subtitles produce no lines.
    pub fn compose<'t>(
        &self,
        canvas: CanvasSize,
        mode: LayoutMode,
        title: impl Into<TitleInput<'t>>,
        subtitle: &str,
        illustration: Option<AspectRatio>,
    ) -> Composition {
        let title = title.into();
        let composition = match mode {
            LayoutMode::Centered => {
                if !subtitle.is_empty() {
                    log::debug!("centered layouts draw no subtitle, ignoring {subtitle:?}");
                }
                self.centered(canvas, title, illustration)
            }
            LayoutMode::Vertical => self.vertical(canvas, title, subtitle, illustration),
            LayoutMode::Horizontal => self.horizontal(canvas, title, subtitle, illustration),
        };

        log::debug!(
            "{mode:?} layout on {}×{}: {} title lines, {} subtitle lines, illustration at {:?}",
            canvas.0,
            canvas.1,
            composition.title_lines.len(),
            composition.subtitle_lines.len(),
            composition.layout.illustration(),
        );
        composition
    }

    /// Title lines centred across the canvas, with the illustration centred under them
    pub fn centered(
        &self,
        canvas: CanvasSize,
        title: TitleInput<'_>,
        illustration: Option<AspectRatio>,
    ) -> Composition {
        let params = &self.config.centered;
        let style = &self.config.title;
        let width = canvas.0;
        let band = params.band.resolve(canvas);
        let margins = band.margins(params.illustration_clearance / 2.0);
        let mut layout = CanvasLayout::new(canvas, margins);

        let title_lines = self.title_lines(title, width.fraction(params.text_width));

        let mut y = band.top;
        for line in &title_lines {
            let line_width = self.title_face.text_width(line, style.size);
            let x = ((width - line_width) / 2.0).whole();
            layout.add_span(span(style, FaceRole::Title, line, (x, y)));
            y += style.line_spacing;
        }

        let text_height = y - band.top;
        let gap = self.gap_after(text_height);
        if let Some(aspect) = illustration {
            let stack = Stack {
                budget: band.height - text_height - gap,
                height_cap: params.illustration_height_cap,
                top: y + gap,
            };
            if let Some(position) = self.stack_illustration(&layout, aspect, stack) {
                layout.add_image(ImageLayout { position });
            }
        }

        Composition {
            layout,
            title_lines,
            subtitle_lines: Vec::new(),
        }
    }

    /// Left-aligned title and subtitle, with the illustration centred under them
    pub fn vertical(
        &self,
        canvas: CanvasSize,
        title: TitleInput<'_>,
        subtitle: &str,
        illustration: Option<AspectRatio>,
    ) -> Composition {
        let params = &self.config.vertical;
        let band = params.band.resolve(canvas);
        let margins = band.margins(params.illustration_clearance / 2.0);
        let mut layout = CanvasLayout::new(canvas, margins);

        let max_width = canvas.0.fraction(params.text_width);
        let title_lines = self.title_lines(title, max_width);
        let subtitle_lines = self.subtitle_lines(subtitle, max_width);

        let left = params.left;
        let mut y = self.stack_lines(&mut layout, FaceRole::Title, &title_lines, left, band.top);
        if !title_lines.is_empty() && !subtitle_lines.is_empty() {
            y += params.subtitle_gap;
        }
        y = self.stack_lines(&mut layout, FaceRole::Subtitle, &subtitle_lines, left, y);

        let text_height = y - band.top;
        let gap = self.gap_after(text_height);
        if let Some(aspect) = illustration {
            let stack = Stack {
                budget: band.height - text_height - gap,
                height_cap: params.illustration_height_cap,
                top: y + gap,
            };
            if let Some(position) = self.stack_illustration(&layout, aspect, stack) {
                layout.add_image(ImageLayout { position });
            }
        }

        Composition {
            layout,
            title_lines,
            subtitle_lines,
        }
    }

    /// Illustration zone on the left and text zone on the right. The illustration is
    /// shrunk further the more of the text zone's height the text fills.
    pub fn horizontal(
        &self,
        canvas: CanvasSize,
        title: TitleInput<'_>,
        subtitle: &str,
        illustration: Option<AspectRatio>,
    ) -> Composition {
        let params = &self.config.horizontal;
        let (width, _) = canvas;
        let band = params.band.resolve(canvas);
        let mut layout = CanvasLayout::new(canvas, band.margins(params.side));

        let content_width = width - params.side * 2.0;
        let content_height = band.height;
        let zone_width = content_width.fraction(params.illustration_share);
        let text_zone_width = content_width.fraction(params.text_share);
        let (pad_x, pad_y) = params.text_padding;
        let max_width = (text_zone_width - pad_x * 2.0).min(width.fraction(params.text_width_cap));

        let title_lines = self.title_lines(title, max_width);
        let subtitle_lines = self.subtitle_lines(subtitle, max_width);

        let subtitle_gap = if !title_lines.is_empty() && !subtitle_lines.is_empty() {
            params.subtitle_gap
        } else {
            Px(0.0)
        };
        let text_height = self.config.title.line_spacing * title_lines.len() as f32
            + subtitle_gap
            + self.config.subtitle.line_spacing * subtitle_lines.len() as f32;

        // a lone title sits in the middle of the zone, anything else hangs from the top
        let text_top = if subtitle_lines.is_empty() && !title_lines.is_empty() {
            band.top + ((content_height - text_height) / 2.0).whole()
        } else {
            band.top + pad_y
        };
        let text_x = params.side + zone_width + pad_x;

        let y = self.stack_lines(&mut layout, FaceRole::Title, &title_lines, text_x, text_top);
        self.stack_lines(&mut layout, FaceRole::Subtitle, &subtitle_lines, text_x, y + subtitle_gap);

        if let Some(aspect) = illustration {
            if content_height <= Px(0.0) || zone_width <= Px(0.0) {
                log::info!("no room for an illustration zone on a {}×{} canvas", width, canvas.1);
            } else {
                let occupancy = text_height / content_height;
                let scale = params.occupancy_scale(occupancy);
                log::debug!("text fills {occupancy:.2} of its zone, illustration scale {scale}");

                let content = &layout.content_box;
                let zone = Rect::from_origin_size(content.x1, content.y1, zone_width, content_height);
                if let Some(position) = fit_in_zone(&zone, aspect, scale) {
                    layout.add_image(ImageLayout { position });
                }
            }
        }

        Composition {
            layout,
            title_lines,
            subtitle_lines,
        }
    }

    fn title_lines(&self, title: TitleInput<'_>, max_width: Px) -> Vec<String> {
        match title {
            TitleInput::Text(text) => wrap_text(
                text,
                FontRef::new(self.title_face, self.config.title.size),
                max_width,
                &self.config.break_rules,
            ),
            TitleInput::Lines(lines) => lines.to_vec(),
        }
    }

    fn subtitle_lines(&self, subtitle: &str, max_width: Px) -> Vec<String> {
        wrap_text(
            subtitle,
            FontRef::new(self.subtitle_face, self.config.subtitle.size),
            max_width,
            &self.config.break_rules,
        )
    }

    /// Stacks left-aligned lines downwards from `top`, returning the y just past the
    /// last line
    fn stack_lines(
        &self,
        layout: &mut CanvasLayout,
        role: FaceRole,
        lines: &[String],
        x: Px,
        top: Px,
    ) -> Px {
        let style = match role {
            FaceRole::Title => &self.config.title,
            FaceRole::Subtitle => &self.config.subtitle,
        };
        let mut y = top;
        for line in lines {
            layout.add_span(span(style, role, line, (x, y)));
            y += style.line_spacing;
        }
        y
    }

    /// The text-to-illustration gap only separates something from something
    fn gap_after(&self, text_height: Px) -> Px {
        if text_height > Px(0.0) {
            self.config.text_illustration_gap
        } else {
            Px(0.0)
        }
    }

    /// Sizes an illustration to the height left under the text, then narrows it to the
    /// width of the layout's content box if it ends up too wide, and centres it on the
    /// canvas. The illustration never reaches below the content box.
    fn stack_illustration(
        &self,
        layout: &CanvasLayout,
        aspect: AspectRatio,
        stack: Stack,
    ) -> Option<Rect> {
        let (width, height) = (layout.media_box.width(), layout.media_box.height());
        if stack.budget <= self.config.min_illustration_height {
            log::info!("leaving the illustration out, only {} of height left", stack.budget);
            return None;
        }

        let mut target_height = stack.budget.min(height.fraction(stack.height_cap));
        let mut target_width = target_height.fraction(aspect.get());
        let max_width = layout.content_box.width();
        if target_width > max_width {
            target_width = max_width;
            target_height = (target_width / aspect.get()).whole();
        }
        if target_width < Px(1.0) || target_height < Px(1.0) {
            log::warn!("illustration would be {target_width}×{target_height}, leaving it out");
            return None;
        }

        let x = ((width - target_width) / 2.0).whole();
        let floor = layout.content_box.y2;
        let y = if stack.top + target_height > floor {
            floor - target_height
        } else {
            stack.top
        };

        Some(Rect::from_origin_size(x, y, target_width, target_height))
    }
}

/// Scales an illustration to fit `zone` along its limiting dimension, shrinks it by
/// `scale` and centres it in the zone
fn fit_in_zone(zone: &Rect, aspect: AspectRatio, scale: f32) -> Option<Rect> {
    let (zone_width, zone_height) = (zone.width(), zone.height());
    let (width, height) = if zone_width / zone_height < aspect.get() {
        let width = zone_width.fraction(scale);
        (width, (width / aspect.get()).whole())
    } else {
        let height = zone_height.fraction(scale);
        (height.fraction(aspect.get()), height)
    };
    if width < Px(1.0) || height < Px(1.0) {
        log::warn!("illustration would only be {width}×{height}, leaving it out");
        return None;
    }

    let x = zone.x1 + ((zone_width - width) / 2.0).whole();
    let y = zone.y1 + ((zone_height - height) / 2.0).whole();
    Some(Rect::from_origin_size(x, y, width, height))
}

fn span(style: &TextStyle, role: FaceRole, text: &str, coords: (Px, Px)) -> SpanLayout {
    SpanLayout {
        text: text.to_string(),
        font: SpanFont {
            role,
            size: style.size,
        },
        colour: style.colour,
        coords,
    }
}
