//! Turning a block of markdown-style headlines into a set of cards.

use crate::assets::{AssetId, AssetSource};
use crate::font::GlyphRaster;
use crate::layout::{Composer, LayoutMode};
use crate::render::RenderResult;
use crate::CardError;

/// What a card is for, which decides the layout it gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadlineKind {
    /// The article's lead image, from a `#` heading
    Eyecatch,
    /// An image inserted between paragraphs, from a `##` heading
    Insert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub text: String,
    pub kind: HeadlineKind,
}

/// The two layouts an eyecatch card can take. Insert cards are always centred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EyecatchLayout {
    #[default]
    Vertical,
    Horizontal,
}

impl From<EyecatchLayout> for LayoutMode {
    fn from(layout: EyecatchLayout) -> Self {
        match layout {
            EyecatchLayout::Vertical => LayoutMode::Vertical,
            EyecatchLayout::Horizontal => LayoutMode::Horizontal,
        }
    }
}

impl HeadlineKind {
    pub fn layout_mode(self, eyecatch: EyecatchLayout) -> LayoutMode {
        match self {
            HeadlineKind::Eyecatch => eyecatch.into(),
            HeadlineKind::Insert => LayoutMode::Centered,
        }
    }
}

/// Extract headlines from markdown-style text.
///
/// `# text` lines become eyecatch headlines and `## text` lines insert headlines.
/// Deeper headings and headings with no text are skipped. Text without any
/// heading at all is taken as a single eyecatch headline.
pub fn parse_headlines(text: &str) -> Vec<Headline> {
    let mut headlines: Vec<Headline> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("###"))
        .filter_map(|line| {
            let (rest, kind) = if let Some(rest) = line.strip_prefix("##") {
                (rest, HeadlineKind::Insert)
            } else {
                (line.strip_prefix('#')?, HeadlineKind::Eyecatch)
            };
            let text = rest.trim();
            (!text.is_empty()).then(|| Headline {
                text: text.to_string(),
                kind,
            })
        })
        .collect();

    let whole = text.trim();
    if headlines.is_empty() && !whole.is_empty() {
        headlines.push(Headline {
            text: whole.to_string(),
            kind: HeadlineKind::Eyecatch,
        });
    }

    headlines
}

/// The file name of the `index`th (0-based) card out of `count`
pub fn file_name(index: usize, count: usize) -> String {
    if count > 1 {
        format!("generated_image_{:02}.png", index + 1)
    } else {
        "generated_image.png".to_string()
    }
}

/// One card of a batch. Failures are kept per item so one bad asset does not
/// cost the rest of the batch.
#[derive(Debug)]
pub struct BatchItem {
    pub headline: Headline,
    pub file_name: String,
    pub result: Result<RenderResult, CardError>,
}

/// Render one card per headline, in order.
///
/// Backgrounds and illustrations are picked from `source` in rotation, so the
/// same inputs always produce the same cards. Cards without an illustration
/// available, or whose illustration cannot be fetched, are rendered text-only.
pub fn render_batch<S, F>(
    source: &S,
    composer: &Composer<'_, F>,
    headlines: &[Headline],
    eyecatch: EyecatchLayout,
) -> Vec<BatchItem>
where
    S: AssetSource + ?Sized,
    F: GlyphRaster + ?Sized,
{
    let backgrounds = source.backgrounds();
    let illustrations = source.illustrations();
    log::debug!(
        "rendering {} cards from {} backgrounds and {} illustrations",
        headlines.len(),
        backgrounds.len(),
        illustrations.len()
    );

    headlines
        .iter()
        .enumerate()
        .map(|(i, headline)| BatchItem {
            headline: headline.clone(),
            file_name: file_name(i, headlines.len()),
            result: render_one(
                source,
                composer,
                headline,
                eyecatch,
                pick(&backgrounds, i),
                pick(&illustrations, i),
            ),
        })
        .collect()
}

fn pick(ids: &[AssetId], i: usize) -> Option<&AssetId> {
    (!ids.is_empty()).then(|| &ids[i % ids.len()])
}

fn render_one<S, F>(
    source: &S,
    composer: &Composer<'_, F>,
    headline: &Headline,
    eyecatch: EyecatchLayout,
    background: Option<&AssetId>,
    illustration: Option<&AssetId>,
) -> Result<RenderResult, CardError>
where
    S: AssetSource + ?Sized,
    F: GlyphRaster + ?Sized,
{
    let background = source.fetch(background.ok_or(CardError::NoBackground)?)?;
    let illustration = illustration.and_then(|id| match source.fetch(id) {
        Ok(image) => Some(image),
        Err(e) => {
            log::warn!("rendering {:?} without an illustration: {e}", headline.text);
            None
        }
    });

    let mode = headline.kind.layout_mode(eyecatch);
    Ok(composer.render(&background, illustration.as_ref(), mode, headline.text.as_str(), ""))
}
