use crate::font::{FontMetrics, FontRef};
use crate::units::Px;
use std::collections::HashSet;

/// Closing punctuation and brackets that must never start a line
const JAPANESE_FORBIDDEN_LEADING: &[char] = &[
    '、', '。', '！', '？', '）', '］', '｝', '」', '』', '〉', '》', '〕', '〗', '〙', '〛', ',', '.',
    '!', '?', ')', ']', '}', '"', '\'', ':', ';',
];

/// Particles and spaces after which a line reads naturally when broken
const JAPANESE_SEPARATORS: &[&str] = &[
    "の", "を", "に", "で", "と", "が", "は", "も", "へ", "から", "まで", " ", "\u{3000}",
];

/// How far back from the end of a full line to look for a natural break
pub const DEFAULT_SEARCH_WINDOW: usize = 8;

/// Locale-specific line breaking tables used by [`wrap_text`].
///
/// * `forbidden_leading` characters never start a line: when one of them is the
///   character that overflows a line, it hangs off the end of that line instead.
/// * `separators` are tokens (usually a single character, but multi-character
///   particles work too) after which a line may be broken in preference to
///   splitting at the exact overflow point.
/// * `search_window` bounds how many trailing characters of a full line are
///   searched for a separator.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakRules {
    forbidden_leading: HashSet<char>,
    separators: Vec<Vec<char>>,
    search_window: usize,
}

impl BreakRules {
    pub fn new<L, S, T>(forbidden_leading: L, separators: S, search_window: usize) -> BreakRules
    where
        L: IntoIterator<Item = char>,
        S: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        BreakRules {
            forbidden_leading: forbidden_leading.into_iter().collect(),
            separators: separators
                .into_iter()
                .map(|s| s.as_ref().chars().collect::<Vec<char>>())
                .filter(|s| !s.is_empty())
                .collect(),
            search_window,
        }
    }

    /// Kinsoku rules for Japanese titles, which also cover ASCII punctuation and
    /// plain spaces so mixed and Latin titles wrap sensibly
    pub fn japanese() -> BreakRules {
        BreakRules::new(
            JAPANESE_FORBIDDEN_LEADING.iter().copied(),
            JAPANESE_SEPARATORS.iter(),
            DEFAULT_SEARCH_WINDOW,
        )
    }

    /// Replace the number of trailing characters searched for a natural break
    pub fn with_search_window(mut self, search_window: usize) -> BreakRules {
        self.search_window = search_window;
        self
    }

    pub fn search_window(&self) -> usize {
        self.search_window
    }

    pub fn is_forbidden_leading(&self, ch: char) -> bool {
        self.forbidden_leading.contains(&ch)
    }

    /// Whether `line[..=end]` finishes with one of the separator tokens
    fn separator_ends_at(&self, line: &[char], end: usize) -> bool {
        self.separators.iter().any(|sep| {
            sep.len() <= end + 1 && line[end + 1 - sep.len()..=end] == sep[..]
        })
    }

    /// Finds where to break a line that cannot take another character: the index just
    /// after the last separator within the search window, unless the character that
    /// would then start the next line is forbidden there. The first character of the
    /// line is never considered, so a break always leaves something behind.
    ///
    /// A result equal to `line.len()` means the line already ends on a separator.
    fn preferred_break(&self, line: &[char]) -> Option<usize> {
        let len = line.len();
        let floor = len.saturating_sub(self.search_window);
        (floor + 1..len)
            .rev()
            .find(|&j| {
                self.separator_ends_at(line, j)
                    && line
                        .get(j + 1)
                        .map_or(true, |&next| !self.is_forbidden_leading(next))
            })
            .map(|j| j + 1)
    }
}

impl Default for BreakRules {
    fn default() -> Self {
        BreakRules::japanese()
    }
}

/// Wraps `text` into display lines no wider than `max_width` when set in `font`.
///
/// # Wrapping Behavior
///
/// Text that already fits is returned as a single line. Otherwise characters are
/// accumulated left to right while the line still fits. When the next character
/// would overflow:
///
/// 1. **Forbidden leading characters** - if it (and any run of such characters
///    directly after it) may not start a line, the run is appended to the current
///    line, which is then allowed to exceed `max_width`
/// 2. **Natural breaks** - otherwise the line is broken just after the most recent
///    separator found in its trailing [`BreakRules::search_window`] characters,
///    carrying the rest over to the next line
/// 3. **Exact breaks** - with no usable separator the line breaks right where the
///    width ran out
///
/// A single character that is wider than `max_width` on its own becomes a line by
/// itself (forced overflow).
///
/// Lines are returned in reading order and concatenate back to exactly `text`.
/// Empty input produces no lines.
pub fn wrap_text<F: FontMetrics + ?Sized>(
    text: &str,
    font: FontRef<'_, F>,
    max_width: Px,
    rules: &BreakRules,
) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if font.width_of(text) <= max_width {
        return vec![text.to_string()];
    }

    let fits = |line: &[char]| font.width_of(&line.iter().collect::<String>()) <= max_width;

    let chars: Vec<char> = text.chars().collect();
    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<char> = Vec::new();

    let mut i = 0usize;
    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);
        if fits(&current) {
            i += 1;
            continue;
        }
        current.pop();

        if current.is_empty() {
            // not even a lone character fits, emit it anyway along with any
            // forbidden characters that follow it
            current.push(ch);
            i += 1;
            hang_forbidden_run(&mut current, &chars, &mut i, rules);
            lines.push(current.drain(..).collect());
            continue;
        }

        if rules.is_forbidden_leading(ch) {
            hang_forbidden_run(&mut current, &chars, &mut i, rules);
            lines.push(current.drain(..).collect());
            continue;
        }

        match rules.preferred_break(&current) {
            Some(at) if at < current.len() => {
                // carry the tail over and retry the overflowing character against it
                let tail = current.split_off(at);
                lines.push(std::mem::replace(&mut current, tail).into_iter().collect());
            }
            _ => lines.push(current.drain(..).collect()),
        }
    }

    if !current.is_empty() {
        lines.push(current.into_iter().collect());
    }

    lines
}

/// Moves the run of forbidden leading characters starting at `chars[*i]` onto the
/// end of `line`
fn hang_forbidden_run(line: &mut Vec<char>, chars: &[char], i: &mut usize, rules: &BreakRules) {
    while *i < chars.len() && rules.is_forbidden_leading(chars[*i]) {
        line.push(chars[*i]);
        *i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BlockFont;

    /// 10px per character
    fn font(face: &BlockFont) -> FontRef<'_, BlockFont> {
        FontRef::new(face, Px(20.0))
    }

    #[test]
    fn empty_text_has_no_lines() {
        let face = BlockFont::default();
        assert!(wrap_text("", font(&face), Px(100.0), &BreakRules::default()).is_empty());
    }

    #[test]
    fn fitting_text_is_one_line() {
        let face = BlockFont::default();
        let lines = wrap_text("hello there", font(&face), Px(110.0), &BreakRules::default());
        assert_eq!(lines, vec!["hello there"]);
    }

    #[test]
    fn breaks_after_the_last_space() {
        let face = BlockFont::default();
        let lines = wrap_text("abc defg hij", font(&face), Px(100.0), &BreakRules::default());
        assert_eq!(lines, vec!["abc defg ", "hij"]);
    }

    #[test]
    fn breaks_exactly_without_separators() {
        let face = BlockFont::default();
        let lines = wrap_text("abcdefghijklmnopqrstuvwxy", font(&face), Px(100.0), &BreakRules::default());
        assert_eq!(lines, vec!["abcdefghij", "klmnopqrst", "uvwxy"]);
    }

    #[test]
    fn separators_outside_the_window_are_ignored() {
        let face = BlockFont::default();
        // the only space sits near the start of the full line, outside the last 8
        let lines = wrap_text("a bcdefghijkl", font(&face), Px(100.0), &BreakRules::default());
        assert_eq!(lines, vec!["a bcdefghi", "jkl"]);

        // widening the window finds it
        let rules = BreakRules::default().with_search_window(10);
        let lines = wrap_text("a bcdefghijkl", font(&face), Px(100.0), &rules);
        assert_eq!(lines, vec!["a ", "bcdefghijk", "l"]);
    }

    #[test]
    fn japanese_particles_are_preferred_breaks() {
        let face = BlockFont::default();
        let lines = wrap_text("引出物の相場の基本的な考え方", font(&face), Px(100.0), &BreakRules::japanese());
        assert_eq!(lines, vec!["引出物の相場の", "基本的な考え方"]);
    }

    #[test]
    fn multi_character_separators_match() {
        let face = BlockFont::default();
        let rules = BreakRules::new(['、'], ["から"], 8);
        let lines = wrap_text("東京から大阪名古屋福岡", font(&face), Px(80.0), &rules);
        assert_eq!(lines, vec!["東京から", "大阪名古屋福岡"]);
    }

    #[test]
    fn closing_punctuation_hangs_off_the_line() {
        let face = BlockFont::default();
        let lines = wrap_text("あいうえおかきくけこ。」さしす", font(&face), Px(100.0), &BreakRules::japanese());
        assert_eq!(lines, vec!["あいうえおかきくけこ。」", "さしす"]);
        assert!(font(&face).width_of(&lines[0]) > Px(100.0));
    }

    #[test]
    fn never_breaks_before_forbidden_characters() {
        let face = BlockFont::default();
        // the natural break after "の" would start the next line with "、"
        let lines = wrap_text("あいうえおかきの、くけこさし", font(&face), Px(100.0), &BreakRules::japanese());
        for line in lines.iter().skip(1) {
            let first = line.chars().next().expect("lines are never empty");
            assert!(!BreakRules::japanese().is_forbidden_leading(first), "{lines:?}");
        }
        assert_eq!(lines.concat(), "あいうえおかきの、くけこさし");
    }

    #[test]
    fn oversized_characters_are_forced_onto_their_own_lines() {
        let face = BlockFont::default();
        let lines = wrap_text("abc", font(&face), Px(5.0), &BreakRules::default());
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    /// 'W' is 30px wide, everything else 10px
    struct Proportional;

    impl FontMetrics for Proportional {
        fn text_width(&self, text: &str, _size: Px) -> Px {
            text.chars().map(|c| if c == 'W' { Px(30.0) } else { Px(10.0) }).sum()
        }

        fn ascent(&self, size: Px) -> Px {
            size
        }
    }

    #[test]
    fn punctuation_stays_with_an_oversized_character() {
        let font = FontRef::new(&Proportional, Px(20.0));
        let lines = wrap_text("W.ab", font, Px(25.0), &BreakRules::japanese());
        assert_eq!(lines, vec!["W.", "ab"]);

        let lines = wrap_text("aW。」b", font, Px(25.0), &BreakRules::japanese());
        assert_eq!(lines, vec!["a", "W。」", "b"]);
    }

    #[test]
    fn long_text_keeps_every_character() {
        let face = BlockFont::default();
        let rules = BreakRules::default();
        let text = lipsum::lipsum(120);
        let lines = wrap_text(&text, font(&face), Px(300.0), &rules);

        assert_eq!(lines.concat(), text);
        for line in &lines[..lines.len() - 1] {
            let fits = font(&face).width_of(line) <= Px(300.0);
            let ends_forbidden = line
                .chars()
                .last()
                .is_some_and(|c| rules.is_forbidden_leading(c));
            assert!(fits || ends_forbidden || line.chars().count() == 1, "{line:?}");
        }
    }
}
