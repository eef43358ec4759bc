//! Line level helpers shared by both parsers.
use std::borrow::Cow;

/// Box-drawing characters that render hierarchy in pasted trees.
pub(crate) const TREE_GLYPHS: [char; 4] = ['│', '├', '└', '─'];

const VERTICAL: char = '│';

pub(crate) fn is_glyph(c: char) -> bool {
    TREE_GLYPHS.contains(&c)
}

/// A line with its glyphs blanked out and surrounding whitespace removed.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CleanLine {
    /// Leading columns halved, only an approximation of the nesting depth.
    pub indent_level: usize,
    pub text: String,
}

/// Replaces every glyph with a single space so columns stay aligned, then trims.
///
/// Returns `None` for lines that hold nothing but whitespace and glyphs.
pub(crate) fn blank_glyphs(line: &str) -> Option<CleanLine> {
    let spaced: String = line
        .trim_end()
        .chars()
        .map(|c| if is_glyph(c) { ' ' } else { c })
        .collect();

    let leading = spaced.chars().take_while(|c| c.is_whitespace()).count();
    let text = spaced.trim();

    if text.is_empty() {
        return None;
    }

    Some(CleanLine {
        indent_level: leading / 2,
        text: text.to_string(),
    })
}

/// Removes every glyph along with the whitespace that directly follows it.
pub(crate) fn strip_glyph_runs(line: &str) -> Cow<'_, str> {
    lazy_static::lazy_static! {
        static ref GLYPH_RUN: regex::Regex =
            regex::Regex::new(r"[│├└─]\s*").expect("a valid regex pattern");
    }

    GLYPH_RUN.replace_all(line, "")
}

/// Counts leading spaces and vertical bars, stopping at a branch glyph or any other character.
///
/// This is a count of raw columns, not of levels: `│   ├── x` yields 4.
pub(crate) fn glyph_depth(line: &str) -> usize {
    line.chars()
        .take_while(|&c| c == ' ' || c == VERTICAL)
        .count()
}

/// Text after the last `/`, or the whole line when it has none.
pub(crate) fn last_segment(line: &str) -> &str {
    line.rsplit_once('/').map_or(line, |(_, last)| last)
}

/// Names holding a dot look like `name.ext` and are taken as files.
pub(crate) fn looks_like_file(segment: &str) -> bool {
    segment.contains('.')
}
