//! Turns pasted structure text into a [`Tree`].
//!
//! Two heuristics cover the same input and they are not equivalent: [`IndentParser`] reads
//! nesting from leading glyphs and spaces, [`PathParser`] reads it from slashes. Each keeps
//! its own rules for names that show up twice.
mod indent;
mod line;
mod path;

pub use indent::IndentParser;
pub use path::PathParser;

use crate::tree::Tree;
use miette::Diagnostic;
use serde::Deserialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Builds a [`Tree`] out of structure text in one pass.
///
/// Parsing never fails: unrecognisable lines are skipped, so the worst outcome is an
/// empty tree.
pub trait Parser {
    fn parse(&self, text: &str) -> Tree;
}

#[derive(Debug, Error, Diagnostic)]
#[error("unknown input format: {value}")]
#[diagnostic(code(sprout::parser::unknown_format), help("Valid formats are: ['tree', 'paths']"))]
pub struct UnknownFormat {
    pub value: String,
}

/// The input styles an operator can pick from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Drawn with `├`, `│` and `└`, read by [`IndentParser`].
    #[default]
    Tree,
    /// One slash-delimited path per line, read by [`PathParser`].
    Paths,
}
impl Format {
    pub const ALL: [Format; 2] = [Format::Tree, Format::Paths];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Tree => "tree",
            Self::Paths => "paths",
        }
    }

    pub fn parser(&self) -> &'static dyn Parser {
        match self {
            Self::Tree => &IndentParser,
            Self::Paths => &PathParser,
        }
    }
}
impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tree => write!(f, "Tree format (with ├, │, └ characters)"),
            Self::Paths => write!(f, "Simple paths (one path per line)"),
        }
    }
}
impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownFormat {
                value: value.to_string(),
            })
    }
}

/// A tree drawing split into the name of its drawn root and everything below it.
#[derive(Debug, PartialEq, Eq)]
pub struct RootLabel {
    pub name: String,
    pub body: String,
}

/// Detaches the leading `project/` line of drawings such as:
///
/// ```text
/// project/
/// ├── src/
/// └── README.md
/// ```
///
/// The first non-blank line counts as a label only when it starts at column zero, holds
/// no glyph, is a single name ending with `/`, and the next non-blank line opens with a
/// glyph. Returns `None` when the text does not have that shape.
pub fn split_root_label(text: &str) -> Option<RootLabel> {
    let lines: Vec<&str> = text.lines().collect();
    let mut non_blank = lines
        .iter()
        .enumerate()
        .filter(|(_, content)| !content.trim().is_empty());

    let (label_index, first) = non_blank.next()?;
    let (_, second) = non_blank.next()?;

    let first = first.trim_end();
    let name = first.strip_suffix('/')?.trim_end_matches('/');

    let is_label = first == first.trim_start()
        && !first.chars().any(line::is_glyph)
        && !name.is_empty()
        && !name.contains('/')
        && second.trim_start().starts_with(line::is_glyph);

    if !is_label {
        return None;
    }

    let body = lines
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != label_index)
        .map(|(_, content)| *content)
        .collect::<Vec<_>>()
        .join("\n");

    Some(RootLabel {
        name: name.to_string(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("tree".parse::<Format>().unwrap(), Format::Tree);
        assert_eq!(" Paths ".parse::<Format>().unwrap(), Format::Paths);
        assert!("yaml".parse::<Format>().is_err());
    }

    #[test]
    fn test_split_root_label() {
        let text = "project/\n├── src/\n│   └── main.py\n└── README.md";
        let label = split_root_label(text).unwrap();

        assert_eq!(label.name, "project");
        assert_eq!(label.body, "├── src/\n│   └── main.py\n└── README.md");
    }

    #[test]
    fn test_split_root_label_skips_leading_blank_lines() {
        let label = split_root_label("\n\napp/\n└── Cargo.toml").unwrap();

        assert_eq!(label.name, "app");
        assert_eq!(label.body, "\n\n└── Cargo.toml");
    }

    #[test]
    fn test_split_root_label_requires_drawn_children() {
        assert_eq!(split_root_label("project/\nsrc/\nREADME.md"), None);
        assert_eq!(split_root_label("project/src/main.py\n├── x"), None);
        assert_eq!(split_root_label("README.md\n└── x"), None);
        assert_eq!(split_root_label("  project/\n└── x"), None);
        assert_eq!(split_root_label("project/"), None);
    }
}
