use super::{line, Parser};
use crate::tree::Tree;

/// Reads every line as a slash-delimited path such as `src/utils/helpers.py`.
///
/// Glyphs and indentation in front of a path are ignored: placement comes only from the
/// slashes. A line whose last segment holds a `.` declares a file, anything else declares a
/// directory, so extensionless files like `Makefile` come out as directories.
///
/// Names seen twice follow an asymmetric rule:
/// - a file always replaces the previous entry, directory or not;
/// - a directory is only recorded when nothing uses the name yet;
/// - intermediate segments reuse an existing directory and its children.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParser;

impl Parser for PathParser {
    fn parse(&self, text: &str) -> Tree {
        let mut root = Tree::new();

        for raw in text.trim().lines() {
            let Some(clean) = line::blank_glyphs(raw) else {
                continue;
            };

            log::trace!("path line at level {}: {}", clean.indent_level, clean.text);

            let is_file = line::looks_like_file(line::last_segment(&clean.text));

            // leading, doubled and trailing slashes leave empty segments behind
            let mut segments: Vec<&str> = clean
                .text
                .split('/')
                .filter(|segment| !segment.is_empty())
                .collect();

            let Some(name) = segments.pop() else {
                log::debug!("skipping line without any name: {}", clean.text);
                continue;
            };

            let mut current = &mut root;
            for segment in segments {
                current = current.ensure_directory(segment);
            }

            if is_file {
                current.insert_file(name);
            } else {
                current.insert_directory_if_absent(name);
            }
        }

        root
    }
}
