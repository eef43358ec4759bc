use super::{line, Parser};
use crate::tree::Tree;

/// Reads nesting from the glyphs and spaces in front of each line, as printed by `tree`.
///
/// Every directory line opens a new level for the lines that follow it. A line goes back
/// up by closing levels until as many directories remain open as its leading column count
/// allows, so depth is a raw column count rather than an exact level.
///
/// A directory is a line ending with `/`, or a single name without any `.`. A directory
/// line always starts an empty directory, even when the name was seen before, losing the
/// children recorded under it so far. Files replace whatever used their name.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentParser;

/// Names of the currently open directories, outermost first. The root is the empty name
/// and is never closed.
struct OpenDirectories {
    names: Vec<String>,
}
impl OpenDirectories {
    fn new() -> Self {
        Self {
            names: vec![String::new()],
        }
    }

    fn close_deeper_than(&mut self, depth: usize) {
        while self.names.len() > depth + 1 {
            self.names.pop();
        }
    }

    fn open(&mut self, name: String) {
        self.names.push(name);
    }

    /// Path from the root to the innermost open directory.
    fn path(&self) -> &[String] {
        &self.names[1..]
    }
}

fn is_directory_line(clean: &str) -> bool {
    clean.ends_with('/') || (!clean.contains('/') && !line::looks_like_file(clean))
}

impl Parser for IndentParser {
    fn parse(&self, text: &str) -> Tree {
        let mut root = Tree::new();
        let mut open = OpenDirectories::new();

        for raw in text.trim().lines() {
            if raw.trim().is_empty() {
                continue;
            }

            let stripped = line::strip_glyph_runs(raw);
            let clean = stripped.trim();
            if clean.is_empty() {
                continue;
            }

            let depth = line::glyph_depth(raw);
            open.close_deeper_than(depth);

            let Some(current) = root.directory_at_mut(open.path()) else {
                log::warn!("no open directory for line, skipping: {}", clean);
                continue;
            };

            if is_directory_line(clean) {
                let name = clean.trim_end_matches('/');
                if name.is_empty() {
                    log::debug!("skipping directory line without a name: {}", raw);
                    continue;
                }

                log::trace!("directory at depth {}: {}", depth, name);

                current.insert_directory(name);
                open.open(name.to_string());
            } else {
                log::trace!("file at depth {}: {}", depth, clean);

                current.insert_file(clean);
            }
        }

        root
    }
}
