use crate::errors::{FileOperation, IoError};
use miette::Diagnostic;
use std::{
    fs,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InputError {
    #[error("I/O error within input domain")]
    #[diagnostic(code(sprout::input::io))]
    Io(#[from] IoError),
}

/// Where the structure text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}
impl InputSource {
    fn path(&self) -> PathBuf {
        match self {
            Self::Stdin => PathBuf::from("<stdin>"),
            Self::File(path) => path.clone(),
        }
    }

    /// Reads one structure block, see [`read_block`].
    pub fn read(&self) -> Result<String, InputError> {
        let block = match self {
            Self::Stdin => read_block(io::stdin().lock()),
            Self::File(path) => {
                let file = fs::File::open(path)
                    .map_err(|error| IoError::new(FileOperation::Read, path.clone(), error))?;

                read_block(BufReader::new(file))
            }
        };

        let block =
            block.map_err(|error| IoError::new(FileOperation::Read, self.path(), error))?;

        log::debug!("read {} lines from {}", block.lines().count(), self.path().display());

        Ok(block)
    }
}

/// Collects lines until two consecutive blank lines or the end of the stream.
///
/// The blank line that ends the block is not part of it. A single blank line inside the
/// block is kept, so pasted trees may contain one empty line between groups.
pub fn read_block<R: BufRead>(reader: R) -> io::Result<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let is_blank = line.trim().is_empty();

        if is_blank && lines.last().is_some_and(|last| last.trim().is_empty()) {
            break;
        }

        lines.push(line);
    }

    if lines.last().is_some_and(|last| last.trim().is_empty()) {
        lines.pop();
    }

    Ok(lines.join("\n"))
}
