use crate::{
    errors::{FileOperation, IoError},
    tree::{EntryCounts, Node, Tree},
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fs,
    path::{Component, Path, PathBuf},
};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error, Diagnostic)]
pub enum MaterializeError {
    #[error("I/O error within materialize domain")]
    #[diagnostic(code(sprout::materialize::io))]
    Io(#[from] IoError),
}

/// The two filesystem operations a [`Tree`] is materialized with.
pub trait FileSystem {
    /// Creates `path` and any missing parents. An existing directory is not an error.
    fn ensure_directory(&mut self, path: &Path) -> Result<(), IoError>;

    /// Writes `contents` as the whole file at `path`, truncating any previous contents.
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), IoError>;
}

/// [`FileSystem`] backed by [`std::fs`].
#[derive(Debug, Default)]
pub struct DiskFileSystem;

impl FileSystem for DiskFileSystem {
    fn ensure_directory(&mut self, path: &Path) -> Result<(), IoError> {
        fs::create_dir_all(path)
            .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), IoError> {
        fs::write(path, contents)
            .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))
    }
}

/// Creates `base` and then every entry of `tree` below it, depth first, printing a line
/// for each created entry.
///
/// Nothing is rolled back on failure: entries created before the failing one stay on disk.
///
/// # Errors
///
/// Returns a [`MaterializeError`] as soon as a directory cannot be created or a file
/// cannot be written.
pub fn materialize<F: FileSystem>(
    filesystem: &mut F,
    base: &Path,
    tree: Tree,
) -> Result<(), MaterializeError> {
    filesystem.ensure_directory(base)?;

    log::debug!("materializing into: {}", base.display());

    create_entries(filesystem, base, tree)
}

fn create_entries<F: FileSystem>(
    filesystem: &mut F,
    base: &Path,
    tree: Tree,
) -> Result<(), MaterializeError> {
    for (name, node) in tree {
        let Some(path) = confined_join(base, &name) else {
            log::warn!("skipping entry outside {}: {}", base.display(), name);
            continue;
        };

        match node {
            Node::Directory(children) => {
                filesystem.ensure_directory(&path)?;

                println!("{} {}", "mkdir".blue(), path.display());

                create_entries(filesystem, &path, children)?;
            }
            Node::File(contents) => {
                // names may hold slashes, e.g. `lib/core.rs` from a tree drawing
                if let Some(parent) = path.parent() {
                    filesystem.ensure_directory(parent)?;
                }

                filesystem.write_file(&path, &contents)?;

                println!("{} {}", "create".green(), path.display());
            }
        }
    }

    Ok(())
}

/// Joins `name` onto `base`, or returns `None` when `name` is absolute or climbs with
/// `..`. Empty and `.` components are dropped.
fn confined_join(base: &Path, name: &str) -> Option<PathBuf> {
    let mut path = base.to_path_buf();

    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    (path != base).then_some(path)
}

/// Removes whatever exists at `target`, a directory with all its contents or a single file.
pub fn remove_existing(target: &Path) -> Result<(), MaterializeError> {
    let result = if target.is_dir() {
        fs::remove_dir_all(target)
    } else {
        fs::remove_file(target)
    };

    result.map_err(|error| IoError::new(FileOperation::Remove, target.into(), error))?;

    log::debug!("removed existing: {}", target.display());

    Ok(())
}

/// Walks what is actually on disk below `root`; the root itself is not counted.
pub fn count_entries(root: &Path) -> Result<EntryCounts, MaterializeError> {
    let mut counts = EntryCounts::default();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(error) => {
                let path = error.path().unwrap_or(root).to_path_buf();

                Err(IoError::new(FileOperation::Walk, path, error.into()))?
            }
        };

        if entry.file_type().is_dir() {
            counts.directories += 1;
        } else {
            counts.files += 1;
        }
    }

    Ok(counts)
}
