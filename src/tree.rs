use indexmap::IndexMap;

/// Contents written for every file declared in a structure drawing.
pub const EMPTY_FILE: &str = "";

/// A single entry of a [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A file together with the full contents it is written with.
    File(String),
    /// A directory, possibly without children.
    Directory(Tree),
}
impl Node {
    pub fn empty_file() -> Self {
        Self::File(EMPTY_FILE.to_string())
    }

    pub fn empty_directory() -> Self {
        Self::Directory(Tree::new())
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    pub fn as_directory(&self) -> Option<&Tree> {
        match self {
            Self::Directory(tree) => Some(tree),
            Self::File(_) => None,
        }
    }
}

/// Number of directories and files below some root, the root itself excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryCounts {
    pub directories: usize,
    pub files: usize,
}

/// In-memory model of a directory structure, staged before anything is written to disk.
///
/// Sibling names are unique. Inserting a name that already exists replaces the previous
/// entry in place (last write wins), whether it was a file or a directory. The only
/// exception is [`Tree::insert_directory_if_absent`], which leaves an existing entry alone.
///
/// Entries keep the order they were first inserted in. That order is only used for
/// display: two trees holding the same entries compare equal whatever their order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: IndexMap<String, Node>,
}
impl Tree {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.entries.iter()
    }

    /// Records `name` as an empty file, replacing whatever was stored under it.
    pub fn insert_file(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into(), Node::empty_file());
    }

    /// Records `name` as a new empty directory, dropping any previous entry and its children.
    pub fn insert_directory(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into(), Node::empty_directory());
    }

    /// Records `name` as an empty directory unless something already uses that name.
    pub fn insert_directory_if_absent(&mut self, name: impl Into<String>) {
        self.entries
            .entry(name.into())
            .or_insert_with(Node::empty_directory);
    }

    /// Returns the directory stored under `name`, creating it when absent.
    ///
    /// An existing directory keeps its children. A file stored under `name` is replaced
    /// by an empty directory.
    pub fn ensure_directory(&mut self, name: impl Into<String>) -> &mut Tree {
        let node = self
            .entries
            .entry(name.into())
            .or_insert_with(Node::empty_directory);

        if node.is_file() {
            *node = Node::empty_directory();
        }

        match node {
            Node::Directory(tree) => tree,
            Node::File(_) => unreachable!("file entries are replaced above"),
        }
    }

    /// Follows `path` one name at a time from this tree, returning `None` as soon as a
    /// name is missing or refers to a file.
    pub fn directory_at_mut(&mut self, path: &[String]) -> Option<&mut Tree> {
        match path.split_first() {
            None => Some(self),
            Some((name, rest)) => match self.entries.get_mut(name) {
                Some(Node::Directory(tree)) => tree.directory_at_mut(rest),
                _ => None,
            },
        }
    }

    /// Counts every directory and file below this tree.
    pub fn counts(&self) -> EntryCounts {
        self.entries
            .values()
            .fold(EntryCounts::default(), |mut acc, node| {
                match node {
                    Node::File(_) => acc.files += 1,
                    Node::Directory(tree) => {
                        let nested = tree.counts();
                        acc.directories += 1 + nested.directories;
                        acc.files += nested.files;
                    }
                }
                acc
            })
    }
}
impl IntoIterator for Tree {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
