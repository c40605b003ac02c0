use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Deleted,
    Modified,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Modified => "modified",
        };
        f.write_str(label)
    }
}

/// A single path touched between the merge base and the head commit.
///
/// `additions` and `deletions` are for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    pub path: String,
    pub kind: ChangeKind,
    pub additions: usize,
    pub deletions: usize,
}

impl ChangedFile {
    #[must_use]
    pub fn new(path: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
            additions: 0,
            deletions: 0,
        }
    }

    #[must_use]
    pub fn with_stats(mut self, additions: usize, deletions: usize) -> Self {
        self.additions = additions;
        self.deletions = deletions;
        self
    }
}

impl fmt::Display for ChangedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | +{} -{}", self.path, self.additions, self.deletions)
    }
}

/// Changed files in diff emission order. Each path appears at most once.
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    files: Vec<ChangedFile>,
    index: HashMap<String, usize>,
}

impl PartialEq for ChangeSet {
    fn eq(&self, other: &Self) -> bool {
        self.files == other.files
    }
}

impl Eq for ChangeSet {}

impl ChangeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A path reported twice (a type change shows up as delete + add) is
    /// folded into one modified entry.
    pub(crate) fn push(&mut self, file: ChangedFile) {
        if let Some(&position) = self.index.get(&file.path) {
            let existing = &mut self.files[position];
            existing.kind = ChangeKind::Modified;
            existing.additions += file.additions;
            existing.deletions += file.deletions;
            return;
        }
        self.index.insert(file.path.clone(), self.files.len());
        self.files.push(file);
    }

    #[must_use]
    pub fn files(&self) -> &[ChangedFile] {
        &self.files
    }

    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.path.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn total_additions(&self) -> usize {
        self.files.iter().map(|file| file.additions).sum()
    }

    #[must_use]
    pub fn total_deletions(&self) -> usize {
        self.files.iter().map(|file| file.deletions).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChangedFile> {
        self.files.iter()
    }
}

impl FromIterator<ChangedFile> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = ChangedFile>>(iter: I) -> Self {
        let mut change_set = Self::new();
        for file in iter {
            change_set.push(file);
        }
        change_set
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a ChangedFile;
    type IntoIter = std::slice::Iter<'a, ChangedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

impl IntoIterator for ChangeSet {
    type Item = ChangedFile;
    type IntoIter = std::vec::IntoIter<ChangedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRef {
    pub id: String,
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Run similarity detection; detected renames are left out of the change set.
    pub detect_renames: bool,
}
