use std::path::{Path, PathBuf};
use std::sync::Mutex;

use skip_git::{ChangeKind, ChangeSet, ChangedFile, DiffOptions, GitError};

use crate::traits::GitProvider;
use crate::{OperationError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedDiff {
    pub repo_path: PathBuf,
    pub before: String,
    pub after: String,
    pub options: DiffOptions,
}

pub struct MockGitProvider {
    changes: ChangeSet,
    unrelated_histories: bool,
    calls: Mutex<Vec<RecordedDiff>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            changes: ChangeSet::new(),
            unrelated_histories: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_changed_paths(mut self, paths: &[&str]) -> Self {
        self.changes = paths
            .iter()
            .map(|path| ChangedFile::new(*path, ChangeKind::Modified).with_stats(1, 1))
            .collect();
        self
    }

    #[must_use]
    pub fn with_unrelated_histories(mut self) -> Self {
        self.unrelated_histories = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedDiff> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn changed_files(
        &self,
        repo_path: &Path,
        before: &str,
        after: &str,
        options: &DiffOptions,
    ) -> Result<ChangeSet> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(RecordedDiff {
                repo_path: repo_path.to_path_buf(),
                before: before.to_string(),
                after: after.to_string(),
                options: *options,
            });

        if self.unrelated_histories {
            return Err(OperationError::Git(GitError::MergeBaseNotFound {
                before: before.to_string(),
                after: after.to_string(),
                source: None,
            }));
        }

        Ok(self.changes.clone())
    }
}
