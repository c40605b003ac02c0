use std::path::Path;

use skip_git::{ChangeSet, DiffOptions};

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened, either commit cannot
    /// be resolved, no merge base exists, or the diff fails.
    fn changed_files(
        &self,
        repo_path: &Path,
        before: &str,
        after: &str,
        options: &DiffOptions,
    ) -> Result<ChangeSet>;
}
