mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::{Repository, count_lines};
pub use types::{ChangeKind, ChangeSet, ChangedFile, CommitRef, DiffOptions};

use std::path::Path;

pub type Result<T> = std::result::Result<T, GitError>;

/// Opens the repository at `path` and lists the files `after` changed since
/// its merge base with `before`.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened, either commit cannot be
/// resolved, the histories share no merge base, or the diff fails.
pub fn changed_files(
    path: &Path,
    before: &str,
    after: &str,
    options: &DiffOptions,
) -> Result<ChangeSet> {
    Repository::open(path)?.changed_files(before, after, options)
}
