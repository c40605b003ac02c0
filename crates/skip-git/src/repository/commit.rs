use tracing::debug;

use crate::{CommitRef, GitError, Result};

use super::Repository;

const FULL_HEX_ID_LEN: usize = 40;

impl Repository {
    /// Resolves a full commit hash. Abbreviated ids and ref names are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::CommitNotFound`] if `id` is not a full object id or
    /// does not name a commit in this repository.
    pub fn resolve_commit(&self, id: &str) -> Result<CommitRef> {
        let commit = self.find_commit(id)?;
        let resolved = CommitRef {
            id: commit.id().to_string(),
        };
        debug!(commit = %resolved, "resolved commit");
        Ok(resolved)
    }

    pub(crate) fn find_commit(&self, id: &str) -> Result<git2::Commit<'_>> {
        let not_found = |source| GitError::CommitNotFound {
            id: id.to_string(),
            source,
        };

        let trimmed = id.trim();
        if trimmed.len() != FULL_HEX_ID_LEN {
            return Err(not_found(git2::Error::from_str(
                "expected a full 40-character commit hash",
            )));
        }

        let oid = git2::Oid::from_str(trimmed).map_err(not_found)?;
        self.inner.find_commit(oid).map_err(not_found)
    }
}
