use tracing::debug;

use crate::{CommitRef, GitError, Result};

use super::Repository;

impl Repository {
    /// Nearest common ancestor of `before` and `after`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::CommitNotFound`] if either commit cannot be resolved and
    /// [`GitError::MergeBaseNotFound`] if the histories share no ancestor.
    pub fn merge_base(&self, before: &str, after: &str) -> Result<CommitRef> {
        let before_commit = self.find_commit(before)?;
        let after_commit = self.find_commit(after)?;

        let base = self.merge_base_of(&before_commit, &after_commit)?;
        Ok(CommitRef {
            id: base.id().to_string(),
        })
    }

    pub(crate) fn merge_base_of(
        &self,
        before: &git2::Commit<'_>,
        after: &git2::Commit<'_>,
    ) -> Result<git2::Commit<'_>> {
        let not_found = |source| GitError::MergeBaseNotFound {
            before: before.id().to_string(),
            after: after.id().to_string(),
            source,
        };

        let base_id = match self.inner.merge_base(before.id(), after.id()) {
            Ok(oid) => oid,
            Err(err) if err.code() == git2::ErrorCode::NotFound => return Err(not_found(None)),
            Err(err) => return Err(not_found(Some(err))),
        };

        debug!(base = %base_id, "found merge base");
        self.inner
            .find_commit(base_id)
            .map_err(|err| not_found(Some(err)))
    }
}
