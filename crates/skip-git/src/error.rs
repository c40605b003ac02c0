use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("not a git repository: '{path}'")]
    NotARepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("commit '{id}' not found")]
    CommitNotFound {
        id: String,
        #[source]
        source: git2::Error,
    },

    #[error("could not find a common merge base of '{before}' and '{after}'")]
    MergeBaseNotFound {
        before: String,
        after: String,
        #[source]
        source: Option<git2::Error>,
    },

    #[error("could not compute diff from '{base}' to '{head}'")]
    Diff {
        base: String,
        head: String,
        #[source]
        source: git2::Error,
    },

    #[error("diff delta has no file path")]
    MissingDeltaPath,
}
