use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] skip_git::GitError),

    #[error(transparent)]
    Policy(#[from] skip_policy::PolicyError),

    #[error("failed to read policy file '{path}'")]
    PolicyFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse policy file '{path}'")]
    PolicyFileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "policy file '{path}' mixes allow/disallow-skip-changed with skip/run-changed; use one vocabulary"
    )]
    MixedDialects { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, OperationError>;
