use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("validation failed")]
    Validation(#[from] skip_policy::PolicyError),

    #[error("execution failed")]
    Operation(#[from] skip_operations::OperationError),

    #[error("failed to load environment file '{path}'")]
    DroneEnv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;
