use std::path::{Path, PathBuf};

use skip_operations::config::PolicyFile;
use skip_operations::operations::SkipInput;
use skip_policy::PolicyError;
use tracing::debug;

use crate::Cli;
use crate::error::{CliError, Result};

/// Loads `KEY=value` lines from `path` into the process environment, replacing
/// variables that are already set. Returns whether the file existed.
pub(crate) fn load_drone_env(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }

    dotenvy::from_path_override(path).map_err(|source| CliError::DroneEnv {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded drone environment file");
    Ok(true)
}

/// Flags, environment and policy file merged into one run configuration.
#[derive(Debug)]
pub(crate) struct Settings {
    repo_path: PathBuf,
    before: String,
    after: String,
    allow_skip: Vec<String>,
    disallow_skip: Vec<String>,
    detect_renames: bool,
}

impl Settings {
    /// Patterns from the policy file are appended to the ones given on the
    /// command line. At least one pattern must remain.
    pub(crate) fn resolve(cli: &Cli) -> Result<Self> {
        let policy_file = match &cli.config {
            Some(path) => Some(PolicyFile::load(path)?),
            None => PolicyFile::discover(&cli.git_path)?,
        };

        let mut allow_skip = non_empty(&cli.allow_skip_changed);
        let mut disallow_skip = non_empty(&cli.disallow_skip_changed);
        let mut detect_renames = cli.detect_renames;

        if let Some(file) = policy_file {
            debug!(path = %file.path().display(), "using policy file");
            detect_renames |= file.detect_renames().unwrap_or(false);
            let (file_allow, file_disallow) = file.into_patterns();
            allow_skip.extend(file_allow);
            disallow_skip.extend(file_disallow);
        }

        if allow_skip.is_empty() && disallow_skip.is_empty() {
            return Err(PolicyError::EmptyPolicy.into());
        }

        Ok(Self {
            repo_path: cli.git_path.clone(),
            before: cli.commit_before.clone(),
            after: cli.commit_after.clone(),
            allow_skip,
            disallow_skip,
            detect_renames,
        })
    }

    pub(crate) fn into_input(self) -> SkipInput {
        SkipInput {
            repo_path: self.repo_path,
            before: self.before,
            after: self.after,
            allow_skip: self.allow_skip,
            disallow_skip: self.disallow_skip,
            detect_renames: self.detect_renames,
        }
    }
}

// A trailing comma in an env value yields an empty entry, which as a regex
// would match every path.
fn non_empty(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .map(|pattern| pattern.trim())
        .filter(|pattern| !pattern.is_empty())
        .map(str::to_string)
        .collect()
}
