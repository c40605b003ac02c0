use std::path::{Path, PathBuf};

use serde::Deserialize;
use skip_policy::PolicyDialect;
use tracing::debug;

use crate::{OperationError, Result};

pub const DEFAULT_POLICY_FILE: &str = ".skip-pipeline.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyFileContents {
    #[serde(default)]
    policy: PolicySection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PolicySection {
    allow_skip_changed: Option<Vec<String>>,
    disallow_skip_changed: Option<Vec<String>>,
    skip_changed: Option<Vec<String>>,
    run_changed: Option<Vec<String>>,
    detect_renames: Option<bool>,
}

/// Skip rules read from a TOML file.
///
/// ```toml
/// [policy]
/// allow-skip-changed = ["^docs/"]
/// disallow-skip-changed = ['\.go$']
/// ```
///
/// `skip-changed` / `run-changed` are accepted as the alternative vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyFile {
    path: PathBuf,
    dialect: PolicyDialect,
    detect_renames: Option<bool>,
}

impl PolicyFile {
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or mixes both
    /// vocabularies.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| OperationError::PolicyFileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&content, path)
    }

    /// Loads [`DEFAULT_POLICY_FILE`] from `repo_root` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn discover(repo_root: &Path) -> Result<Option<Self>> {
        let path = repo_root.join(DEFAULT_POLICY_FILE);
        if !path.is_file() {
            debug!(path = %path.display(), "no policy file");
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }

    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML for a policy file or mixes
    /// both vocabularies.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let contents: PolicyFileContents =
            toml::from_str(content).map_err(|source| OperationError::PolicyFileParse {
                path: path.to_path_buf(),
                source,
            })?;
        let section = contents.policy;

        let allow_disallow =
            section.allow_skip_changed.is_some() || section.disallow_skip_changed.is_some();
        let skip_run = section.skip_changed.is_some() || section.run_changed.is_some();

        let dialect = match (allow_disallow, skip_run) {
            (true, true) => {
                return Err(OperationError::MixedDialects {
                    path: path.to_path_buf(),
                });
            }
            (false, true) => PolicyDialect::SkipRun {
                skip: section.skip_changed.unwrap_or_default(),
                run: section.run_changed.unwrap_or_default(),
            },
            _ => PolicyDialect::AllowDisallow {
                allow_skip: section.allow_skip_changed.unwrap_or_default(),
                disallow_skip: section.disallow_skip_changed.unwrap_or_default(),
            },
        };

        debug!(path = %path.display(), ?dialect, "loaded policy file");
        Ok(Self {
            path: path.to_path_buf(),
            dialect,
            detect_renames: section.detect_renames,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn dialect(&self) -> &PolicyDialect {
        &self.dialect
    }

    #[must_use]
    pub fn detect_renames(&self) -> Option<bool> {
        self.detect_renames
    }

    /// Patterns as `(allow_skip, disallow_skip)`.
    #[must_use]
    pub fn into_patterns(self) -> (Vec<String>, Vec<String>) {
        self.dialect.into_allow_disallow()
    }
}
