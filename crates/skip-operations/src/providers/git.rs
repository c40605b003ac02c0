use std::path::Path;

use skip_git::{ChangeSet, DiffOptions, Repository};

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn changed_files(
        &self,
        repo_path: &Path,
        before: &str,
        after: &str,
        options: &DiffOptions,
    ) -> Result<ChangeSet> {
        let repo = Repository::open(repo_path)?;
        Ok(repo.changed_files(before, after, options)?)
    }
}
