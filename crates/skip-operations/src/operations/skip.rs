use std::path::PathBuf;

use skip_git::{ChangeSet, DiffOptions};
use skip_policy::{SkipPolicy, Verdict};
use tracing::{debug, info};

use crate::Result;
use crate::traits::GitProvider;

pub struct SkipInput {
    pub repo_path: PathBuf,
    pub before: String,
    pub after: String,
    pub allow_skip: Vec<String>,
    pub disallow_skip: Vec<String>,
    pub detect_renames: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDecision {
    /// Nothing relevant changed; the remaining steps may be skipped.
    Skip,
    Run,
}

#[derive(Debug)]
pub struct SkipOutcome {
    pub decision: SkipDecision,
    pub changes: ChangeSet,
    pub verdict: Verdict,
}

impl SkipOutcome {
    #[must_use]
    pub fn is_skip(&self) -> bool {
        self.decision == SkipDecision::Skip
    }
}

pub struct SkipOperation<G> {
    git_provider: G,
}

impl<G> SkipOperation<G>
where
    G: GitProvider,
{
    pub fn new(git_provider: G) -> Self {
        Self { git_provider }
    }

    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile, the repository cannot be
    /// opened, either commit cannot be resolved, no merge base exists, or the
    /// diff fails. Patterns are compiled before the repository is touched.
    pub fn execute(&self, input: &SkipInput) -> Result<SkipOutcome> {
        let policy = SkipPolicy::new(&input.allow_skip, &input.disallow_skip)?;
        debug!(
            allow_skip = policy.allow_skip().len(),
            disallow_skip = policy.disallow_skip().len(),
            "compiled skip policy"
        );

        info!(before = %input.before, after = %input.after, "comparing commits");
        let options = DiffOptions {
            detect_renames: input.detect_renames,
        };
        let changes = self.git_provider.changed_files(
            &input.repo_path,
            &input.before,
            &input.after,
            &options,
        )?;

        let verdict = policy.evaluate(changes.paths());
        let decision = if verdict.skip {
            SkipDecision::Skip
        } else {
            SkipDecision::Run
        };
        info!(changed = changes.len(), ?decision, "skip decision");

        Ok(SkipOutcome {
            decision,
            changes,
            verdict,
        })
    }
}
