use tracing::{debug, info};

use crate::error::Result;
use crate::rules::RuleSet;

/// The two surface vocabularies for the same rule pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDialect {
    AllowDisallow {
        allow_skip: Vec<String>,
        disallow_skip: Vec<String>,
    },
    /// `skip` patterns may be ignored, any `run` pattern hit forces a run.
    SkipRun { skip: Vec<String>, run: Vec<String> },
}

impl PolicyDialect {
    #[must_use]
    pub fn into_allow_disallow(self) -> (Vec<String>, Vec<String>) {
        match self {
            Self::AllowDisallow {
                allow_skip,
                disallow_skip,
            } => (allow_skip, disallow_skip),
            Self::SkipRun { skip, run } => (skip, run),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Veto {
    pub path: String,
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub skip: bool,
    /// Changed paths no allow-skip pattern covers.
    pub unmatched: Vec<String>,
    /// Changed paths hit by a disallow-skip pattern.
    pub vetoed: Vec<Veto>,
}

impl Verdict {
    fn nothing_changed() -> Self {
        Self {
            skip: true,
            unmatched: Vec::new(),
            vetoed: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SkipPolicy {
    allow_skip: RuleSet,
    disallow_skip: RuleSet,
}

impl SkipPolicy {
    /// # Errors
    ///
    /// Returns [`crate::PolicyError::InvalidPattern`] if any pattern in either set
    /// fails to compile.
    pub fn new<A, D>(allow_skip: A, disallow_skip: D) -> Result<Self>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        Ok(Self {
            allow_skip: RuleSet::compile(allow_skip)?,
            disallow_skip: RuleSet::compile(disallow_skip)?,
        })
    }

    /// # Errors
    ///
    /// Returns [`crate::PolicyError::InvalidPattern`] if any pattern fails to compile.
    pub fn from_dialect(dialect: PolicyDialect) -> Result<Self> {
        let (allow_skip, disallow_skip) = dialect.into_allow_disallow();
        Self::new(allow_skip, disallow_skip)
    }

    #[must_use]
    pub fn allow_skip(&self) -> &RuleSet {
        &self.allow_skip
    }

    #[must_use]
    pub fn disallow_skip(&self) -> &RuleSet {
        &self.disallow_skip
    }

    /// Skip only when every path is allowed to be skipped and no path is
    /// disallowed. An empty list of paths always skips.
    pub fn evaluate<I, S>(&self, paths: I) -> Verdict
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owned: Vec<S> = paths.into_iter().collect();
        let paths: Vec<&str> = owned.iter().map(|path| path.as_ref()).collect();
        if paths.is_empty() {
            info!("no files changed");
            return Verdict::nothing_changed();
        }

        // An empty allow list lets everything be skipped.
        let unmatched: Vec<String> = if self.allow_skip.is_empty() {
            Vec::new()
        } else {
            paths
                .iter()
                .filter(|path| !self.allow_skip.matches(path))
                .map(|path| (*path).to_string())
                .collect()
        };

        let vetoed: Vec<Veto> = paths
            .iter()
            .filter_map(|path| {
                self.disallow_skip.first_match(path).map(|pattern| Veto {
                    path: (*path).to_string(),
                    pattern: pattern.to_string(),
                })
            })
            .collect();

        for path in &unmatched {
            debug!(%path, "not allowed to be skipped");
        }
        for veto in &vetoed {
            debug!(path = %veto.path, pattern = %veto.pattern, "disallowed to be skipped");
        }

        let allow = unmatched.is_empty();
        let disallow = !vetoed.is_empty();
        let skip = allow && !disallow;
        info!(files = paths.len(), allow, disallow, skip, "evaluated skip policy");

        Verdict {
            skip,
            unmatched,
            vetoed,
        }
    }
}

/// Decides whether the changed `paths` allow the pipeline to be skipped.
///
/// # Errors
///
/// Returns [`crate::PolicyError::InvalidPattern`] if any pattern in either set
/// fails to compile. An empty `paths` list is decided before compilation.
pub fn evaluate<P, A, D>(paths: &[P], allow_skip: &[A], disallow_skip: &[D]) -> Result<bool>
where
    P: AsRef<str>,
    A: AsRef<str>,
    D: AsRef<str>,
{
    if paths.is_empty() {
        return Ok(true);
    }

    let policy = SkipPolicy::new(allow_skip, disallow_skip)?;
    Ok(policy.evaluate(paths).skip)
}
