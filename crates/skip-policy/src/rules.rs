use regex::Regex;

use crate::error::{PolicyError, Result};

/// Compiled regex patterns, matched unanchored against the full changed path.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    patterns: Vec<Regex>,
}

impl RuleSet {
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidPattern`] for the first pattern that fails to
    /// compile; no partially compiled set is returned.
    pub fn compile<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|source| PolicyError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.first_match(path).is_some()
    }

    /// Source text of the first pattern matching `path`.
    #[must_use]
    pub fn first_match(&self, path: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|pattern| pattern.is_match(path))
            .map(Regex::as_str)
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }
}
