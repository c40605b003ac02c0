//! Skip decision for a set of changed paths.
//!
//! Two regex rule sets drive the decision. Every changed path must match some
//! allow-skip pattern (an empty allow-skip set allows everything), and no changed
//! path may match a disallow-skip pattern. The disallow-skip set always wins.

mod error;
mod policy;
mod rules;

pub use error::{PolicyError, Result};
pub use policy::{PolicyDialect, SkipPolicy, Verdict, Veto, evaluate};
pub use rules::RuleSet;
