mod skip;

pub use skip::{SkipDecision, SkipInput, SkipOperation, SkipOutcome};
