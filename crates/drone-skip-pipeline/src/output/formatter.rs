use skip_operations::operations::SkipOutcome;

pub(crate) trait OutputFormatter {
    fn format_outcome(&self, outcome: &SkipOutcome) -> String;
}
