use std::fmt::Write as _;

use skip_operations::operations::SkipOutcome;

use super::OutputFormatter;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    fn format_changed_files(output: &mut String, outcome: &SkipOutcome) {
        output.push_str("### changed files ###\n");
        if outcome.changes.is_empty() {
            output.push_str("  (none)\n");
            return;
        }

        let width = outcome
            .changes
            .iter()
            .map(|file| file.path.len())
            .max()
            .unwrap_or(0);
        for file in &outcome.changes {
            let _ = writeln!(
                output,
                "  {:<width$} | +{} -{}",
                file.path, file.additions, file.deletions
            );
        }
        let _ = writeln!(
            output,
            "  {} file(s) changed, {} insertion(s)(+), {} deletion(s)(-)",
            outcome.changes.len(),
            outcome.changes.total_additions(),
            outcome.changes.total_deletions()
        );
    }

    fn format_reasons(output: &mut String, outcome: &SkipOutcome) {
        let verdict = &outcome.verdict;
        if verdict.unmatched.is_empty() && verdict.vetoed.is_empty() {
            return;
        }

        output.push_str("\n### reasons ###\n");
        for path in &verdict.unmatched {
            let _ = writeln!(output, "  '{path}' is not allowed to be skipped");
        }
        for veto in &verdict.vetoed {
            let _ = writeln!(
                output,
                "  '{}' is not allowed to be skipped because of '{}'",
                veto.path, veto.pattern
            );
        }
    }
}

impl OutputFormatter for PlainTextFormatter {
    fn format_outcome(&self, outcome: &SkipOutcome) -> String {
        let mut output = String::new();
        Self::format_changed_files(&mut output, outcome);
        Self::format_reasons(&mut output, outcome);

        if outcome.is_skip() {
            output.push_str("\nNo relevant files changed, skipping remaining pipeline steps\n");
        } else {
            output.push_str("\nRelevant files changed, continuing pipeline\n");
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use skip_git::{ChangeKind, ChangeSet, ChangedFile, DiffOptions};
    use skip_operations::operations::{SkipInput, SkipOperation, SkipOutcome};
    use skip_operations::traits::GitProvider;

    use super::*;

    struct FixedChanges(Vec<ChangedFile>);

    impl GitProvider for FixedChanges {
        fn changed_files(
            &self,
            _repo_path: &std::path::Path,
            _before: &str,
            _after: &str,
            _options: &DiffOptions,
        ) -> skip_operations::Result<ChangeSet> {
            Ok(self.0.iter().cloned().collect())
        }
    }

    fn outcome(files: Vec<ChangedFile>, allow: &[&str], disallow: &[&str]) -> SkipOutcome {
        let input = SkipInput {
            repo_path: "/repo".into(),
            before: String::new(),
            after: String::new(),
            allow_skip: allow.iter().map(ToString::to_string).collect(),
            disallow_skip: disallow.iter().map(ToString::to_string).collect(),
            detect_renames: false,
        };
        SkipOperation::new(FixedChanges(files))
            .execute(&input)
            .expect("operation succeeds")
    }

    #[test]
    fn skip_report_lists_files_with_stats() {
        let outcome = outcome(
            vec![ChangedFile::new("docs/index.md", ChangeKind::Modified).with_stats(3, 1)],
            &["^docs/"],
            &[],
        );

        let text = PlainTextFormatter.format_outcome(&outcome);

        assert!(text.contains("docs/index.md | +3 -1"));
        assert!(text.contains("1 file(s) changed"));
        assert!(text.contains("skipping remaining pipeline steps"));
        assert!(!text.contains("### reasons ###"));
    }

    #[test]
    fn run_report_explains_unmatched_and_vetoed_files() {
        let outcome = outcome(
            vec![
                ChangedFile::new("Makefile", ChangeKind::Modified),
                ChangedFile::new("docs/main.go", ChangeKind::Added),
            ],
            &["^docs/"],
            &[r"\.go$"],
        );

        let text = PlainTextFormatter.format_outcome(&outcome);

        assert!(text.contains("'Makefile' is not allowed to be skipped"));
        assert!(text.contains(r"'docs/main.go' is not allowed to be skipped because of '\.go$'"));
        assert!(text.contains("continuing pipeline"));
    }

    #[test]
    fn empty_change_set_is_reported() {
        let outcome = outcome(Vec::new(), &[], &[r"\.go$"]);

        let text = PlainTextFormatter.format_outcome(&outcome);

        assert!(text.contains("(none)"));
        assert!(text.contains("skipping"));
    }
}
