use skip_policy::{PolicyError, SkipPolicy, evaluate};

const NONE: &[&str] = &[];

#[test]
fn code_changes_are_not_covered_by_docs_allow_list() -> anyhow::Result<()> {
    let changed = [".drone.star", "cmd/foo.go", "pkg/bar.go"];

    assert!(!evaluate(&changed, &["^docs/.*"], NONE)?);
    Ok(())
}

#[test]
fn mixed_code_and_docs_changes_run() -> anyhow::Result<()> {
    let changed = [
        ".drone.star",
        "cmd/foo.go",
        "pkg/internal/bar.go",
        "docs/config.hugo",
    ];

    assert!(!evaluate(&changed, &["^docs/.*"], NONE)?);
    Ok(())
}

#[test]
fn docs_only_change_is_skipped() -> anyhow::Result<()> {
    assert!(evaluate(&["docs/index.md"], &["^docs/.*"], NONE)?);
    Ok(())
}

#[test]
fn no_go_file_touched_is_skipped() -> anyhow::Result<()> {
    let changed = ["docs/index.md", "docs/config.hugo"];

    assert!(evaluate(&changed, NONE, &[r".*\.go$"])?);
    Ok(())
}

#[test]
fn go_file_touched_runs() -> anyhow::Result<()> {
    let changed = [".drone.star", "cmd/foo.go"];

    assert!(!evaluate(&changed, NONE, &[r".*\.go$"])?);
    Ok(())
}

#[test]
fn empty_change_set_beats_disallow_list() -> anyhow::Result<()> {
    assert!(evaluate(NONE, NONE, &[r".*\.go$"])?);
    Ok(())
}

#[test]
fn empty_change_set_beats_allow_list() -> anyhow::Result<()> {
    assert!(evaluate(NONE, &[r".*\.go$"], NONE)?);
    Ok(())
}

#[test]
fn empty_change_set_skips_even_with_malformed_patterns() -> anyhow::Result<()> {
    assert!(evaluate(NONE, &["*"], &["("])?);
    Ok(())
}

#[test]
fn no_rules_at_all_skip_any_change() -> anyhow::Result<()> {
    assert!(evaluate(&["src/main.rs", "Cargo.toml"], NONE, NONE)?);
    Ok(())
}

#[test]
fn malformed_allow_pattern_fails() {
    let result = evaluate(&[".drone.star", "cmd/foo.go"], &["*"], NONE);

    assert!(matches!(result, Err(PolicyError::InvalidPattern { ref pattern, .. }) if pattern == "*"));
}

#[test]
fn malformed_disallow_pattern_fails_alongside_valid_ones() {
    let result = evaluate(&["docs/index.md"], &["^docs/"], &[r".*\.go$", "(unclosed"]);

    assert!(matches!(
        result,
        Err(PolicyError::InvalidPattern { ref pattern, .. }) if pattern == "(unclosed"
    ));
}

#[test]
fn disallow_wins_when_a_file_matches_both_sets() -> anyhow::Result<()> {
    let changed = ["docs/examples/main.go"];

    assert!(!evaluate(&changed, &["^docs/"], &[r"\.go$"])?);
    Ok(())
}

#[test]
fn one_uncovered_file_among_many_prevents_skip() -> anyhow::Result<()> {
    let mut changed: Vec<String> = (0..50).map(|i| format!("docs/page-{i}.md")).collect();
    changed.push("Makefile".to_string());

    assert!(!evaluate(&changed, &["^docs/"], NONE)?);
    Ok(())
}

#[test]
fn one_disallowed_file_among_many_prevents_skip() -> anyhow::Result<()> {
    let mut changed: Vec<String> = (0..50).map(|i| format!("docs/page-{i}.md")).collect();
    changed.push("cmd/main.go".to_string());

    assert!(!evaluate(&changed, NONE, &[r"\.go$"])?);
    Ok(())
}

#[test]
fn any_allow_pattern_may_cover_a_file() -> anyhow::Result<()> {
    let changed = ["docs/index.md", "README.md", ".github/CODEOWNERS"];

    assert!(evaluate(&changed, &["^docs/", r"\.md$", "^\\.github/"], NONE)?);
    Ok(())
}

#[test]
fn uncovered_file_runs_regardless_of_disallow_list() -> anyhow::Result<()> {
    let changed = ["docs/index.md", "Makefile"];

    assert!(!evaluate(&changed, &["^docs/"], &["^never-matches$"])?);
    Ok(())
}

#[test]
fn unanchored_pattern_matches_anywhere_in_path() -> anyhow::Result<()> {
    assert!(!evaluate(&["vendor/docs/file.go"], NONE, &["docs"])?);
    assert!(evaluate(&["vendor/docs/file.go"], NONE, &["^docs"])?);
    Ok(())
}

#[test]
fn compiled_policy_matches_free_function() -> anyhow::Result<()> {
    let policy = SkipPolicy::new(["^docs/"], [r"\.go$"])?;
    let cases: [&[&str]; 4] = [
        &["docs/a.md"],
        &["docs/a.md", "src/lib.rs"],
        &["docs/a.go"],
        &[],
    ];

    for changed in cases {
        assert_eq!(
            policy.evaluate(changed).skip,
            evaluate(changed, &["^docs/"], &[r"\.go$"])?,
            "{changed:?}"
        );
    }
    Ok(())
}
