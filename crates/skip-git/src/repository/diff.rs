use tracing::{debug, warn};

use crate::{ChangeKind, ChangeSet, ChangedFile, DiffOptions, GitError, Result};

use super::Repository;

impl Repository {
    /// Files changed on `after` since it forked from `before`, the same set
    /// `git diff before...after` reports.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::CommitNotFound`] if either commit cannot be resolved,
    /// [`GitError::MergeBaseNotFound`] if the histories share no ancestor, and
    /// [`GitError::Diff`] if the patch cannot be generated.
    pub fn changed_files(
        &self,
        before: &str,
        after: &str,
        options: &DiffOptions,
    ) -> Result<ChangeSet> {
        let before_commit = self.find_commit(before)?;
        let after_commit = self.find_commit(after)?;
        let base = self.merge_base_of(&before_commit, &after_commit)?;

        self.diff_commits(&base, &after_commit, options)
    }

    fn diff_commits(
        &self,
        base: &git2::Commit<'_>,
        head: &git2::Commit<'_>,
        options: &DiffOptions,
    ) -> Result<ChangeSet> {
        let diff_error = |source| GitError::Diff {
            base: base.id().to_string(),
            head: head.id().to_string(),
            source,
        };

        let base_tree = base.tree().map_err(diff_error)?;
        let head_tree = head.tree().map_err(diff_error)?;

        let mut diff = self
            .inner
            .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)
            .map_err(diff_error)?;

        if options.detect_renames {
            let mut find_opts = git2::DiffFindOptions::new();
            find_opts.renames(true);
            diff.find_similar(Some(&mut find_opts))
                .map_err(diff_error)?;
        }

        let mut changes = ChangeSet::new();

        for (idx, delta) in diff.deltas().enumerate() {
            let Some((path, kind)) = classify(&delta)? else {
                continue;
            };

            let (additions, deletions) = line_stats(&diff, idx).map_err(diff_error)?;
            debug!(%path, %kind, additions, deletions, "changed file");

            changes.push(ChangedFile::new(path, kind).with_stats(additions, deletions));
        }

        Ok(changes)
    }
}

fn classify(delta: &git2::DiffDelta<'_>) -> Result<Option<(String, ChangeKind)>> {
    let old_path = delta.old_file().path_bytes().map(String::from_utf8_lossy);
    let new_path = delta.new_file().path_bytes().map(String::from_utf8_lossy);

    let (path, kind) = match delta.status() {
        git2::Delta::Added | git2::Delta::Copied => (new_path, ChangeKind::Added),
        git2::Delta::Deleted => (old_path, ChangeKind::Deleted),
        git2::Delta::Modified | git2::Delta::Typechange if old_path == new_path => {
            (new_path, ChangeKind::Modified)
        }
        git2::Delta::Renamed | git2::Delta::Modified | git2::Delta::Typechange => {
            warn!(
                from = %old_path.unwrap_or_default(),
                to = %new_path.unwrap_or_default(),
                "renamed file left out of change set"
            );
            return Ok(None);
        }
        _ => return Ok(None),
    };

    let path = path.ok_or(GitError::MissingDeltaPath)?;
    Ok(Some((path.into_owned(), kind)))
}

fn line_stats(diff: &git2::Diff<'_>, idx: usize) -> std::result::Result<(usize, usize), git2::Error> {
    // Binary and content-less deltas produce no patch.
    let Some(patch) = git2::Patch::from_diff(diff, idx)? else {
        return Ok((0, 0));
    };

    let mut additions = 0;
    let mut deletions = 0;

    for hunk in 0..patch.num_hunks() {
        let mut added = Vec::new();
        let mut removed = Vec::new();

        for line in 0..patch.num_lines_in_hunk(hunk)? {
            let line = patch.line_in_hunk(hunk, line)?;
            match line.origin_value() {
                git2::DiffLineType::Addition => added.extend_from_slice(line.content()),
                git2::DiffLineType::Deletion => removed.extend_from_slice(line.content()),
                _ => {}
            }
        }

        additions += count_lines(&added);
        deletions += count_lines(&removed);
    }

    Ok((additions, deletions))
}

/// Number of lines in `content`, counting a final line that lacks a trailing newline.
#[must_use]
pub fn count_lines(content: &[u8]) -> usize {
    let newlines = content.iter().filter(|&&byte| byte == b'\n').count();
    match content.last() {
        Some(&last) if last != b'\n' => newlines + 1,
        _ => newlines,
    }
}
