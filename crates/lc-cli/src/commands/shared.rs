//! Problem discovery and selection shared by `test`, `gentest` and `history`.

use std::path::PathBuf;

use anyhow::Context;

use crate::context::AppContext;
use crate::output::message;
use crate::picker::{PickError, rank};

/// Glob pattern for `<problems_dir>/*.<extension>` with the directory escaped.
pub fn problem_pattern(ctx: &AppContext) -> anyhow::Result<String> {
    let dir = ctx.problems_dir();
    let dir_str = dir
        .to_str()
        .with_context(|| format!("problems directory is not valid UTF-8: {}", dir.display()))?;
    Ok(format!(
        "{}/*.{}",
        glob::Pattern::escape(dir_str),
        ctx.config.paths.extension
    ))
}

/// Every file matching [`problem_pattern`], in glob order.
pub fn list_problem_files(ctx: &AppContext) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = problem_pattern(ctx)?;
    tracing::debug!(%pattern, "listing problem files");

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("invalid glob pattern {pattern}"))? {
        let path = entry.context("failed to read problem file entry")?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Outcome of choosing a problem file.
#[derive(Debug, PartialEq, Eq)]
pub enum Selection {
    Picked(PathBuf),
    /// Nothing to choose from, or the user backed out. Already reported.
    Nothing,
}

/// Choose one problem file, narrowed by `query` when given.
///
/// A query matching exactly one file picks it without prompting.
pub fn select_problem(
    ctx: &mut AppContext,
    query: Option<&str>,
    prompt: &str,
) -> anyhow::Result<Selection> {
    let files = list_problem_files(ctx)?;
    if files.is_empty() {
        message(format!(
            "No problem files found in {}",
            ctx.display_path(&ctx.problems_dir())
        ));
        return Ok(Selection::Nothing);
    }

    let labels: Vec<String> = files.iter().map(|path| ctx.display_path(path)).collect();
    let candidates = match query {
        Some(query) => rank(query, &labels),
        None => (0..files.len()).collect(),
    };

    match candidates.as_slice() {
        [] => {
            message(format!("No problem matches '{}'", query.unwrap_or_default()));
            Ok(Selection::Nothing)
        }
        [only] if query.is_some() => Ok(Selection::Picked(files[*only].clone())),
        _ => {
            let shown: Vec<String> = candidates.iter().map(|&i| labels[i].clone()).collect();
            match ctx.picker.pick(prompt, &shown) {
                Ok(choice) => {
                    let index = candidates
                        .get(choice)
                        .copied()
                        .context("picker returned an out-of-range selection")?;
                    Ok(Selection::Picked(files[index].clone()))
                }
                Err(PickError::Cancelled) => {
                    message("Selection cancelled");
                    Ok(Selection::Nothing)
                }
                Err(error) => Err(error).context("problem picker failed"),
            }
        }
    }
}

/// Open `path` in the editor, reporting failure without aborting.
pub fn open_in_editor(ctx: &mut AppContext, path: &std::path::Path) {
    if let Err(error) = ctx.launcher.edit(path) {
        tracing::warn!(path = %path.display(), %error, "editor failed");
        message(format!("Failed to open editor: {error:#}"));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::commands::testing::{TestHarness, write_problem};

    #[test]
    fn lists_only_matching_extension() {
        let temp = TempDir::new().expect("tempdir should create");
        write_problem(temp.path(), "1_two_sum.go", "package problems\n");
        write_problem(temp.path(), "notes.md", "# notes\n");
        let harness = TestHarness::new(temp.path());

        let files = list_problem_files(&harness.ctx).expect("listing succeeds");
        assert_eq!(files, vec![temp.path().join("problems/1_two_sum.go")]);
    }

    #[test]
    fn pattern_escapes_root_metacharacters() {
        let temp = TempDir::new().expect("tempdir should create");
        let root = temp.path().join("practice [2024]");
        write_problem(&root, "1_two_sum.go", "package problems\n");
        let harness = TestHarness::new(&root);

        let pattern = problem_pattern(&harness.ctx).expect("pattern builds");
        assert!(pattern.ends_with("/problems/*.go"), "{pattern}");
        assert!(pattern.contains("[[]2024[]]"), "{pattern}");

        let files = list_problem_files(&harness.ctx).expect("listing succeeds");
        assert_eq!(files, vec![root.join("problems/1_two_sum.go")]);
    }

    #[test]
    fn missing_problems_dir_lists_nothing() {
        let temp = TempDir::new().expect("tempdir should create");
        let harness = TestHarness::new(temp.path());
        assert!(list_problem_files(&harness.ctx).expect("listing succeeds").is_empty());
    }

    #[test]
    fn unique_query_skips_the_picker() {
        let temp = TempDir::new().expect("tempdir should create");
        write_problem(temp.path(), "1_two_sum.go", "package problems\n");
        write_problem(temp.path(), "206_reverse_list.go", "package problems\n");
        let mut harness = TestHarness::new(temp.path());

        let selection = select_problem(&mut harness.ctx, Some("reverse"), "test").expect("select succeeds");
        assert_eq!(
            selection,
            Selection::Picked(temp.path().join("problems/206_reverse_list.go"))
        );
        assert!(harness.picker_prompts().is_empty());
    }

    #[test]
    fn picker_sees_filtered_candidates_and_maps_back() {
        let temp = TempDir::new().expect("tempdir should create");
        write_problem(temp.path(), "1_two_sum.go", "package problems\n");
        write_problem(temp.path(), "15_three_sum.go", "package problems\n");
        write_problem(temp.path(), "206_reverse_list.go", "package problems\n");
        let mut harness = TestHarness::new(temp.path()).with_picks([Ok(0)]);

        let selection = select_problem(&mut harness.ctx, Some("sum"), "test").expect("select succeeds");
        let prompts = harness.picker_prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].len(), 2);
        assert!(prompts[0].iter().all(|label| label.contains("sum")));
        let Selection::Picked(path) = selection else {
            panic!("expected a pick");
        };
        assert!(prompts[0][0].ends_with(path.file_name().and_then(|n| n.to_str()).expect("utf-8 name")));
    }

    #[test]
    fn cancelled_pick_selects_nothing() {
        let temp = TempDir::new().expect("tempdir should create");
        write_problem(temp.path(), "1_two_sum.go", "package problems\n");
        let mut harness = TestHarness::new(temp.path()).with_picks([Err(PickError::Cancelled)]);

        let selection = select_problem(&mut harness.ctx, None, "test").expect("cancel is not an error");
        assert_eq!(selection, Selection::Nothing);
    }

    #[test]
    fn query_without_matches_selects_nothing() {
        let temp = TempDir::new().expect("tempdir should create");
        write_problem(temp.path(), "1_two_sum.go", "package problems\n");
        let mut harness = TestHarness::new(temp.path());

        let selection = select_problem(&mut harness.ctx, Some("zzz"), "test").expect("select succeeds");
        assert_eq!(selection, Selection::Nothing);
        assert!(harness.picker_prompts().is_empty());
    }
}
