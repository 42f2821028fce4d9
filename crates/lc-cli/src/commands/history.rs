use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use lc_gentest::{ProblemId, test_file_path};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::list_problem_files;
use crate::context::AppContext;
use crate::output::output_list;

const COLUMNS: &[&str] = &["number", "name", "has_test", "modified", "path"];

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub problem: ProblemId,
    pub path: String,
    pub has_test: bool,
    /// Last modification of the problem file, RFC 3339.
    pub modified: Option<String>,
}

/// Handle `lc history`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = collect(ctx)?;
    output_list(&entries, COLUMNS, flags.format)
}

fn collect(ctx: &AppContext) -> anyhow::Result<Vec<HistoryEntry>> {
    let tests_dir = ctx.tests_dir();
    let mut entries = Vec::new();
    for path in list_problem_files(ctx)? {
        let Some(problem) = ProblemId::from_path(&path) else {
            tracing::debug!(path = %path.display(), "skipping file without <number>_<name> stem");
            continue;
        };
        let has_test = test_file_path(&tests_dir, &path)?.is_file();
        entries.push(HistoryEntry {
            problem,
            path: ctx.display_path(&path),
            has_test,
            modified: modified_at(&path),
        });
    }
    entries.sort_by(|a, b| a.problem.cmp(&b.problem));
    Ok(entries)
}

fn modified_at(path: &Path) -> Option<String> {
    let modified = fs::metadata(path).and_then(|meta| meta.modified()).ok()?;
    Some(DateTime::<Utc>::from(modified).to_rfc3339())
}
