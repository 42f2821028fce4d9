mod app_context;
mod project_root;

use std::path::PathBuf;

use anyhow::Context;

pub use app_context::AppContext;
pub use project_root::find_project_root;

/// Resolve the project root from `--root` or by walking up from the cwd.
///
/// Without a marker anywhere above, the current directory is used.
pub fn resolve_project_root(root_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = root_override {
        let explicit = PathBuf::from(path);
        if explicit.is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --root '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    Ok(find_project_root(&start).unwrap_or(start))
}
