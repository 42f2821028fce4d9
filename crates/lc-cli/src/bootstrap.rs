use std::path::Path;

use anyhow::Context;
use lc_config::LcConfig;

/// Load `.env` from the project root, then the layered configuration.
pub fn load_config(project_root: &Path) -> anyhow::Result<LcConfig> {
    load_project_dotenv(project_root)?;
    LcConfig::load(project_root).with_context(|| {
        format!(
            "failed to load configuration for {}",
            project_root.display()
        )
    })
}

fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if env_path.is_file() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded dotenv");
    }
    Ok(())
}
