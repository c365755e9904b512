//! Git repository initialization and boilerplate files

use crate::config::PRODUCT_NAME;
use crate::project::ProjectName;
use crate::runtime::exec::{CommandRunner, CommandSpec};
use crate::runtime::tool::run_visible;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// `.gitignore` written into every project
pub const GITIGNORE: &str = "node_modules\nbuild\n";

/// README contents for a project
pub fn readme(name: &ProjectName) -> String {
    format!("# {}\n\nGenerated by {}.", name, PRODUCT_NAME)
}

/// `git init` in `root`; re-running on an existing repository is harmless
pub async fn git_init(runner: &dyn CommandRunner, root: &Path) -> Result<()> {
    run_visible(runner, &CommandSpec::new("git").arg("init").current_dir(root))
        .await
        .context("Failed to initialize git repository")
}

/// Initialize the repository and write README.md and .gitignore,
/// replacing any existing files of the same name
pub async fn init_repository(runner: &dyn CommandRunner, root: &Path, name: &ProjectName) -> Result<()> {
    git_init(runner, root).await?;

    let readme_path = root.join("README.md");
    fs::write(&readme_path, readme(name))
        .await
        .with_context(|| format!("Failed to write {}", readme_path.display()))?;

    let gitignore_path = root.join(".gitignore");
    fs::write(&gitignore_path, GITIGNORE)
        .await
        .with_context(|| format!("Failed to write {}", gitignore_path.display()))?;

    Ok(())
}
