//! Table-driven project materialization
//!
//! Each project type's [`ProjectLayout`] decides which directories are
//! created, which generators run and where the sample code lands. Steps run
//! in order and stop at the first failure, leaving whatever was created.

use crate::project::{ProjectLayout, ProjectName, ProjectType};
use crate::runtime::exec::{CommandRunner, CommandSpec};
use crate::runtime::tool::run_visible;
use crate::scaffold::repository::git_init;
use crate::templates::{TemplateFetcher, TemplateRef};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// What to create and where
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    pub name: ProjectName,
    pub kind: ProjectType,
    /// Directory the project root is created in
    pub parent: PathBuf,
}

impl ProjectPlan {
    pub fn new(name: ProjectName, kind: ProjectType, parent: impl Into<PathBuf>) -> Self {
        Self {
            name,
            kind,
            parent: parent.into(),
        }
    }

    /// `<parent>/<name>`
    pub fn root(&self) -> PathBuf {
        self.parent.join(self.name.as_str())
    }

    pub fn layout(&self) -> &'static ProjectLayout {
        self.kind.layout()
    }
}

/// Paths of a materialized project
#[derive(Debug, Clone)]
pub struct MaterializedProject {
    pub root: PathBuf,
    /// Directory `sui move new` ran in
    pub contracts_dir: PathBuf,
    /// The Move package `sui move new` created
    pub package_dir: PathBuf,
    pub app_dir: Option<PathBuf>,
    pub sample_dir: PathBuf,
    /// Sample files written, relative to `sample_dir`
    pub sample_files: Vec<String>,
}

/// Create the project tree for `plan`
pub async fn materialize(
    runner: &dyn CommandRunner,
    fetcher: &TemplateFetcher,
    plan: &ProjectPlan,
) -> Result<MaterializedProject> {
    let layout = plan.layout();
    let name = &plan.name;
    let root = plan.root();
    let sample = TemplateRef::parse(layout.sample_template)?;

    tracing::info!(kind = ?plan.kind, root = %root.display(), "materializing project");
    println!(
        "{}",
        format!("Setting up {} project: {}", plan.kind, name).cyan()
    );

    create_dir(&root).await?;
    if layout.init_repo_first {
        git_init(runner, &root).await?;
    }

    let contracts_dir = match layout.contracts_dir_name(name) {
        Some(dir_name) => {
            println!("{}", "Setting up smart contracts...".cyan());
            let dir = root.join(dir_name);
            create_dir(&dir).await?;
            dir
        }
        None => root.clone(),
    };

    let sui_new = CommandSpec::new("sui")
        .args(["move", "new"])
        .arg(name.as_str())
        .current_dir(&contracts_dir);
    run_visible(runner, &sui_new)
        .await
        .context("Failed to create the Move package")?;

    let app_dir = match (&layout.app, layout.app_dir_name(name)) {
        (Some(app), Some(dir_name)) => {
            println!("{}", format!("Setting up {}...", dir_name).cyan());
            let generator = CommandSpec::new(app.program)
                .args(app.args.iter().copied())
                .arg(dir_name.as_str())
                .current_dir(&root);
            run_visible(runner, &generator)
                .await
                .with_context(|| format!("Failed to generate {}", dir_name))?;
            Some(root.join(dir_name))
        }
        _ => None,
    };

    println!("{}", format!("Fetching sample code from {}...", sample).cyan());
    let sample_dir = root.join(layout.sample_dir);
    let sample_files = fetcher
        .fetch_into(&sample, &sample_dir)
        .await
        .with_context(|| format!("Failed to fetch sample code from {}", sample))?;

    Ok(MaterializedProject {
        package_dir: contracts_dir.join(name.as_str()),
        root,
        contracts_dir,
        app_dir,
        sample_dir,
        sample_files,
    })
}

/// `mkdir` semantics: the directory must not exist yet
async fn create_dir(path: &Path) -> Result<()> {
    match tokio::fs::create_dir(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            anyhow::bail!("Directory already exists: {}", path.display())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to create directory: {}", path.display())),
    }
}
