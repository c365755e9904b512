//! Charm-style CLI prompts using cliclack

use crate::config::{ScaffoldConfig, DISPLAY_NAME};
use crate::project::{ProjectName, ProjectType};
use crate::runtime::check;
use crate::runtime::exec::{CommandRunner, SystemRunner};
use crate::runtime::platform::PlatformKind;
use crate::runtime::prereqs::{ensure_sui, InstallOutcome};
use crate::scaffold::{self, ProjectPlan};
use crate::templates::{TemplateFetcher, TemplateSource};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; prompted for when missing or empty
    pub name: Option<String>,

    /// Project type; prompted for when missing
    pub project_type: Option<ProjectType>,

    /// Local directory to use for templates instead of fetching from remote
    pub template_dir: Option<PathBuf>,

    /// Skip the Sui/cargo prerequisite installer
    pub skip_install: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro(DISPLAY_NAME)?;

    // Step 1: Collect project name and type
    let name = collect_name(args.name.as_deref())?;
    let kind = select_project_type(args.project_type)?;

    let config = ScaffoldConfig::from_env()?.with_template_dir(args.template_dir.clone());
    let runner = SystemRunner;
    let layout = kind.layout();

    // Step 2: Install prerequisites (smart contract projects only)
    if layout.installs_toolchain {
        if args.skip_install {
            cliclack::log::info("Skipping prerequisite installation")?;
        } else {
            handle_install(&runner, &config).await?;
        }
    }

    // Step 3: Report the tools the scaffold steps will call
    check_tools(&runner, kind).await?;

    // Step 4: Create project
    let fetcher = setup_fetcher(&config)?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let plan = ProjectPlan::new(name, kind, cwd.clone());
    let root_existed = plan.root().exists();

    let project = match scaffold::create_project(&runner, &fetcher, &plan).await {
        Ok(project) => project,
        Err(e) => {
            if left_partial_tree(root_existed, &plan.root()) {
                cliclack::log::warning(format!(
                    "Partially created project left at {}",
                    plan.root().display()
                ))?;
            }
            return Err(e);
        }
    };

    cliclack::log::success(format!(
        "Created {} in {} ({} sample files)",
        plan.name,
        project.root.display(),
        project.sample_files.len()
    ))?;

    // Step 5: Show next steps
    print_next_steps(&scaffold::next_steps(&plan, &project, &cwd))?;

    Ok(())
}

/// Use the argument when it is a valid name, otherwise prompt
fn collect_name(arg: Option<&str>) -> Result<ProjectName> {
    if let Some(name) = name_from_arg(arg) {
        cliclack::log::info(format!("Project name: {}", name))?;
        return Ok(name);
    }

    ensure_interactive()?;
    let input: String = cliclack::input("Enter the project name:")
        .placeholder("my-sui-app")
        .validate(|input: &String| {
            if input.is_empty() {
                Err("Please enter a project name")
            } else {
                Ok(())
            }
        })
        .interact()?;

    Ok(ProjectName::new(input)?)
}

/// A failed run only leaves a partial tree when it created the root itself
fn left_partial_tree(root_existed: bool, root: &Path) -> bool {
    !root_existed && root.exists()
}

fn name_from_arg(arg: Option<&str>) -> Option<ProjectName> {
    arg.and_then(|name| ProjectName::new(name).ok())
}

fn select_project_type(preselected: Option<ProjectType>) -> Result<ProjectType> {
    if let Some(kind) = preselected {
        cliclack::log::info(format!("Project type: {}", kind))?;
        return Ok(kind);
    }

    ensure_interactive()?;
    let mut select = cliclack::select("Select the project type:");
    for kind in ProjectType::ALL {
        select = select.item(kind, kind.display_name(), "");
    }
    Ok(select.interact()?)
}

/// Prompts need a terminal; fail early instead of hanging on a closed stdin
fn ensure_interactive() -> Result<()> {
    if !console::user_attended_stderr() {
        anyhow::bail!(
            "Interactive input is unavailable. Pass the project name and --type to run non-interactively."
        );
    }
    Ok(())
}

async fn handle_install(runner: &dyn CommandRunner, config: &ScaffoldConfig) -> Result<()> {
    let platform = PlatformKind::current();

    match ensure_sui(runner, &platform, config).await? {
        InstallOutcome::AlreadyInstalled { version } => {
            cliclack::log::success(format!("Sui installed ({})", version))?;
        }
        InstallOutcome::Installed => {
            cliclack::log::success("Sui installed successfully")?;
        }
        InstallOutcome::UnsupportedPlatform(platform) => {
            cliclack::log::warning(format!(
                "Skipped installing Sui: unsupported platform '{}'",
                platform
            ))?;
        }
    }

    Ok(())
}

async fn check_tools(runner: &dyn CommandRunner, kind: ProjectType) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking tools...");

    let tools = check::check_runtimes(runner, kind.layout()).await;
    let summary: Vec<String> = tools.iter().map(|t| t.describe()).collect();
    spinner.stop(format!("Detected tools: {}", summary.join(", ")));

    for missing in tools.iter().filter(|t| !t.available) {
        cliclack::log::warning(format!(
            "{} was not found; the steps that need it will fail",
            missing.name
        ))?;
    }

    Ok(())
}

fn setup_fetcher(config: &ScaffoldConfig) -> Result<TemplateFetcher> {
    let fetcher = TemplateFetcher::from_config(config);
    match fetcher.source() {
        TemplateSource::Local(path) => {
            cliclack::log::info(format!("Using local templates from {}", path.display()))?
        }
        TemplateSource::Remote(url) => {
            cliclack::log::info(format!("Using remote templates from {}", url))?
        }
    }
    Ok(fetcher)
}

fn print_next_steps(steps: &[String]) -> Result<()> {
    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Project setup complete.")?;

    Ok(())
}
