//! Prerequisite installation for Sui development
//!
//! Sequence: probe `sui`; if absent, install the platform's native build
//! tools, then cargo via rustup when missing, then the Sui CLI from git.
//! Failures are fatal and nothing is rolled back.

use super::exec::CommandRunner;
use super::platform::PlatformKind;
use super::tool::{cargo_tool, resolve_cargo, run_visible, sui_tool};
use crate::config::{ScaffoldConfig, SUI_INSTALL_DOCS_URL};
use anyhow::Result;
use colored::Colorize;

/// What the installer ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// `sui` answered the presence probe; nothing was installed
    AlreadyInstalled { version: String },
    /// Prerequisites and the Sui CLI were installed
    Installed,
    /// No install sequence exists for this platform; nothing was run
    UnsupportedPlatform(PlatformKind),
}

/// Ensure the Sui CLI and its build prerequisites are present
pub async fn ensure_sui(
    runner: &dyn CommandRunner,
    platform: &PlatformKind,
    config: &ScaffoldConfig,
) -> Result<InstallOutcome> {
    if let Some(version) = runner.probe("sui").await {
        tracing::info!(%version, "sui already installed");
        return Ok(InstallOutcome::AlreadyInstalled { version });
    }

    if !platform.is_supported() {
        tracing::warn!(platform = %platform, "no prerequisite install sequence for platform");
        println!("{} {}", "Unsupported platform:".yellow(), platform);
        println!(
            "Please follow the instructions at {}",
            SUI_INSTALL_DOCS_URL.cyan()
        );
        return Ok(InstallOutcome::UnsupportedPlatform(platform.clone()));
    }

    println!(
        "{}",
        format!("Sui is not installed. Installing prerequisites for {}...", platform).cyan()
    );
    install_prerequisites(runner, platform).await?;
    ensure_cargo(runner, config).await?;

    println!("{}", "Installing Sui...".cyan());
    let cargo = resolve_cargo(runner, config).await;
    sui_tool(config, &cargo).install(runner).await?;

    Ok(InstallOutcome::Installed)
}

/// Run the platform's native package-manager commands in order
pub async fn install_prerequisites(runner: &dyn CommandRunner, platform: &PlatformKind) -> Result<()> {
    for cmd in platform.prerequisite_commands() {
        run_visible(runner, &cmd).await?;
    }
    if let Some(note) = platform.manual_steps() {
        println!("{}", note.yellow());
    }
    Ok(())
}

/// Install cargo through rustup unless it already answers
pub async fn ensure_cargo(runner: &dyn CommandRunner, config: &ScaffoldConfig) -> Result<()> {
    let tool = cargo_tool(config);
    if let Some(version) = tool.installed_version(runner).await {
        tracing::debug!(%version, "cargo already installed");
        println!("{}", "Cargo is already installed.".dimmed());
        return Ok(());
    }

    println!("{}", "Installing Cargo...".cyan());
    tool.install(runner).await
}
