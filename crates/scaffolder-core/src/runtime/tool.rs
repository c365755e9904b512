//! Generic tool management for CLI tools
//!
//! Provides a reusable abstraction for checking and installing CLI tools
//! like cargo or sui, each with a presence probe and an install command.

use super::exec::{CommandRunner, CommandSpec, OutputMode};
use crate::config::ScaffoldConfig;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Configuration for a CLI tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "sui")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Command that installs the tool
    pub install: CommandSpec,
}

/// Manager for checking and installing CLI tools
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    /// Create a new tool manager with the given configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Get the tool configuration
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Get the install command
    pub fn install_command(&self) -> &CommandSpec {
        &self.config.install
    }

    /// Get the installed tool version, `None` when the tool is absent
    pub async fn installed_version(&self, runner: &dyn CommandRunner) -> Option<String> {
        runner.probe(self.config.name).await
    }

    /// Install the tool, echoing the command and sharing the terminal with it
    pub async fn install(&self, runner: &dyn CommandRunner) -> Result<()> {
        run_visible(runner, &self.config.install)
            .await
            .with_context(|| {
                format!(
                    "Installing {} failed. Please try installing manually: {}",
                    self.config.display_name, self.config.install
                )
            })
    }
}

/// Echo a command, then run it with inherited stdio; non-zero exit is an error
pub async fn run_visible(runner: &dyn CommandRunner, cmd: &CommandSpec) -> Result<()> {
    println!();
    println!("{} {}", "Running:".dimmed(), cmd.to_string().yellow());
    println!();
    runner.run_checked(cmd, OutputMode::Inherit).await?;
    Ok(())
}

/// Pre-configured tool manager for rustup/cargo
pub fn cargo_tool(config: &ScaffoldConfig) -> ToolManager {
    ToolManager::new(ToolConfig {
        name: "cargo",
        display_name: "Cargo",
        install: CommandSpec::shell(config.rustup_script.clone()),
    })
}

/// Pre-configured tool manager for the Sui CLI, built with the given cargo
pub fn sui_tool(config: &ScaffoldConfig, cargo: &str) -> ToolManager {
    ToolManager::new(ToolConfig {
        name: "sui",
        display_name: "Sui",
        install: CommandSpec::new(cargo)
            .args(["install", "--locked", "--git"])
            .arg(config.sui_git_url.clone())
            .arg("--branch")
            .arg(config.sui_branch.clone())
            .arg("sui"),
    })
}

/// Locate cargo: on `PATH` if it answers, otherwise in the cargo home that a
/// fresh rustup install populates but the current shell has not picked up.
pub async fn resolve_cargo(runner: &dyn CommandRunner, config: &ScaffoldConfig) -> String {
    if runner.probe("cargo").await.is_some() {
        return "cargo".to_string();
    }

    let binary = if cfg!(windows) { "cargo.exe" } else { "cargo" };
    config
        .cargo_home
        .as_ref()
        .map(|home| home.join("bin").join(binary))
        .filter(|path: &PathBuf| path.exists())
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "cargo".to_string())
}
