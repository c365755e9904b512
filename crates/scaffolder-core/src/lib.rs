//! Scaffolder Core - library behind the `create-sui-app` CLI
//!
//! Creates Sui Move and fullstack Sui projects by driving external tools
//! (package managers, rustup, cargo, `sui`, `npx`, git) and copying sample
//! code from template repositories.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Platform detection, process execution, tool probes,
//!   template fetching
//! - **Layer 2: Workflow Orchestration** - Prerequisite installation, the table-driven
//!   materializer and repository initialization
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{scaffold, ProjectName, ProjectPlan, ProjectType, ScaffoldConfig};
//! use scaffolder_core::{SystemRunner, TemplateFetcher};
//!
//! let config = ScaffoldConfig::from_env()?;
//! let fetcher = TemplateFetcher::from_config(&config);
//! let plan = ProjectPlan::new(ProjectName::new("counter")?, ProjectType::SmartContract, ".");
//! let project = scaffold::create_project(&SystemRunner, &fetcher, &plan).await?;
//! ```

pub mod config;
pub mod project;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ScaffoldConfig;
pub use project::{ProjectName, ProjectType};
pub use runtime::{CommandRunner, CommandSpec, PlatformKind, SystemRunner};
pub use scaffold::{MaterializedProject, ProjectPlan};
pub use templates::{TemplateFetcher, TemplateRef, TemplateSource};

#[cfg(feature = "tui")]
pub use tui::run;
