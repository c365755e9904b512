//! Runtime detection, process execution and tool management
//!
//! This module provides:
//! - The `CommandRunner` abstraction over external processes
//! - Host platform detection
//! - Tool presence probes and installers (cargo, sui)
//! - The prerequisite installation sequence

pub mod check;
pub mod exec;
pub mod platform;
pub mod prereqs;
pub mod tool;

pub use check::{check_runtimes, check_tool, RuntimeInfo};
pub use exec::{CommandOutput, CommandRunner, CommandSpec, ExecError, OutputMode, SystemRunner};
pub use platform::PlatformKind;
pub use prereqs::{ensure_sui, InstallOutcome};
pub use tool::ToolManager;
