//! Host platform detection and native prerequisite commands

use super::exec::CommandSpec;
use std::fmt;

/// Host platforms with a known prerequisite install sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformKind {
    MacOs,
    Linux,
    Windows,
    /// Anything else, carrying the raw identifier for messages
    Unsupported(String),
}

impl PlatformKind {
    /// Map an OS identifier to a platform. Accepts Rust's `std::env::consts::OS`
    /// values as well as the `darwin`/`win32` spellings used by other tooling.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" | "darwin" => PlatformKind::MacOs,
            "linux" => PlatformKind::Linux,
            "windows" | "win32" => PlatformKind::Windows,
            other => PlatformKind::Unsupported(other.to_string()),
        }
    }

    /// Platform of the running host
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn display_name(&self) -> &str {
        match self {
            PlatformKind::MacOs => "macOS",
            PlatformKind::Linux => "Linux",
            PlatformKind::Windows => "Windows",
            PlatformKind::Unsupported(os) => os,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, PlatformKind::Unsupported(_))
    }

    /// Package-manager commands that install the native build tools, in order.
    /// Empty for unsupported platforms.
    pub fn prerequisite_commands(&self) -> Vec<CommandSpec> {
        match self {
            PlatformKind::MacOs => vec![CommandSpec::new("brew")
                .arg("install")
                .args(["cmake", "libpq", "curl", "git"])],
            PlatformKind::Linux => vec![
                CommandSpec::new("sudo").args(["apt-get", "update"]),
                CommandSpec::new("sudo")
                    .args(["apt-get", "install", "-y"])
                    .args([
                        "cmake",
                        "gcc",
                        "libssl-dev",
                        "libclang-dev",
                        "libpq-dev",
                        "build-essential",
                        "curl",
                        "git",
                    ]),
            ],
            PlatformKind::Windows => vec![CommandSpec::new("choco")
                .arg("install")
                .args(["curl", "git", "cmake", "llvm"])
                .args(["--installargs", "ADD_CMAKE_TO_PATH=System"])],
            PlatformKind::Unsupported(_) => Vec::new(),
        }
    }

    /// Manual steps the package manager cannot cover
    pub fn manual_steps(&self) -> Option<&'static str> {
        match self {
            PlatformKind::Windows => Some(
                "Please manually install C++ build tools from \
                 https://visualstudio.microsoft.com/visual-cpp-build-tools/",
            ),
            _ => None,
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
