//! Scaffolder configuration: compiled-in defaults with environment overrides

use anyhow::{Context, Result};
use std::path::PathBuf;
use url::Url;

/// Binary name, also used as the HTTP user agent and in generated READMEs
pub const PRODUCT_NAME: &str = "create-sui-app";

/// Human-readable name shown in the intro banner
pub const DISPLAY_NAME: &str = "Create Sui App";

/// Where users go when the installer cannot handle their platform
pub const SUI_INSTALL_DOCS_URL: &str =
    "https://docs.sui.io/guides/developer/getting-started/sui-install";

const DEFAULT_SUI_GIT_URL: &str = "https://github.com/MystenLabs/sui.git";
const DEFAULT_SUI_BRANCH: &str = "devnet";
const DEFAULT_TEMPLATE_HOST: &str = "https://github.com";
const RUSTUP_INSTALL_SCRIPT: &str = "curl https://sh.rustup.rs -sSf | sh -s -- -y";

/// Environment variable overriding the Sui git repository
pub const SUI_GIT_ENV: &str = "CREATE_SUI_APP_SUI_GIT";
/// Environment variable overriding the Sui branch to install
pub const SUI_BRANCH_ENV: &str = "CREATE_SUI_APP_SUI_BRANCH";
/// Environment variable overriding the host serving template archives
pub const TEMPLATE_HOST_ENV: &str = "CREATE_SUI_APP_TEMPLATE_HOST";

/// Resolved settings for one run
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Git repository `cargo install` builds the Sui CLI from
    pub sui_git_url: String,
    /// Branch of `sui_git_url` to install
    pub sui_branch: String,
    /// Shell script that installs rustup and cargo
    pub rustup_script: String,
    /// Base URL template archives are downloaded from
    pub template_host: Url,
    /// Local directory to copy templates from instead of downloading
    pub template_dir: Option<PathBuf>,
    /// Cargo home, used to find `cargo` right after a fresh rustup install
    pub cargo_home: Option<PathBuf>,
    /// User agent sent with template downloads
    pub user_agent: String,
}

impl ScaffoldConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using a custom variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty(TEMPLATE_HOST_ENV).unwrap_or_else(|| DEFAULT_TEMPLATE_HOST.to_string());
        let template_host =
            Url::parse(&host).with_context(|| format!("Invalid template host URL: {}", host))?;

        let cargo_home = non_empty("CARGO_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".cargo")));

        Ok(Self {
            sui_git_url: non_empty(SUI_GIT_ENV).unwrap_or_else(|| DEFAULT_SUI_GIT_URL.to_string()),
            sui_branch: non_empty(SUI_BRANCH_ENV).unwrap_or_else(|| DEFAULT_SUI_BRANCH.to_string()),
            rustup_script: RUSTUP_INSTALL_SCRIPT.to_string(),
            template_host,
            template_dir: None,
            cargo_home,
            user_agent: format!("{}/{}", PRODUCT_NAME, env!("CARGO_PKG_VERSION")),
        })
    }

    /// Use templates from a local directory (development use)
    pub fn with_template_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.template_dir = dir;
        self
    }
}
