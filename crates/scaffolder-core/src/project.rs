//! Project names, project types and the per-type layout table

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectNameError {
    #[error("Project name cannot be empty")]
    Empty,
}

/// User-supplied project name, used verbatim as a directory name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Accept any non-empty name. The value is kept exactly as given.
    pub fn new(name: impl Into<String>) -> Result<Self, ProjectNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProjectNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of project to scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ProjectType {
    /// A Sui Move package with example modules
    SmartContract,
    /// Sui Move contracts plus a React web frontend
    FullstackWeb,
    /// Sui Move contracts plus a React Native mobile app
    FullstackMobile,
}

impl ProjectType {
    /// Every type, in prompt order
    pub const ALL: [ProjectType; 3] = [
        ProjectType::SmartContract,
        ProjectType::FullstackWeb,
        ProjectType::FullstackMobile,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::SmartContract => "Sui Smart Contract",
            ProjectType::FullstackWeb => "Fullstack Web",
            ProjectType::FullstackMobile => "Fullstack Mobile",
        }
    }

    pub fn layout(&self) -> &'static ProjectLayout {
        match self {
            ProjectType::SmartContract => &LAYOUTS[0],
            ProjectType::FullstackWeb => &LAYOUTS[1],
            ProjectType::FullstackMobile => &LAYOUTS[2],
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// App generator run from the project root, e.g. `npx create-react-app <name>_frontend`
#[derive(Debug)]
pub struct AppGenerator {
    pub program: &'static str,
    pub args: &'static [&'static str],
    /// Appended to the project name to form the app directory
    pub suffix: &'static str,
    /// Command that starts the generated app, for next steps
    pub start_command: &'static str,
}

/// Everything that distinguishes one project type's scaffold from another
#[derive(Debug)]
pub struct ProjectLayout {
    pub kind: ProjectType,
    /// Run the prerequisite installer (sui, cargo, build tools) first
    pub installs_toolchain: bool,
    /// `git init` the root before generators run
    pub init_repo_first: bool,
    /// Suffix of the Move contracts directory; `None` puts the package in the root
    pub contracts_suffix: Option<&'static str>,
    pub app: Option<AppGenerator>,
    /// degit-style reference of the sample code template
    pub sample_template: &'static str,
    /// Directory under the root the sample is written to
    pub sample_dir: &'static str,
}

static LAYOUTS: [ProjectLayout; 3] = [
    ProjectLayout {
        kind: ProjectType::SmartContract,
        installs_toolchain: true,
        init_repo_first: false,
        contracts_suffix: None,
        app: None,
        sample_template: "github:sui-foundation/sui-move-intro-course/unit-two",
        sample_dir: "examples",
    },
    ProjectLayout {
        kind: ProjectType::FullstackWeb,
        installs_toolchain: false,
        init_repo_first: true,
        contracts_suffix: Some("_smart_contracts"),
        app: Some(AppGenerator {
            program: "npx",
            args: &["create-react-app"],
            suffix: "_frontend",
            start_command: "npm start",
        }),
        sample_template: "dantheman8300/enoki-example-app",
        sample_dir: "frontend_sample",
    },
    ProjectLayout {
        kind: ProjectType::FullstackMobile,
        installs_toolchain: false,
        init_repo_first: true,
        contracts_suffix: Some("_smart_contracts"),
        app: Some(AppGenerator {
            program: "npx",
            args: &["react-native", "init"],
            suffix: "_mobile",
            start_command: "npx react-native run-android",
        }),
        sample_template: "dantheman8300/enoki-example-app",
        sample_dir: "mobile_sample",
    },
];

impl ProjectLayout {
    /// Name of the Move contracts directory, if separate from the root
    pub fn contracts_dir_name(&self, name: &ProjectName) -> Option<String> {
        self.contracts_suffix.map(|suffix| format!("{}{}", name, suffix))
    }

    /// Name of the generated app directory, if any
    pub fn app_dir_name(&self, name: &ProjectName) -> Option<String> {
        self.app.as_ref().map(|app| format!("{}{}", name, app.suffix))
    }

    /// External programs the scaffold steps invoke
    pub fn required_tools(&self) -> Vec<&'static str> {
        let mut tools = vec!["sui", "git"];
        if let Some(app) = &self.app {
            tools.push(app.program);
        }
        tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_kept_verbatim() {
        let name = ProjectName::new(" My App ").unwrap();
        assert_eq!(name.as_str(), " My App ");
        assert_eq!(name.to_string(), " My App ");
    }

    #[test]
    fn test_project_name_rejects_empty() {
        assert_eq!(ProjectName::new(""), Err(ProjectNameError::Empty));
    }

    #[test]
    fn test_whitespace_name_accepted_unchanged() {
        let name = ProjectName::new("   ").unwrap();
        assert_eq!(name.as_str(), "   ");
    }

    #[test]
    fn test_layout_table_matches_kind() {
        for kind in ProjectType::ALL {
            assert_eq!(kind.layout().kind, kind);
        }
    }

    #[test]
    fn test_only_smart_contract_installs_toolchain() {
        assert!(ProjectType::SmartContract.layout().installs_toolchain);
        assert!(!ProjectType::FullstackWeb.layout().installs_toolchain);
        assert!(!ProjectType::FullstackMobile.layout().installs_toolchain);
    }

    #[test]
    fn test_directory_names() {
        let name = ProjectName::new("dapp").unwrap();

        let contract = ProjectType::SmartContract.layout();
        assert_eq!(contract.contracts_dir_name(&name), None);
        assert_eq!(contract.app_dir_name(&name), None);
        assert_eq!(contract.sample_dir, "examples");

        let web = ProjectType::FullstackWeb.layout();
        assert_eq!(web.contracts_dir_name(&name).as_deref(), Some("dapp_smart_contracts"));
        assert_eq!(web.app_dir_name(&name).as_deref(), Some("dapp_frontend"));
        assert_eq!(web.sample_dir, "frontend_sample");

        let mobile = ProjectType::FullstackMobile.layout();
        assert_eq!(mobile.contracts_dir_name(&name).as_deref(), Some("dapp_smart_contracts"));
        assert_eq!(mobile.app_dir_name(&name).as_deref(), Some("dapp_mobile"));
        assert_eq!(mobile.sample_dir, "mobile_sample");
    }

    #[test]
    fn test_display_labels() {
        let labels: Vec<_> = ProjectType::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Sui Smart Contract", "Fullstack Web", "Fullstack Mobile"]
        );
    }
}
