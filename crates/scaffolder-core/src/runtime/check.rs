//! Detection of the external tools a project type drives

use super::exec::CommandRunner;
use crate::project::ProjectLayout;

/// Tool detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// Short label for summaries, e.g. `git (git version 2.43.0)`
    pub fn describe(&self) -> String {
        if self.available {
            format!("{} ({})", self.name, self.version.as_deref().unwrap_or("unknown"))
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

/// Probe a single tool with `--version`
pub async fn check_tool(runner: &dyn CommandRunner, program: &'static str) -> RuntimeInfo {
    match runner.probe(program).await {
        Some(version) => RuntimeInfo {
            name: program,
            version: Some(first_line(&version)),
            available: true,
        },
        None => RuntimeInfo {
            name: program,
            version: None,
            available: false,
        },
    }
}

/// Check every tool the layout's steps invoke. Missing tools are reported,
/// never fatal: the step that needs them fails with the tool's own message.
pub async fn check_runtimes(runner: &dyn CommandRunner, layout: &ProjectLayout) -> Vec<RuntimeInfo> {
    let mut results = Vec::new();
    for program in layout.required_tools() {
        results.push(check_tool(runner, program).await);
    }
    results
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().trim().to_string()
}
