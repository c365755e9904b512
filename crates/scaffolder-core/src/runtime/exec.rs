//! External process execution
//!
//! Every tool the scaffolder drives (package managers, rustup, cargo, git,
//! `sui`, `npx`) goes through the [`CommandRunner`] trait. Commands carry an
//! explicit working directory, so the process-wide current directory is never
//! changed.

use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command as TokioCommand;

/// A program invocation with its arguments and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Run a script through `sh -c` (needed for piped installers)
    pub fn shell(script: impl Into<String>) -> Self {
        Self::new("sh").arg("-c").arg(script)
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// How the child's standard streams are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child shares the terminal (visible installers and generators)
    Inherit,
    /// stdout/stderr are captured into [`CommandOutput`] and kept off the
    /// terminal (presence probes)
    Capture,
}

/// Structured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}", describe_code(.code))]
    Failed { command: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "a signal".to_string(),
    }
}

/// Executes external commands
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion. A non-zero exit is not an error here.
    async fn run(&self, cmd: &CommandSpec, mode: OutputMode) -> Result<CommandOutput, ExecError>;

    /// Run a command and fail on a non-zero exit
    async fn run_checked(
        &self,
        cmd: &CommandSpec,
        mode: OutputMode,
    ) -> Result<CommandOutput, ExecError> {
        let output = self.run(cmd, mode).await?;
        if output.success() {
            Ok(output)
        } else {
            Err(ExecError::Failed {
                command: cmd.to_string(),
                code: output.code,
            })
        }
    }

    /// Presence probe: `<program> --version` with output kept off the terminal.
    /// Returns the trimmed version line when the tool answers successfully.
    async fn probe(&self, program: &str) -> Option<String> {
        let cmd = CommandSpec::new(program).arg("--version");
        match self.run(&cmd, OutputMode::Capture).await {
            Ok(out) if out.success() => Some(out.stdout.trim().to_string()),
            _ => None,
        }
    }
}

/// Runs commands on the host with tokio
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, cmd: &CommandSpec, mode: OutputMode) -> Result<CommandOutput, ExecError> {
        tracing::debug!(command = %cmd, cwd = ?cmd.cwd, ?mode, "running command");

        let mut command = TokioCommand::new(&cmd.program);
        command.args(&cmd.args);
        if let Some(dir) = &cmd.cwd {
            command.current_dir(dir);
        }

        let (stdout, stderr) = match mode {
            OutputMode::Inherit => (Stdio::inherit(), Stdio::inherit()),
            OutputMode::Capture => (Stdio::piped(), Stdio::piped()),
        };
        command.stdin(Stdio::inherit()).stdout(stdout).stderr(stderr);

        let output = command.output().await.map_err(|source| ExecError::Spawn {
            command: cmd.to_string(),
            source,
        })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(command = %cmd, code = ?result.code, "command finished");
        Ok(result)
    }
}
