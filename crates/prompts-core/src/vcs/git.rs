//! Git metadata queries backed by the `git` binary

use crate::error::{PromptError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command as TokioCommand;
use tracing::debug;

/// The narrow, read-only view of git that built-in prompts rely on
#[async_trait]
pub trait GitQuery: Send + Sync {
    /// URL of the `origin` remote
    async fn origin(&self) -> Result<String>;

    /// Value of a git config key, trimmed
    async fn config_get(&self, key: &str) -> Result<String>;

    /// Output of `git describe --tags`, trimmed
    async fn describe_tags(&self) -> Result<String>;
}

/// Runs `git` in a working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run git with `args` and return its stdout.
    /// A non-zero exit status is reported as a command failure with stderr attached.
    async fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        debug!(%command, workdir = %self.workdir.display(), "running git");

        let output = TokioCommand::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .await
            .map_err(|e| PromptError::Command {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(%command, code = ?output.status.code(), %stderr, "git exited with failure");
            return Err(PromptError::Command {
                command,
                message: if stderr.is_empty() {
                    format!("exit code {}", output.status.code().unwrap_or(-1))
                } else {
                    stderr
                },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[async_trait]
impl GitQuery for GitCli {
    async fn origin(&self) -> Result<String> {
        let remotes = self
            .run(&["remote", "-v"])
            .await
            .map_err(|e| PromptError::NotFound(format!("git origin ({})", e)))?;
        parse_remote_origin(&remotes).ok_or_else(|| PromptError::NotFound("git origin".to_string()))
    }

    async fn config_get(&self, key: &str) -> Result<String> {
        Ok(self.run(&["config", "--get", key]).await?.trim().to_string())
    }

    async fn describe_tags(&self) -> Result<String> {
        Ok(self.run(&["describe", "--tags"]).await?.trim().to_string())
    }
}

/// URL of the first `origin` line in `git remote -v` output
pub fn parse_remote_origin(remotes: &str) -> Option<String> {
    remotes
        .lines()
        .find(|line| {
            line.strip_prefix("origin")
                .is_some_and(|rest| rest.starts_with(char::is_whitespace))
        })
        .and_then(|line| line.split_whitespace().nth(1))
        .map(String::from)
}
