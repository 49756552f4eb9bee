//! Facts about the environment a scaffolding run starts in
//!
//! Captured once at startup so prompt defaults never read process-global
//! state on their own.

use std::path::{Path, PathBuf};

/// Placeholder used when no user name can be determined
pub const UNKNOWN_USER: &str = "???";

/// Working directory and login name for one scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEnv {
    /// Directory the new project is created in
    pub dir: PathBuf,
    /// Value of `USER` or `USERNAME`, if set
    pub user: Option<String>,
}

impl ProjectEnv {
    pub fn new(dir: impl Into<PathBuf>, user: Option<String>) -> Self {
        Self {
            dir: dir.into(),
            user,
        }
    }

    /// Capture the current directory and login name from the process environment
    pub fn from_process() -> std::io::Result<Self> {
        let dir = std::env::current_dir()?;
        Ok(Self::new(dir, login_name()))
    }

    /// Same as [`ProjectEnv::from_process`] but rooted at `dir`
    pub fn for_dir(dir: &Path) -> Self {
        Self::new(dir, login_name())
    }

    /// Final component of the project directory
    pub fn dir_name(&self) -> String {
        self.dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn user_or_unknown(&self) -> &str {
        self.user.as_deref().unwrap_or(UNKNOWN_USER)
    }
}

fn login_name() -> Option<String> {
    std::env::var("USER")
        .ok()
        .or_else(|| std::env::var("USERNAME").ok())
        .filter(|user| !user.is_empty())
}
