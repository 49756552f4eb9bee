//! Error types for prompt resolution and its collaborators

use thiserror::Error;

/// Errors surfaced by default providers, git queries and configuration loading.
///
/// A candidate failing its validator is not an error; see [`crate::engine::Validation`].
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Default for prompt '{prompt}' could not be computed: {message}")]
    Provider { prompt: String, message: String },

    #[error("Command `{command}` failed: {message}")]
    Command { command: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Prompt '{prompt}' rejected {attempts} answers in a row")]
    Rejected { prompt: String, attempts: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid validator pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PromptError {
    /// Wrap any displayable failure as a provider error for `prompt`
    pub fn provider(prompt: &str, message: impl std::fmt::Display) -> Self {
        Self::Provider {
            prompt: prompt.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PromptError>;
