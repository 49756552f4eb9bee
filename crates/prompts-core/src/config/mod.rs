//! Configuration file utilities

pub mod prompts_file;

pub use prompts_file::{CustomPrompt, PromptEntry, PromptsConfig, LICENSES_DIR_ENV};
