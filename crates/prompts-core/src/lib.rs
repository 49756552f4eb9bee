//! Prompts Core - package metadata prompts for project scaffolding
//!
//! This library supplies the questions a scaffolding tool asks when creating
//! a new package (name, version, repository, licenses, author, ...) and the
//! small engine that resolves their defaults and checks their answers.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Resolution** - `resolve_default` and `validate` over a single
//!   `PromptDefinition` and the shared `Answers`
//! - **Layer 2: Catalog** - `PromptRegistry` with the built-in prompts and the
//!   collaborators they query (git, license catalog)
//! - **Layer 3: Driving** - `PromptSession` asking prompts in order through a
//!   `Responder`, plus optional cliclack-based terminal prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based terminal responder
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use prompts_core::{engine, Answers, GitCli, LicenseCatalog, ProjectEnv, PromptRegistry};
//! use std::sync::Arc;
//!
//! let env = Arc::new(ProjectEnv::from_process()?);
//! let git = Arc::new(GitCli::new(&env.dir));
//! let registry = PromptRegistry::builtin(env, git, &LicenseCatalog::builtin());
//!
//! let mut answers = Answers::new();
//! for item in registry.expand(&["name".into(), "title".into()]) {
//!     let def = engine::resolve_default(&item.into_definition(), &answers).await?;
//!     let value = def.resolved_default().cloned().unwrap();
//!     let outcome = engine::validate(&def, value, &mut answers).await;
//!     answers.insert(def.name.clone(), outcome.value);
//! }
//! ```

pub mod answers;
pub mod builtin;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod licenses;
pub mod prompt;
pub mod registry;
pub mod session;
pub mod vcs;
pub mod version;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{AnswerValue, Answers, NONE_VALUE};
pub use config::PromptsConfig;
pub use context::ProjectEnv;
pub use engine::{resolve_default, validate, Validation};
pub use error::PromptError;
pub use licenses::LicenseCatalog;
pub use prompt::{
    DefaultProvider, DefaultSource, PromptDefinition, PromptItem, Sanitized, Sanitizer, Validator,
};
pub use registry::PromptRegistry;
pub use session::{AutoResponder, PromptSession, Responder};
pub use vcs::{github_url, GitCli, GitQuery};

#[cfg(feature = "tui")]
pub use tui::run;
