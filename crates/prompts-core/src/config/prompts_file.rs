//! YAML file declaring which prompts to ask, including custom ones
//!
//! ```yaml
//! prompts:
//!   - name
//!   - name: codename
//!     message: Release codename
//!     default: aurora
//!     pattern: "^[a-z]+$"
//!     warning: Lowercase letters only.
//! licenses_dir: ./licenses
//! ```

use crate::error::{PromptError, Result};
use crate::licenses::LicenseCatalog;
use crate::prompt::{PromptDefinition, PromptItem, Validator};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the license directory
pub const LICENSES_DIR_ENV: &str = "INIT_PROMPTS_LICENSES_DIR";

/// Contents of a prompts configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptsConfig {
    /// Prompts to ask, in order. Empty means "every built-in prompt".
    #[serde(default)]
    pub prompts: Vec<PromptEntry>,

    /// Directory of `LICENSE-<id>` files replacing the built-in license list
    #[serde(default)]
    pub licenses_dir: Option<PathBuf>,
}

/// A bare prompt name or a custom prompt declared inline
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PromptEntry {
    Name(String),
    Custom(CustomPrompt),
}

/// A prompt declared in configuration rather than in code
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomPrompt {
    pub name: String,

    /// Question text (defaults to the name)
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub default: Option<String>,

    /// Regular expression the answer must match
    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub warning: Option<String>,
}

impl CustomPrompt {
    pub fn to_definition(&self) -> Result<PromptDefinition> {
        if self.name.trim().is_empty() {
            return Err(PromptError::Config("custom prompt without a name".to_string()));
        }

        let message = self.message.clone().unwrap_or_else(|| self.name.clone());
        let mut definition = PromptDefinition::new(self.name.clone(), message);
        if let Some(default) = &self.default {
            definition = definition.with_default(default.as_str());
        }
        if let Some(pattern) = &self.pattern {
            definition = definition.with_validator(Validator::pattern(pattern)?);
        }
        if let Some(warning) = &self.warning {
            definition = definition.with_warning(warning.as_str());
        }
        Ok(definition)
    }
}

impl PromptsConfig {
    /// Load and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;

        // Relative license directories are relative to the config file
        if let (Some(dir), Some(base)) = (&config.licenses_dir, path.parent()) {
            if dir.is_relative() {
                config.licenses_dir = Some(base.join(dir));
            }
        }
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// The configured prompts as registry input
    pub fn items(&self) -> Result<Vec<PromptItem>> {
        self.prompts
            .iter()
            .map(|entry| match entry {
                PromptEntry::Name(name) => Ok(PromptItem::Name(name.clone())),
                PromptEntry::Custom(custom) => custom.to_definition().map(PromptItem::Definition),
            })
            .collect()
    }

    /// License directory by precedence: `explicit`, then the config file,
    /// then [`LICENSES_DIR_ENV`]
    pub fn licenses_dir(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.licenses_dir.clone())
            .or_else(|| std::env::var_os(LICENSES_DIR_ENV).map(PathBuf::from))
    }

    /// Build the license catalog, falling back to the built-in list
    pub fn license_catalog(&self, explicit: Option<&Path>) -> Result<LicenseCatalog> {
        match self.licenses_dir(explicit) {
            Some(dir) => LicenseCatalog::from_dir(&dir),
            None => Ok(LicenseCatalog::builtin()),
        }
    }
}
