//! Semantic version parsing for the `version` prompt

use crate::error::{PromptError, Result};
use semver::Version;

/// Version offered when no usable git tag exists
pub const FALLBACK_VERSION: &str = "0.1.0";

/// Parse version string, tolerating a leading 'v' and surrounding whitespace
pub fn parse_version(version_str: &str) -> Result<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned)
        .map_err(|e| PromptError::Config(format!("Invalid version '{}': {}", version_str, e)))
}

pub fn is_valid_version(version_str: &str) -> bool {
    parse_version(version_str).is_ok()
}

/// Extract a release version from `git describe --tags` output.
///
/// `v1.2.0-3-gabc123` yields `1.2.0`; anything unparsable yields `None`.
pub fn version_from_describe(describe: &str) -> Option<String> {
    let tag = describe.split('-').next()?;
    parse_version(tag).ok().map(|v| v.to_string())
}
