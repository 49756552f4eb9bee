//! Prompt resolution: default computation, sanitization and validation
//!
//! Both operations act on a single definition and the shared answers of the
//! current session. They never log and never retry; re-asking on an invalid
//! answer is left to the driver (see [`crate::session`]).

use crate::answers::{AnswerValue, Answers};
use crate::error::Result;
use crate::prompt::{DefaultSource, PromptDefinition, Sanitized};

/// Result of a single sanitize + validate pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    /// The sanitized value. Use this rather than the original candidate,
    /// whether or not it was accepted.
    pub value: AnswerValue,
}

/// Compute the concrete default for `definition`.
///
/// Returns a copy of the definition whose `default` is a constant; every
/// other field is carried over untouched. An absent or empty computed value
/// becomes the `"none"` sentinel. Provider errors are returned as-is.
pub async fn resolve_default(
    definition: &PromptDefinition,
    answers: &Answers,
) -> Result<PromptDefinition> {
    let computed = match &definition.default {
        DefaultSource::Constant(value) => Some(value.clone()),
        DefaultSource::Computed(provider) => provider.provide(&definition.name, answers).await?,
    };

    let value = match computed {
        Some(value) if !value.is_blank() => value,
        _ => AnswerValue::none(),
    };

    let mut resolved = definition.clone();
    resolved.default = DefaultSource::Constant(value);
    Ok(resolved)
}

/// Sanitize `candidate` then check it against the definition's validator.
///
/// The sanitizer may record derived fields in `answers` even when the
/// value ends up rejected.
pub async fn validate(
    definition: &PromptDefinition,
    candidate: AnswerValue,
    answers: &mut Answers,
) -> Validation {
    let sanitized = match &definition.sanitizer {
        Some(sanitizer) => sanitizer.sanitize(&candidate, answers).await,
        None => Sanitized::Unchanged,
    };
    let value = match sanitized {
        Sanitized::Unchanged => candidate,
        Sanitized::Replaced(replacement) => replacement,
    };

    let valid = definition
        .validator
        .as_ref()
        .map_or(true, |validator| validator.accepts(&value));

    Validation { valid, value }
}
