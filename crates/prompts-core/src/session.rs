//! Sequential driver asking prompts and committing answers
//!
//! For each prompt: resolve the default, ask, sanitize + validate, and
//! re-ask on rejection. Prompts are handled strictly one after another
//! because later defaults read earlier answers.

use crate::answers::{AnswerValue, Answers};
use crate::engine::{resolve_default, validate};
use crate::error::PromptError;
use crate::prompt::{DefaultSource, PromptDefinition, PromptItem};
use anyhow::Result;
use tracing::{debug, warn};

/// Default number of answers a prompt may reject before the session gives up
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Warning used for rejected answers when the prompt declares none
const GENERIC_WARNING: &str = "Invalid value.";

/// Source of answers for a session (a terminal, a script, ...)
pub trait Responder {
    /// Ask `prompt`, offering `default`. An empty response accepts the default.
    fn ask(&mut self, prompt: &PromptDefinition, default: &AnswerValue) -> Result<String>;

    /// Tell the user the last answer to `prompt` was rejected
    fn reject(&mut self, prompt: &PromptDefinition, warning: &str) -> Result<()>;
}

/// Accepts every default without asking (non-interactive mode)
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoResponder;

impl Responder for AutoResponder {
    fn ask(&mut self, _prompt: &PromptDefinition, _default: &AnswerValue) -> Result<String> {
        Ok(String::new())
    }

    fn reject(&mut self, prompt: &PromptDefinition, warning: &str) -> Result<()> {
        anyhow::bail!(
            "Default for '{}' was rejected and cannot be changed non-interactively: {}",
            prompt.name,
            warning
        )
    }
}

/// Answers collected over one scaffolding run
#[derive(Debug)]
pub struct PromptSession {
    answers: Answers,
    max_attempts: usize,
}

impl Default for PromptSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptSession {
    pub fn new() -> Self {
        Self::with_answers(Answers::new())
    }

    /// Start from answers gathered elsewhere (e.g. a template's own data)
    pub fn with_answers(answers: Answers) -> Self {
        Self {
            answers,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn into_answers(self) -> Answers {
        self.answers
    }

    /// Ask every item in order and commit each accepted answer under its prompt name
    pub async fn run<R: Responder>(&mut self, items: Vec<PromptItem>, responder: &mut R) -> Result<()> {
        for item in items {
            let definition = item.into_definition();
            self.ask(&definition, responder).await?;
        }
        Ok(())
    }

    /// Ask a single prompt until it yields a valid answer, then commit it
    pub async fn ask<R: Responder>(
        &mut self,
        definition: &PromptDefinition,
        responder: &mut R,
    ) -> Result<AnswerValue> {
        let resolved = match resolve_default(definition, &self.answers).await {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(prompt = %definition.name, error = %e, "default could not be computed");
                let mut fallback = definition.clone();
                fallback.default = DefaultSource::Constant(AnswerValue::none());
                fallback
            }
        };
        let default = resolved
            .resolved_default()
            .cloned()
            .unwrap_or_else(AnswerValue::none);

        for attempt in 1..=self.max_attempts {
            let response = responder.ask(&resolved, &default)?;
            let candidate = if response.is_empty() {
                default.clone()
            } else {
                AnswerValue::Text(response)
            };

            let outcome = validate(&resolved, candidate, &mut self.answers).await;
            if outcome.valid {
                debug!(prompt = %resolved.name, value = %outcome.value, attempt, "answer accepted");
                self.answers.insert(resolved.name.clone(), outcome.value.clone());
                return Ok(outcome.value);
            }

            debug!(prompt = %resolved.name, value = %outcome.value, attempt, "answer rejected");
            let warning = resolved.warning.as_deref().unwrap_or(GENERIC_WARNING);
            responder.reject(&resolved, warning)?;
        }

        Err(PromptError::Rejected {
            prompt: resolved.name.clone(),
            attempts: self.max_attempts,
        }
        .into())
    }
}
