//! Prompt definitions: the question, its default source, validator and sanitizer

use crate::answers::{AnswerValue, Answers};
use crate::error::Result;
use async_trait::async_trait;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Computes a prompt default at run time from the answers collected so far
#[async_trait]
pub trait DefaultProvider: Send + Sync {
    /// `name` is the prompt being resolved. `Ok(None)` means "no default".
    async fn provide(&self, name: &str, answers: &Answers) -> Result<Option<AnswerValue>>;
}

/// Outcome of a sanitizer run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sanitized {
    /// Keep the candidate as entered
    Unchanged,
    /// Use this value instead of the candidate
    Replaced(AnswerValue),
}

/// Post-processes a candidate answer, optionally recording derived fields
#[async_trait]
pub trait Sanitizer: Send + Sync {
    async fn sanitize(&self, value: &AnswerValue, answers: &mut Answers) -> Sanitized;
}

/// Adapter turning a synchronous closure into a [`DefaultProvider`]
pub struct FnDefault<F>(pub F);

#[async_trait]
impl<F> DefaultProvider for FnDefault<F>
where
    F: Fn(&Answers) -> Option<AnswerValue> + Send + Sync,
{
    async fn provide(&self, _name: &str, answers: &Answers) -> Result<Option<AnswerValue>> {
        Ok((self.0)(answers))
    }
}

/// Adapter turning a synchronous closure into a [`Sanitizer`]
pub struct FnSanitizer<F>(pub F);

#[async_trait]
impl<F> Sanitizer for FnSanitizer<F>
where
    F: Fn(&AnswerValue, &mut Answers) -> Sanitized + Send + Sync,
{
    async fn sanitize(&self, value: &AnswerValue, answers: &mut Answers) -> Sanitized {
        (self.0)(value, answers)
    }
}

/// Where a prompt's default comes from
#[derive(Clone)]
pub enum DefaultSource {
    Constant(AnswerValue),
    Computed(Arc<dyn DefaultProvider>),
}

impl fmt::Debug for DefaultSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

pub type Predicate = Arc<dyn Fn(&AnswerValue) -> bool + Send + Sync>;

/// Acceptance rule for a candidate answer
#[derive(Clone)]
pub enum Validator {
    Predicate(Predicate),
    /// Matched against the value's string form
    Pattern(Regex),
}

impl Validator {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&AnswerValue) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    pub fn accepts(&self, value: &AnswerValue) -> bool {
        match self {
            Self::Predicate(f) => f(value),
            Self::Pattern(re) => re.is_match(&value.to_string()),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
        }
    }
}

/// One question asked while collecting package metadata
#[derive(Clone)]
pub struct PromptDefinition {
    pub name: String,
    pub message: String,
    pub default: DefaultSource,
    pub validator: Option<Validator>,
    pub sanitizer: Option<Arc<dyn Sanitizer>>,
    /// Shown by the driver when a candidate is rejected
    pub warning: Option<String>,
}

impl PromptDefinition {
    /// A prompt with the "none" default and no validator or sanitizer
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            default: DefaultSource::Constant(AnswerValue::none()),
            validator: None,
            sanitizer: None,
            warning: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<AnswerValue>) -> Self {
        self.default = DefaultSource::Constant(value.into());
        self
    }

    pub fn with_provider(mut self, provider: impl DefaultProvider + 'static) -> Self {
        self.default = DefaultSource::Computed(Arc::new(provider));
        self
    }

    /// Shorthand for a synchronous computed default
    pub fn with_default_fn<F>(self, f: F) -> Self
    where
        F: Fn(&Answers) -> Option<AnswerValue> + Send + Sync + 'static,
    {
        self.with_provider(FnDefault(f))
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_sanitizer(mut self, sanitizer: impl Sanitizer + 'static) -> Self {
        self.sanitizer = Some(Arc::new(sanitizer));
        self
    }

    /// Shorthand for a synchronous sanitizer
    pub fn with_sanitize_fn<F>(self, f: F) -> Self
    where
        F: Fn(&AnswerValue, &mut Answers) -> Sanitized + Send + Sync + 'static,
    {
        self.with_sanitizer(FnSanitizer(f))
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    /// The default as a concrete value, if it has been resolved (or is constant)
    pub fn resolved_default(&self) -> Option<&AnswerValue> {
        match &self.default {
            DefaultSource::Constant(value) => Some(value),
            DefaultSource::Computed(_) => None,
        }
    }
}

impl fmt::Debug for PromptDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptDefinition")
            .field("name", &self.name)
            .field("message", &self.message)
            .field("default", &self.default)
            .field("validator", &self.validator)
            .field("sanitizer", &self.sanitizer.as_ref().map(|_| ".."))
            .field("warning", &self.warning)
            .finish()
    }
}

/// A requested prompt: either a name to look up or a complete definition
#[derive(Debug, Clone)]
pub enum PromptItem {
    Name(String),
    Definition(PromptDefinition),
}

impl PromptItem {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Definition(def) => &def.name,
        }
    }

    /// Turn the item into a definition. A bare name becomes a plain text
    /// prompt that uses the name as its message.
    pub fn into_definition(self) -> PromptDefinition {
        match self {
            Self::Name(name) => PromptDefinition::new(name.clone(), name),
            Self::Definition(def) => def,
        }
    }
}

impl From<&str> for PromptItem {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for PromptItem {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<PromptDefinition> for PromptItem {
    fn from(def: PromptDefinition) -> Self {
        Self::Definition(def)
    }
}
