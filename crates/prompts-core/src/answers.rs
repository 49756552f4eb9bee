//! The shared "answers so far" collected during one scaffolding run

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel used wherever a prompt would otherwise end up without a value
pub const NONE_VALUE: &str = "none";

/// A single resolved answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    List(Vec<String>),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The sentinel "none" value
    pub fn none() -> Self {
        Self::Text(NONE_VALUE.to_string())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// True for empty text. Lists are never considered blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Insertion-ordered answers keyed by field name.
///
/// Fields are only ever added or overwritten during a session, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    fields: IndexMap<String, AnswerValue>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&AnswerValue> {
        self.fields.get(field)
    }

    /// Text value of a field, if present and textual
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(AnswerValue::as_text)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<AnswerValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_display_joins_with_commas() {
        let value = AnswerValue::List(vec!["MIT".to_string(), "Apache-2.0".to_string()]);
        assert_eq!(value.to_string(), "MIT,Apache-2.0");
    }

    #[test]
    fn test_blank_only_for_empty_text() {
        assert!(AnswerValue::text("").is_blank());
        assert!(!AnswerValue::text("x").is_blank());
        assert!(!AnswerValue::List(vec![]).is_blank());
    }

    #[test]
    fn test_insert_overwrites_and_keeps_order() {
        let mut answers = Answers::new();
        answers.insert("name", "demo");
        answers.insert("title", "Demo");
        answers.insert("name", "demo2");

        let keys: Vec<&String> = answers.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "title"]);
        assert_eq!(answers.text("name"), Some("demo2"));
    }

    #[test]
    fn test_serializes_as_plain_mapping() {
        let mut answers = Answers::new();
        answers.insert("name", "demo");
        answers.insert("licenses", vec!["MIT".to_string()]);

        let yaml = serde_yaml::to_string(&answers).unwrap();
        assert_eq!(yaml, "name: demo\nlicenses:\n- MIT\n");
    }
}
