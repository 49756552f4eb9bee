//! Named prompt definitions and expansion of requested prompt lists

use crate::prompt::{PromptDefinition, PromptItem};
use indexmap::IndexMap;

/// Fixed mapping from prompt name to definition.
///
/// Built once at startup and passed by reference to whatever drives the prompts.
#[derive(Debug, Clone, Default)]
pub struct PromptRegistry {
    prompts: IndexMap<String, PromptDefinition>,
}

impl PromptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under its own name, replacing any earlier one
    pub fn register(&mut self, definition: PromptDefinition) {
        self.prompts.insert(definition.name.clone(), definition);
    }

    pub fn get(&self, name: &str) -> Option<&PromptDefinition> {
        self.prompts.get(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.prompts.keys().map(String::as_str)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &PromptDefinition> {
        self.prompts.values()
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Replace known names with their registered definitions.
    ///
    /// Order and length are preserved. Names with no registered definition,
    /// and items that are already definitions, are returned unchanged so
    /// callers can mix custom prompts into the built-in ones.
    pub fn expand(&self, requested: &[PromptItem]) -> Vec<PromptItem> {
        requested
            .iter()
            .map(|item| match item {
                PromptItem::Name(name) => match self.prompts.get(name) {
                    Some(definition) => {
                        let mut definition = definition.clone();
                        definition.name = name.clone();
                        PromptItem::Definition(definition)
                    }
                    None => item.clone(),
                },
                PromptItem::Definition(_) => item.clone(),
            })
            .collect()
    }

    /// Expand every registered prompt, in registration order
    pub fn expand_all(&self) -> Vec<PromptItem> {
        let names: Vec<PromptItem> = self.names().map(PromptItem::from).collect();
        self.expand(&names)
    }
}
