//! Charm-style metadata prompts using cliclack

use crate::answers::{AnswerValue, Answers};
use crate::prompt::{PromptDefinition, PromptItem};
use crate::registry::PromptRegistry;
use crate::session::{AutoResponder, PromptSession, Responder};
use anyhow::Result;

/// Options for an interactive prompt run
#[derive(Debug, Clone, Default)]
pub struct AskArgs {
    /// Prompts to ask; empty means every registered prompt
    pub prompts: Vec<PromptItem>,

    /// Accept every default without asking (non-interactive mode)
    pub yes: bool,

    /// Answers known before the first prompt
    pub seed: Answers,
}

/// Asks prompts on the terminal with cliclack inputs
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalResponder;

impl Responder for TerminalResponder {
    fn ask(&mut self, prompt: &PromptDefinition, default: &AnswerValue) -> Result<String> {
        let default = default.to_string();
        let input: String = cliclack::input(&prompt.message)
            .placeholder(&default)
            .default_input(&default)
            .interact()?;
        Ok(input)
    }

    fn reject(&mut self, _prompt: &PromptDefinition, warning: &str) -> Result<()> {
        cliclack::log::warning(warning)?;
        Ok(())
    }
}

/// Run the prompts with interactive terminal input and return the collected answers
pub async fn run(registry: &PromptRegistry, args: AskArgs) -> Result<Answers> {
    cliclack::intro("Package metadata")?;

    let items = if args.prompts.is_empty() {
        registry.expand_all()
    } else {
        registry.expand(&args.prompts)
    };

    let unknown: Vec<&str> = items
        .iter()
        .filter_map(|item| match item {
            PromptItem::Name(name) => Some(name.as_str()),
            PromptItem::Definition(_) => None,
        })
        .collect();
    if !unknown.is_empty() {
        cliclack::log::info(format!("Custom prompts: {}", unknown.join(", ")))?;
    }

    let mut session = PromptSession::with_answers(args.seed);
    if args.yes {
        cliclack::log::info("Accepting all defaults (--yes mode)")?;
        session.run(items, &mut AutoResponder).await?;
    } else {
        session.run(items, &mut TerminalResponder).await?;
    }

    let answers = session.into_answers();
    cliclack::outro(format!("Collected {} answers", answers.len()))?;

    Ok(answers)
}
