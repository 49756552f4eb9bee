//! init-prompts CLI - Collect package metadata for a new project

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use prompts_core::tui::AskArgs;
use prompts_core::{
    GitCli, LicenseCatalog, ProjectEnv, PromptItem, PromptRegistry, PromptsConfig,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "init-prompts")]
#[command(about = "CLI for collecting package metadata through scaffolding prompts")]
#[command(version)]
pub struct Args {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask prompts and print the answers as YAML
    Ask(CliAskArgs),
    /// List the built-in prompts
    List,
    /// List the available license identifiers
    Licenses(LicensesArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliAskArgs {
    /// Prompts to ask (comma-separated, e.g. name,version,licenses); defaults to all
    #[arg(value_delimiter = ',')]
    pub prompts: Vec<String>,

    /// YAML file declaring prompts and custom prompt definitions
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project directory (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Directory of LICENSE-<id> files
    #[arg(long = "licenses-dir")]
    pub licenses_dir: Option<PathBuf>,

    /// Accept every default (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Parser, Debug)]
pub struct LicensesArgs {
    /// Directory of LICENSE-<id> files
    #[arg(long = "licenses-dir")]
    pub licenses_dir: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}

fn project_env(directory: Option<&Path>) -> Result<ProjectEnv> {
    match directory {
        Some(dir) => {
            let dir = if dir.is_absolute() {
                dir.to_path_buf()
            } else {
                std::env::current_dir()?.join(dir)
            };
            if !dir.is_dir() {
                anyhow::bail!("Project directory does not exist: {}", dir.display());
            }
            Ok(ProjectEnv::for_dir(&dir))
        }
        None => ProjectEnv::from_process().context("Failed to read current directory"),
    }
}

fn build_registry(env: ProjectEnv, licenses: &LicenseCatalog) -> PromptRegistry {
    let git = Arc::new(GitCli::new(env.dir.clone()));
    PromptRegistry::builtin(Arc::new(env), git, licenses)
}

async fn ask(args: CliAskArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => PromptsConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PromptsConfig::default(),
    };
    let licenses = config.license_catalog(args.licenses_dir.as_deref())?;
    let env = project_env(args.directory.as_deref())?;
    info!(dir = %env.dir.display(), "collecting package metadata");

    let mut registry = build_registry(env, &licenses);
    let configured = config.items()?;

    // Custom prompts from the config file are addressable by name too
    for item in &configured {
        if let PromptItem::Definition(def) = item {
            debug!(prompt = %def.name, "registering custom prompt");
            registry.register(def.clone());
        }
    }

    let prompts: Vec<PromptItem> = if args.prompts.is_empty() {
        configured
    } else {
        args.prompts.into_iter().map(PromptItem::Name).collect()
    };

    let answers = prompts_core::run(
        &registry,
        AskArgs {
            prompts,
            yes: args.yes,
            ..AskArgs::default()
        },
    )
    .await?;

    print!("{}", serde_yaml::to_string(&answers)?);
    Ok(())
}

fn list() -> Result<()> {
    let env = project_env(None)?;
    let registry = build_registry(env, &LicenseCatalog::builtin());

    println!("{}", "Built-in prompts".cyan().bold());
    println!();
    for def in registry.definitions() {
        println!("  {} {}", format!("{:<16}", def.name).green(), def.message.dimmed());
    }
    Ok(())
}

fn licenses(args: LicensesArgs) -> Result<()> {
    let catalog = PromptsConfig::default().license_catalog(args.licenses_dir.as_deref())?;
    for id in catalog.ids() {
        match catalog.license_path(id) {
            Some(path) => println!("{} {}", id, path.display().to_string().dimmed()),
            None => println!("{}", id),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Some(Command::Ask(ask_args)) => {
            let result = ask(ask_args).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::List) => list(),
        Some(Command::Licenses(license_args)) => licenses(license_args),
        None => {
            // No subcommand provided, ask every built-in prompt interactively
            let result = ask(CliAskArgs::default()).await;
            let _ = console::Term::stderr().show_cursor();
            result
        }
    }
}
