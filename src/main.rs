//! Skillrouter CLI
//!
//! The demo/driver surface: loads the catalog once at startup, then
//! resolves canned or user-supplied prompts and optionally executes the
//! resolved command.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, EnvFilter};

use skillrouter::catalog::loader::load_catalog;
use skillrouter::config::{load_config, resolve_path};
use skillrouter::exec::run_command;
use skillrouter::resolver::intent::resolve;
use skillrouter::resolver::reasoning::HttpReasoningClient;
use skillrouter::types::{ReasoningClient, Skill};

const VERSION: &str = "0.1.0";

/// Canned prompts for the demonstration loop.
const DEMO_PROMPTS: &[&str] = &[
    "Search for \"project\" in Obsidian",
    "Create a new note called \"Meeting Notes\"",
    "Where is my default vault?",
    "What's the weather like today?",
];

/// Skillrouter -- skill catalog and intent resolution
#[derive(Parser, Debug)]
#[command(
    name = "skillrouter",
    version = VERSION,
    about = "Routes free-text requests to skill documents and concrete commands"
)]
struct Cli {
    /// Run the canned demonstration prompts
    #[arg(long)]
    demo: bool,

    /// Resolve a single prompt
    #[arg(long)]
    prompt: Option<String>,

    /// List the loaded skill catalog
    #[arg(long)]
    list: bool,

    /// Execute the resolved command after printing it
    #[arg(long)]
    execute: bool,

    /// Override the skill catalog directory
    #[arg(long)]
    skills_dir: Option<String>,
}

// ---- Catalog Listing --------------------------------------------------------

fn show_catalog(catalog: &[Skill]) {
    if catalog.is_empty() {
        println!("Catalog is empty.");
        return;
    }

    for skill in catalog {
        println!(
            "{}  {}",
            skill.metadata.name.bold(),
            skill.metadata.description
        );
        println!("  path: {}", skill.path.dimmed());
        for command in &skill.commands {
            println!("  {}", command.green());
        }
    }
}

// ---- Resolution -------------------------------------------------------------

async fn resolve_and_report(
    prompt: &str,
    catalog: &[Skill],
    reasoning: Option<&dyn ReasoningClient>,
    execute: bool,
) -> Result<()> {
    println!("\n{} {}", ">".cyan().bold(), prompt.bold());

    let resolution = resolve(prompt, catalog, reasoning).await;

    println!("  skill:     {}", resolution.skill_name.yellow());
    println!("  command:   {}", resolution.command.green());
    println!("  rationale: {}", resolution.rationale.dimmed());

    if execute {
        let outcome = run_command(&resolution.command)?;
        if !outcome.stdout.is_empty() {
            print!("{}", outcome.stdout);
        }
        if !outcome.stderr.is_empty() {
            eprint!("{}", outcome.stderr.red());
        }
        println!("  exit: {}", outcome.exit_code);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    if !cli.demo && !cli.list && cli.prompt.is_none() {
        println!("Run \"skillrouter --demo\" for the demonstration loop.");
        println!("Run \"skillrouter --prompt <TEXT>\" to resolve a single request.");
        println!("Run \"skillrouter --help\" for usage information.");
        return Ok(());
    }

    let now = chrono::Utc::now().to_rfc3339();
    println!("[{}] skillrouter v{}", now, VERSION);

    let mut config = load_config();
    if let Some(dir) = cli.skills_dir {
        config.skills_dir = dir;
    }

    let skills_dir = resolve_path(&config.skills_dir);
    let catalog = load_catalog(Path::new(&skills_dir), &config.command_prefixes);
    println!("Loaded {} skill(s) from {}", catalog.len(), skills_dir);

    if cli.list {
        show_catalog(&catalog);
        return Ok(());
    }

    // The reasoning service is optional: without an API key the resolver
    // goes straight to the rule-based matcher.
    let reasoning: Option<HttpReasoningClient> = if config.reasoning_api_key.is_empty() {
        None
    } else {
        Some(HttpReasoningClient::new(
            config.reasoning_api_url.clone(),
            config.reasoning_api_key.clone(),
            config.reasoning_model.clone(),
            config.request_timeout_secs,
        )?)
    };
    let reasoning_ref = reasoning.as_ref().map(|c| c as &dyn ReasoningClient);

    if let Some(prompt) = cli.prompt {
        resolve_and_report(&prompt, &catalog, reasoning_ref, cli.execute).await?;
        return Ok(());
    }

    // --demo: iterate the canned prompts.
    for prompt in DEMO_PROMPTS {
        resolve_and_report(prompt, &catalog, reasoning_ref, cli.execute).await?;
    }

    Ok(())
}

// ---- Entry Point -----------------------------------------------------------

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Fatal: {}", e);
        std::process::exit(1);
    }
}
