//! SoftSell Control - CLI client for the SoftSell demo assistant
//!
//! Chat with the scripted responder, ask one-shot questions, or inspect
//! the rule table it answers from.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use softsellctl::{commands, repl};

#[derive(Parser)]
#[command(name = "softsellctl")]
#[command(about = "SoftSell Assistant - scripted license-resale helper", long_about = None)]
#[command(version)]
struct Cli {
    /// Load rules from a TOML file instead of the builtin table
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session (default)
    Chat,

    /// Ask a single question and print the answer
    Ask {
        /// The question to ask
        question: String,

        /// Emit machine-readable JSON instead of styled text
        #[arg(long)]
        json: bool,
    },

    /// List the suggested example questions
    Suggestions,

    /// Show the loaded rule table
    Rules,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let rules_path = cli.rules.as_deref();

    match cli.command {
        None | Some(Commands::Chat) => repl::start_chat(rules_path),
        Some(Commands::Ask { question, json }) => commands::ask(&question, json, rules_path),
        Some(Commands::Suggestions) => commands::suggestions(),
        Some(Commands::Rules) => commands::rules(rules_path),
    }
}
