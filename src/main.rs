//! Main entry point for the application.
//!
//! This module parses the command line, initializes logging, loads
//! environment variables and dispatches to one of the two operations:
//! - `check_installation` reports whether conversations can run
//! - `run_conversation` runs a group chat and prints its transcript
//!
//! Every invocation prints exactly one JSON object on stdout. Usage errors
//! exit with status 1; conversation failures are reported in the JSON body
//! and exit with status 0.

mod agents;
mod bridge;
mod chat;
mod cli;
mod config;
mod constants;
mod errors;
mod llm;
#[cfg(test)]
mod test_support;
mod utils;

use agents::{detect_human_input, AgentFactory};
use bridge::{print_json, ConversationRunner, UsageErrorBody};
use clap::Parser;
use cli::{Command, UsageError};
use llm::ProviderRegistry;
use tracing::debug;

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments, reporting usage errors as JSON
/// 2. Initialize logging system
/// 3. Load environment variables
/// 4. Run the requested command
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if cli::is_informational(&e) => e.exit(),
        Err(e) => {
            let usage = UsageError::from(&e);
            print_json(&UsageErrorBody {
                error: usage.to_string(),
            });
            std::process::exit(1);
        }
    };
    utils::init_logging(&cli.logging_level, cli.log_file);

    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let registry = ProviderRegistry::with_default_providers();

    match cli.command {
        Command::CheckInstallation => {
            print_json(&bridge::check_installation(&registry));
        }
        Command::RunConversation {
            query,
            session_config_json,
        } => {
            let progress = bridge::progress_spinner();
            let factory = AgentFactory::new(registry, detect_human_input(progress.clone()));
            let runner = ConversationRunner::new(factory, progress);
            let result = runner.run_conversation(&query, &session_config_json).await;
            print_json(&result);
        }
    }
}
