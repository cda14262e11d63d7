use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};

/// Command line interface for the application
#[derive(Parser, Debug)]
#[command(name = "agent-bridge", version, about = "Runs multi-agent group conversations and prints them as JSON")]
#[command(subcommand_required = true, arg_required_else_help = false)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "warn"
    #[arg(long, global = true, default_value_t = String::from("warn"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file in the "logs" directory
    #[arg(long, global = true)]
    pub log_file: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Reports whether conversations can run, with the bridge version
    #[command(name = "check_installation", alias = "check-installation")]
    CheckInstallation,

    /// Runs a group conversation opened by QUERY
    #[command(name = "run_conversation", alias = "run-conversation")]
    RunConversation {
        /// Opening message of the conversation
        #[arg(allow_hyphen_values = true)]
        query: String,
        /// Session configuration as a JSON string
        #[arg(allow_hyphen_values = true)]
        session_config_json: String,
    },
}

/// Errors in how the bridge was invoked
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum UsageError {
    #[error("missing command argument")]
    MissingCommand,
    #[error("missing query and session config arguments")]
    MissingArguments,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("{0}")]
    Invalid(String),
}

impl From<&clap::Error> for UsageError {
    fn from(err: &clap::Error) -> Self {
        match err.kind() {
            ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                UsageError::MissingCommand
            }
            ErrorKind::MissingRequiredArgument => UsageError::MissingArguments,
            ErrorKind::InvalidSubcommand => match err.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => UsageError::UnknownCommand(name.clone()),
                _ => UsageError::UnknownCommand(String::new()),
            },
            _ => {
                let rendered = err.to_string();
                let first_line = rendered.lines().next().unwrap_or_default();
                UsageError::Invalid(first_line.trim_start_matches("error: ").to_string())
            }
        }
    }
}

/// Whether clap wants to print help or version text rather than an error
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage_error(args: &[&str]) -> UsageError {
        let err = Cli::try_parse_from(args).unwrap_err();
        UsageError::from(&err)
    }

    #[test]
    fn test_parse_check_installation() {
        let cli = Cli::try_parse_from(["agent-bridge", "check_installation"]).unwrap();
        assert_eq!(cli.command, Command::CheckInstallation);
        assert_eq!(cli.logging_level, "warn");
        assert!(!cli.log_file);
    }

    #[test]
    fn test_parse_run_conversation_with_global_flags() {
        let cli = Cli::try_parse_from([
            "agent-bridge",
            "run_conversation",
            "hello",
            "{\"id\": \"s\"}",
            "--logging-level",
            "debug",
            "--log-file",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::RunConversation {
                query: "hello".to_string(),
                session_config_json: "{\"id\": \"s\"}".to_string(),
            }
        );
        assert_eq!(cli.logging_level, "debug");
        assert!(cli.log_file);
    }

    #[test]
    fn test_query_may_start_with_hyphens() {
        for query in ["-5 degrees outside, what to wear?", "--verbose please"] {
            let cli = Cli::try_parse_from(["agent-bridge", "run_conversation", query, "{}"])
                .unwrap();
            assert_eq!(
                cli.command,
                Command::RunConversation {
                    query: query.to_string(),
                    session_config_json: "{}".to_string(),
                }
            );
        }
    }

    #[test]
    fn test_no_arguments_is_missing_command() {
        assert_eq!(usage_error(&["agent-bridge"]), UsageError::MissingCommand);
        assert_eq!(
            UsageError::MissingCommand.to_string(),
            "missing command argument"
        );
    }

    #[test]
    fn test_run_conversation_requires_both_arguments() {
        assert_eq!(
            usage_error(&["agent-bridge", "run_conversation", "hello"]),
            UsageError::MissingArguments
        );
        assert_eq!(
            usage_error(&["agent-bridge", "run_conversation"]),
            UsageError::MissingArguments
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            usage_error(&["agent-bridge", "dance"]),
            UsageError::UnknownCommand("dance".to_string())
        );
    }

    #[test]
    fn test_help_is_informational() {
        let err = Cli::try_parse_from(["agent-bridge", "--help"]).unwrap_err();
        assert!(is_informational(&err));
    }
}
