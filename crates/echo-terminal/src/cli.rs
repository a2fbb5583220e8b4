//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Echo - a companion app for the terminal
#[derive(Debug, Parser)]
#[command(name = "echo", version)]
#[command(about = "Echo - AI companion mockup for the terminal", long_about = None)]
pub struct Cli {
    /// Subcommand (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file path (overrides the config)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Start with the light palette
    #[arg(long, global = true)]
    pub light: bool,
}

/// Subcommands
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Launch the companion TUI
    Run,
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Subcommand to execute
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_run() {
        let cli = Cli::try_parse_from(["echo"]).unwrap();
        assert_eq!(cli.command(), &Command::Run);
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "echo",
            "-v",
            "--light",
            "-c",
            "custom.toml",
            "init-config",
            "--force",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.light);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.command(), &Command::InitConfig { force: true });
    }
}
