use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputLayout;

#[derive(Parser)]
#[command(name = "push-converter")]
#[command(about = "Convert Excel push-notification sheets into per-category JSON files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file (without extension works too)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the Telegram bot
    Bot,

    /// Convert a sheet and write one JSON file per category
    Convert {
        /// Excel file to convert (.xlsx, .xls)
        file: PathBuf,

        /// Directory for the JSON files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Output layout; defaults to the configured one
        #[arg(short, long, value_enum)]
        layout: Option<OutputLayout>,

        /// Print the first category document
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a sheet without writing anything
    Check {
        /// Excel file to validate
        file: PathBuf,
    },

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = "config/default.toml")]
        path: PathBuf,

        /// Overwrite without asking
        #[arg(short, long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::parse_from([
            "push-converter",
            "convert",
            "push.xlsx",
            "--out-dir",
            "out",
            "--layout",
            "pushes",
        ]);
        match cli.command {
            Commands::Convert { file, out_dir, layout, verbose } => {
                assert_eq!(file, PathBuf::from("push.xlsx"));
                assert_eq!(out_dir, PathBuf::from("out"));
                assert_eq!(layout, Some(OutputLayout::Pushes));
                assert!(!verbose);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["push-converter", "check", "a.xlsx", "--config", "prod.toml"]);
        assert_eq!(cli.config.as_deref(), Some("prod.toml"));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
