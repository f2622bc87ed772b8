//! CLI argument definitions using clap
//!
//! Commands:
//! - fieldschema init --schema <path>
//! - fieldschema describe --schema <path> [--level N] [--spaces N]
//! - fieldschema lookup --schema <path> --name <field>
//! - fieldschema check --schema <path> --values <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fieldschema - inspect name-indexed schemas of typed user fields
#[derive(Parser, Debug)]
#[command(name = "fieldschema")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write an empty schema file
    Init {
        /// Path of the schema file to create
        #[arg(long)]
        schema: PathBuf,
    },

    /// Print a schema in human-readable form
    Describe {
        /// Path to schema file
        #[arg(long)]
        schema: PathBuf,

        /// Initial indentation level; negative skips the first indent
        #[arg(long, allow_negative_numbers = true)]
        level: Option<i32>,

        /// Spaces per level; negative prints a single line
        #[arg(long, allow_negative_numbers = true)]
        spaces: Option<i32>,
    },

    /// Look up the index and type of a field
    Lookup {
        /// Path to schema file
        #[arg(long)]
        schema: PathBuf,

        /// Field name
        #[arg(long)]
        name: String,
    },

    /// Check a values file against a schema
    Check {
        /// Path to schema file
        #[arg(long)]
        schema: PathBuf,

        /// Path to values file
        #[arg(long)]
        values: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_describe_with_negative_numbers() {
        let cli = Cli::try_parse_from([
            "fieldschema",
            "describe",
            "--schema",
            "s.json",
            "--level",
            "-1",
            "--spaces",
            "-1",
        ])
        .unwrap();

        match cli.command {
            Command::Describe { level, spaces, .. } => {
                assert_eq!(level, Some(-1));
                assert_eq!(spaces, Some(-1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from([
            "fieldschema",
            "lookup",
            "--schema",
            "s.json",
            "--name",
            "age",
            "--config",
            "c.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
    }
}
