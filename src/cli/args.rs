//! Command line argument parsing for the Shabda CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// File the full structural dump of autocomplete results is written to.
pub const DEFAULT_DUMP_FILE: &str = "autocomplete_full_output.json";

/// Shabda - word search and autocomplete over Devanagari documents
#[derive(Parser, Debug, Clone)]
#[command(name = "shabda")]
#[command(about = "Word search and prefix autocomplete over Devanagari documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ShabdaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Index configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SHABDA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ShabdaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find every occurrence of a word
    Search(SearchArgs),

    /// List indexed words starting with a prefix
    Autocomplete(AutocompleteArgs),

    /// Index a folder once and answer queries from a menu
    Interactive(InteractiveArgs),

    /// Print the trie as an indented outline
    Tree(TreeArgs),

    /// Show index statistics
    Stats(StatsArgs),
}

/// Arguments for exact word search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Folder containing the documents to index
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for autocomplete
#[derive(Parser, Debug, Clone)]
pub struct AutocompleteArgs {
    /// Folder containing the documents to index
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// File receiving the full structural dump of every suggestion
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_DUMP_FILE)]
    pub output: PathBuf,
}

/// Arguments for the interactive menu
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Folder containing the documents to index
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// File receiving the full structural dump of autocomplete suggestions
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_DUMP_FILE)]
    pub output: PathBuf,
}

/// Arguments for printing the trie outline
#[derive(Parser, Debug, Clone)]
pub struct TreeArgs {
    /// Folder containing the documents to index
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Folder containing the documents to index
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let args = ShabdaArgs::try_parse_from(["shabda", "search", "docs", "राम"]).unwrap();

        assert_eq!(args.output_format, OutputFormat::Human);
        assert_eq!(args.verbosity(), 1);
        match args.command {
            Command::Search(search) => {
                assert_eq!(search.folder, PathBuf::from("docs"));
                assert_eq!(search.word, "राम");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_autocomplete_default_output() {
        let args =
            ShabdaArgs::try_parse_from(["shabda", "-f", "json", "autocomplete", "docs", "रा"])
                .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Autocomplete(autocomplete) => {
                assert_eq!(autocomplete.output, PathBuf::from(DEFAULT_DUMP_FILE));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = ShabdaArgs::try_parse_from(["shabda", "-vvv", "stats", "docs"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = ShabdaArgs::try_parse_from(["shabda", "-q", "-vv", "stats", "docs"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_missing_argument_is_rejected() {
        assert!(ShabdaArgs::try_parse_from(["shabda", "search", "docs"]).is_err());
    }
}
