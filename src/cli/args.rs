//! Command line argument parsing for the Xiphos CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::distance::Algorithm;
use crate::ranker::DEFAULT_MAX_DISTANCE;

/// Xiphos - fuzzy string matching over a word corpus
#[derive(Parser, Debug, Clone)]
#[command(name = "xiphos")]
#[command(about = "Fuzzy string matching over a word corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Xiphos Contributors")]
#[command(long_about = None)]
pub struct XiphosArgs {
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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl XiphosArgs {
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
    /// Rank corpus words by edit distance to a query
    Search(SearchArgs),

    /// List supported distance algorithms
    Algorithms,
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Query word to match against the corpus
    pub query: String,

    /// Corpus words given directly on the command line
    pub words: Vec<String>,

    /// Load the corpus from a text file
    #[arg(short = 'c', long, value_name = "FILE", conflicts_with = "text")]
    pub corpus_file: Option<PathBuf>,

    /// Extract the corpus from a free-text string
    #[arg(short = 't', long)]
    pub text: Option<String>,

    /// Distance algorithm to use
    #[arg(short, long, value_enum, default_value = "levenshtein")]
    pub algorithm: Algorithm,

    /// Maximum edit distance; farther words are discarded
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DISTANCE)]
    pub max_distance: usize,

    /// Disable the distance threshold and rank the whole corpus
    #[arg(long, conflicts_with = "max_distance")]
    pub no_limit: bool,

    /// Show at most this many results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Rank with a rayon parallel scan
    #[arg(short = 'p', long)]
    pub parallel: bool,

    /// Print a progress line every 10% of the corpus
    #[arg(long, conflicts_with = "parallel")]
    pub progress: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
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
    fn test_parse_search_defaults() {
        let args =
            XiphosArgs::try_parse_from(["xiphos", "search", "exmaple", "example", "sample"])
                .unwrap();

        assert_eq!(args.verbosity(), 1);
        match args.command {
            Command::Search(search) => {
                assert_eq!(search.query, "exmaple");
                assert_eq!(search.words, vec!["example", "sample"]);
                assert_eq!(search.algorithm, Algorithm::Levenshtein);
                assert_eq!(search.max_distance, DEFAULT_MAX_DISTANCE);
                assert!(!search.no_limit);
            }
            _ => panic!("Expected search command"),
        }
    }

    #[test]
    fn test_parse_algorithm_names() {
        for name in ["damerau_levenshtein", "damerau"] {
            let args =
                XiphosArgs::try_parse_from(["xiphos", "search", "-a", name, "teh", "the"]).unwrap();
            match args.command {
                Command::Search(search) => {
                    assert_eq!(search.algorithm, Algorithm::DamerauLevenshtein)
                }
                _ => panic!("Expected search command"),
            }
        }

        assert!(XiphosArgs::try_parse_from(["xiphos", "search", "-a", "soundex", "teh"]).is_err());
    }

    #[test]
    fn test_no_limit_conflicts_with_max_distance() {
        let result = XiphosArgs::try_parse_from([
            "xiphos",
            "search",
            "teh",
            "the",
            "--no-limit",
            "--max-distance",
            "2",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args =
            XiphosArgs::try_parse_from(["xiphos", "-q", "-vv", "algorithms"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
