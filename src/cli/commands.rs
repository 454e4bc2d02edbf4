//! Command implementations for the Xiphos CLI.

use std::time::Instant;

use log::{debug, info};

use crate::cli::args::{Command, SearchArgs, XiphosArgs};
use crate::cli::output::{AlgorithmListing, SearchReport, output_algorithm_listing, output_search_report};
use crate::corpus::Corpus;
use crate::distance::Algorithm;
use crate::error::{Result, XiphosError};
use crate::ranker::Ranker;

/// Execute a CLI command.
pub fn execute_command(args: XiphosArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search(search_args.clone(), &args),
        Command::Algorithms => list_algorithms(&args),
    }
}

/// Rank a corpus against the query and print the report.
fn search(args: SearchArgs, cli_args: &XiphosArgs) -> Result<()> {
    let corpus = load_corpus(&args)?;
    debug!("corpus loaded: {} unique words", corpus.len());

    let ranker = if args.no_limit {
        Ranker::new(args.algorithm)
    } else {
        Ranker::new(args.algorithm).with_max_distance(args.max_distance)
    };

    let start_time = Instant::now();
    let mut results = if args.parallel {
        ranker.search_parallel(&args.query, &corpus)
    } else if args.progress {
        let every = Ranker::progress_interval(&corpus);
        ranker.search_with_progress(&args.query, &corpus, every, |progress| {
            info!(
                "progress: {}/{} words ({}%)",
                progress.processed,
                progress.total,
                progress.percent()
            );
        })
    } else {
        ranker.search(&args.query, &corpus)
    };
    let elapsed = start_time.elapsed();

    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    let report = SearchReport {
        query: args.query.to_lowercase(),
        algorithm: args.algorithm.name().to_string(),
        corpus_size: corpus.len(),
        results,
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
    };

    output_search_report(&report, cli_args)
}

/// List the supported distance algorithms.
fn list_algorithms(cli_args: &XiphosArgs) -> Result<()> {
    let listing = AlgorithmListing {
        algorithms: Algorithm::names().iter().map(|n| n.to_string()).collect(),
    };
    output_algorithm_listing(&listing, cli_args)
}

/// Build the corpus from whichever source was given.
fn load_corpus(args: &SearchArgs) -> Result<Corpus> {
    let corpus = if let Some(path) = &args.corpus_file {
        Corpus::from_file(path)?
    } else if let Some(text) = &args.text {
        Corpus::from_text(text)
    } else if !args.words.is_empty() {
        Corpus::from_words(&args.words)
    } else {
        return Err(XiphosError::invalid_input(
            "No corpus given. Pass words, --corpus-file, or --text.",
        ));
    };

    if corpus.is_empty() {
        return Err(XiphosError::invalid_input("Corpus contains no words."));
    }

    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn search_args(argv: &[&str]) -> SearchArgs {
        let mut full = vec!["xiphos", "search"];
        full.extend_from_slice(argv);
        match XiphosArgs::try_parse_from(full).unwrap().command {
            Command::Search(args) => args,
            _ => panic!("Expected search command"),
        }
    }

    #[test]
    fn test_load_corpus_from_words() {
        let args = search_args(&["teh", "The", "then", "the"]);
        let corpus = load_corpus(&args).unwrap();
        assert_eq!(corpus.words(), &["the", "then"]);
    }

    #[test]
    fn test_load_corpus_from_text() {
        let args = search_args(&["teh", "--text", "The quick brown fox"]);
        let corpus = load_corpus(&args).unwrap();
        assert_eq!(corpus.len(), 4);
    }

    #[test]
    fn test_load_corpus_missing() {
        let args = search_args(&["teh"]);
        match load_corpus(&args) {
            Err(XiphosError::InvalidInput(_)) => {}
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }
}
