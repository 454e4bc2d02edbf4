//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, XiphosArgs};
use crate::error::Result;
use crate::ranker::DistanceResult;

/// Result structure for search operations.
///
/// Elapsed time is measured by the command layer around the ranker call; the
/// ranker itself does no timing.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchReport {
    /// The (lower-cased) query word.
    pub query: String,
    /// Algorithm name used for ranking.
    pub algorithm: String,
    /// Ranked matches, ascending by distance.
    pub results: Vec<DistanceResult>,
    /// Unique words in the corpus that was scanned.
    pub corpus_size: usize,
    /// Wall-clock duration of the ranking call, in milliseconds.
    pub elapsed_ms: f64,
}

/// Result structure for the algorithms listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct AlgorithmListing {
    /// Supported algorithm names.
    pub algorithms: Vec<String>,
}

/// Output a search report in the configured format.
pub fn output_search_report(report: &SearchReport, args: &XiphosArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(report, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!(
                    "{} match(es) for '{}' ({}, corpus of {} words, {:.3} ms)",
                    report.results.len(),
                    report.query,
                    report.algorithm,
                    report.corpus_size,
                    report.elapsed_ms
                );
            }
            for result in &report.results {
                println!("{:>4}  {}", result.distance, result.word);
            }
            Ok(())
        }
    }
}

/// Output the algorithm listing in the configured format.
pub fn output_algorithm_listing(listing: &AlgorithmListing, args: &XiphosArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(listing, args),
        OutputFormat::Human => {
            for name in &listing.algorithms {
                println!("{name}");
            }
            Ok(())
        }
    }
}

/// Output a value as JSON, pretty-printed if requested.
fn output_json<T: Serialize>(value: &T, args: &XiphosArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_report_serializes() {
        let report = SearchReport {
            query: "exmaple".to_string(),
            algorithm: "levenshtein".to_string(),
            results: vec![DistanceResult::new("example", 2)],
            corpus_size: 1,
            elapsed_ms: 0.42,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["results"][0]["word"], "example");
        assert_eq!(json["results"][0]["distance"], 2);
        assert_eq!(json["corpus_size"], 1);
    }
}
