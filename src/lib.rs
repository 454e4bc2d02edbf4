//! # Xiphos
//!
//! A fast, lightweight fuzzy string matching library for Rust.
//!
//! ## Features
//!
//! - Levenshtein and Damerau-Levenshtein edit distances
//! - Corpus ranking with optional distance threshold
//! - Corpus extraction from word lists, free text, or files
//! - Lazy scanning for incremental progress reporting
//! - Optional rayon-parallel ranking
//!
//! ## Example
//!
//! ```
//! use xiphos::corpus::Corpus;
//! use xiphos::distance::Algorithm;
//! use xiphos::ranker::Ranker;
//!
//! let corpus = Corpus::from_text("example sample temple apple examine expletive");
//! let ranker = Ranker::new(Algorithm::Levenshtein).with_max_distance(2);
//!
//! let results = ranker.search("exemple", &corpus);
//! assert_eq!(results[0].word, "example");
//! assert_eq!(results[0].distance, 1);
//! ```

pub mod cli;
pub mod corpus;
pub mod distance;
pub mod error;
pub mod ranker;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
