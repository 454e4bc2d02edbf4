//! Edit distance algorithms for fuzzy matching.
//!
//! Two metrics are provided: classic Levenshtein distance and the
//! Damerau-Levenshtein extension that counts adjacent transpositions as a
//! single edit. The [`Algorithm`] enum selects between them; string selectors
//! coming in over an API boundary are parsed with [`Algorithm::from_str`],
//! which rejects unknown names instead of defaulting.

pub mod damerau;
pub mod levenshtein;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::XiphosError;

pub use damerau::damerau_levenshtein_distance;
pub use levenshtein::{levenshtein_distance, levenshtein_distance_bounded};

/// The set of supported edit distance algorithms.
///
/// A closed enum rather than string dispatch: adding a variant forces every
/// match site to be updated, and a mistyped selector fails at parse time
/// with [`XiphosError::InvalidAlgorithm`] instead of silently falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Insertions, deletions, and substitutions, each cost 1.
    #[value(name = "levenshtein")]
    Levenshtein,
    /// Levenshtein plus adjacent transpositions at cost 1
    /// (restricted / optimal string alignment variant).
    #[value(name = "damerau_levenshtein", alias = "damerau")]
    DamerauLevenshtein,
}

impl Algorithm {
    /// All supported algorithms, in canonical order.
    pub fn all() -> &'static [Algorithm] {
        &[Algorithm::Levenshtein, Algorithm::DamerauLevenshtein]
    }

    /// Canonical wire name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Levenshtein => "levenshtein",
            Algorithm::DamerauLevenshtein => "damerau_levenshtein",
        }
    }

    /// Names of all supported algorithms, for error messages and listings.
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(|a| a.name()).collect()
    }

    /// Compute the distance between two strings using this algorithm.
    pub fn distance(&self, a: &str, b: &str) -> usize {
        match self {
            Algorithm::Levenshtein => levenshtein_distance(a, b),
            Algorithm::DamerauLevenshtein => damerau_levenshtein_distance(a, b),
        }
    }

    /// Compute the distance with an upper bound, returning `None` when the
    /// distance exceeds `max_distance`.
    pub fn distance_bounded(&self, a: &str, b: &str, max_distance: usize) -> Option<usize> {
        match self {
            Algorithm::Levenshtein => levenshtein_distance_bounded(a, b, max_distance),
            Algorithm::DamerauLevenshtein => {
                // Length-difference pruning, then a full computation; the
                // transposition recurrence needs the whole matrix anyway.
                if a.chars().count().abs_diff(b.chars().count()) > max_distance {
                    return None;
                }
                let distance = damerau_levenshtein_distance(a, b);
                (distance <= max_distance).then_some(distance)
            }
        }
    }
}

impl FromStr for Algorithm {
    type Err = XiphosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "levenshtein" => Ok(Algorithm::Levenshtein),
            // Both spellings appear in the wild.
            "damerau_levenshtein" | "damerau" => Ok(Algorithm::DamerauLevenshtein),
            other => Err(XiphosError::invalid_algorithm(other, &Self::names())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
