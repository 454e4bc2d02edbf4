//! Corpus ranking: apply a distance algorithm between a query and every
//! word of a corpus, returning matches sorted ascending by distance.
//!
//! The ranker is pure and stateless: each call only touches its own inputs,
//! so callers can run many searches in parallel without coordination. It
//! performs no I/O and no timing; wall-clock measurement is the caller's
//! concern.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;
use crate::distance::Algorithm;

/// Default maximum edit distance used when ranking standalone.
pub const DEFAULT_MAX_DISTANCE: usize = 3;

/// A single ranked match: a corpus word and its edit distance to the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceResult {
    /// The matched corpus word.
    pub word: String,
    /// Edit distance from the query.
    pub distance: usize,
}

impl DistanceResult {
    /// Create a new distance result.
    pub fn new(word: impl Into<String>, distance: usize) -> Self {
        DistanceResult {
            word: word.into(),
            distance,
        }
    }
}

/// Progress of an in-flight ranking pass over a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Corpus words processed so far.
    pub processed: usize,
    /// Total corpus words.
    pub total: usize,
}

impl Progress {
    /// Completion percentage, 0-100.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.processed * 100) / self.total) as u8
    }
}

/// Ranks corpus words by edit distance to a query.
///
/// Holds the algorithm choice and an optional distance threshold; no state
/// survives between calls.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    algorithm: Algorithm,
    max_distance: Option<usize>,
}

impl Ranker {
    /// Create a ranker with no distance threshold.
    pub fn new(algorithm: Algorithm) -> Self {
        Ranker {
            algorithm,
            max_distance: None,
        }
    }

    /// Set the maximum distance; words farther than this are discarded.
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// The selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The distance threshold, if any.
    pub fn max_distance(&self) -> Option<usize> {
        self.max_distance
    }

    /// Rank every corpus word by distance to `query`.
    ///
    /// The query is lower-cased before comparison (corpus words already
    /// are). Results are sorted ascending by distance; the sort is stable,
    /// so ties keep corpus iteration order. With a threshold set, words
    /// whose distance exceeds it are dropped.
    pub fn search(&self, query: &str, corpus: &Corpus) -> Vec<DistanceResult> {
        let mut results: Vec<DistanceResult> = self.scan(query, corpus).collect();
        results.sort_by_key(|r| r.distance);
        results
    }

    /// Lazily rank corpus words in corpus order.
    ///
    /// Yields one [`DistanceResult`] per surviving word as it is computed,
    /// without sorting, so a caller driving the iterator can observe partial
    /// progress (see [`RankScan::processed`]) or stop early. [`search`]
    /// is this scan plus a stable sort.
    ///
    /// [`search`]: Ranker::search
    pub fn scan<'a>(&self, query: &str, corpus: &'a Corpus) -> RankScan<'a> {
        RankScan {
            query: query.to_lowercase(),
            algorithm: self.algorithm,
            max_distance: self.max_distance,
            words: corpus.words(),
            next_index: 0,
        }
    }

    /// Rank the corpus, invoking `on_progress` every `every` words and once
    /// at completion.
    ///
    /// Intended for long corpora where an external dispatcher forwards
    /// incremental progress (a task queue pushing notifications, a CLI
    /// progress line). The callback receives only counters; results are
    /// returned sorted exactly as from [`search`].
    ///
    /// [`search`]: Ranker::search
    pub fn search_with_progress<F>(
        &self,
        query: &str,
        corpus: &Corpus,
        every: usize,
        mut on_progress: F,
    ) -> Vec<DistanceResult>
    where
        F: FnMut(Progress),
    {
        let every = every.max(1);
        let total = corpus.len();
        let mut scan = self.scan(query, corpus);
        let mut results = Vec::new();

        loop {
            let before = scan.processed();
            match scan.next() {
                Some(result) => {
                    results.push(result);
                    let processed = scan.processed();
                    // next() may skip over-threshold words; report each
                    // interval boundary the scan crossed.
                    if processed / every > before / every {
                        on_progress(Progress { processed, total });
                    }
                }
                None => break,
            }
        }

        on_progress(Progress {
            processed: total,
            total,
        });

        results.sort_by_key(|r| r.distance);
        results
    }

    /// Rank the corpus using a rayon parallel scan.
    ///
    /// Output is identical to [`search`], including tie order: the indexed
    /// parallel collect preserves corpus order, and the final sort is
    /// stable.
    ///
    /// [`search`]: Ranker::search
    pub fn search_parallel(&self, query: &str, corpus: &Corpus) -> Vec<DistanceResult> {
        let query = query.to_lowercase();
        let mut results: Vec<DistanceResult> = corpus
            .words()
            .par_iter()
            .filter_map(|word| {
                compute(self.algorithm, &query, word, self.max_distance)
                    .map(|distance| DistanceResult::new(word.clone(), distance))
            })
            .collect();
        results.sort_by_key(|r| r.distance);
        results
    }

    /// Reference interval for progress reporting: every 10% of the corpus,
    /// at least every word.
    pub fn progress_interval(corpus: &Corpus) -> usize {
        (corpus.len() / 10).max(1)
    }
}

fn compute(
    algorithm: Algorithm,
    query: &str,
    word: &str,
    max_distance: Option<usize>,
) -> Option<usize> {
    match max_distance {
        Some(max) => algorithm.distance_bounded(query, word, max),
        None => Some(algorithm.distance(query, word)),
    }
}

/// Lazy ranking pass over a corpus, in corpus order.
///
/// Created by [`Ranker::scan`]. Words whose distance exceeds the ranker's
/// threshold are skipped, but still counted by [`processed`].
///
/// [`processed`]: RankScan::processed
#[derive(Debug)]
pub struct RankScan<'a> {
    query: String,
    algorithm: Algorithm,
    max_distance: Option<usize>,
    words: &'a [String],
    next_index: usize,
}

impl RankScan<'_> {
    /// Corpus words examined so far.
    pub fn processed(&self) -> usize {
        self.next_index
    }

    /// Total corpus words.
    pub fn total(&self) -> usize {
        self.words.len()
    }
}

impl Iterator for RankScan<'_> {
    type Item = DistanceResult;

    fn next(&mut self) -> Option<DistanceResult> {
        while self.next_index < self.words.len() {
            let word = &self.words[self.next_index];
            self.next_index += 1;

            if let Some(distance) = compute(self.algorithm, &self.query, word, self.max_distance) {
                return Some(DistanceResult::new(word.clone(), distance));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.words.len() - self.next_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_corpus() -> Corpus {
        Corpus::from_words(["example", "sample", "temple", "apple", "examine", "expletive"])
    }

    #[test]
    fn test_search_sorted_ascending() {
        let ranker = Ranker::new(Algorithm::Levenshtein);
        let results = ranker.search("example", &sample_corpus());

        assert_eq!(results.len(), 6);
        assert_eq!(results[0], DistanceResult::new("example", 0));
        assert!(results.iter().any(|r| r.word == "examine" && r.distance == 2));
        for pair in results.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let ranker = Ranker::new(Algorithm::Levenshtein);
        let corpus = Corpus::from_words(["Example"]);
        let results = ranker.search("EXAMPLE", &corpus);
        assert_eq!(results, vec![DistanceResult::new("example", 0)]);
    }

    #[test]
    fn test_max_distance_filters() {
        let corpus = sample_corpus();
        let unfiltered = Ranker::new(Algorithm::Levenshtein).search("example", &corpus);
        let filtered = Ranker::new(Algorithm::Levenshtein)
            .with_max_distance(2)
            .search("example", &corpus);

        assert!(filtered.len() <= unfiltered.len());
        assert!(filtered.iter().all(|r| r.distance <= 2));
        // Tightening the threshold never grows the result set.
        let tighter = Ranker::new(Algorithm::Levenshtein)
            .with_max_distance(1)
            .search("example", &corpus);
        assert!(tighter.len() <= filtered.len());
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let corpus = Corpus::from_words(["bat", "cat", "hat"]);
        let results = Ranker::new(Algorithm::Levenshtein).search("rat", &corpus);
        let words: Vec<&str> = results.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["bat", "cat", "hat"]);
    }

    #[test]
    fn test_search_idempotent() {
        let ranker = Ranker::new(Algorithm::DamerauLevenshtein).with_max_distance(3);
        let corpus = sample_corpus();
        let first = ranker.search("exmaple", &corpus);
        let second = ranker.search("exmaple", &corpus);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scan_yields_corpus_order() {
        let ranker = Ranker::new(Algorithm::Levenshtein);
        let corpus = sample_corpus();
        let scanned: Vec<String> = ranker.scan("example", &corpus).map(|r| r.word).collect();
        assert_eq!(scanned, corpus.words());
    }

    #[test]
    fn test_scan_tracks_progress() {
        let ranker = Ranker::new(Algorithm::Levenshtein).with_max_distance(0);
        let corpus = sample_corpus();
        let mut scan = ranker.scan("example", &corpus);
        assert_eq!(scan.total(), 6);

        // Only the exact match survives, but every word is counted.
        let results: Vec<DistanceResult> = scan.by_ref().collect();
        assert_eq!(results, vec![DistanceResult::new("example", 0)]);
        assert_eq!(scan.processed(), 6);
    }

    #[test]
    fn test_search_with_progress_reaches_completion() {
        let ranker = Ranker::new(Algorithm::Levenshtein);
        let corpus = sample_corpus();
        let mut reports = Vec::new();

        let results = ranker.search_with_progress("example", &corpus, 2, |p| reports.push(p));

        assert_eq!(results, ranker.search("example", &corpus));
        let last = reports.last().unwrap();
        assert_eq!(last.processed, corpus.len());
        assert_eq!(last.percent(), 100);
        // Progress counters never go backwards.
        for pair in reports.windows(2) {
            assert!(pair[0].processed <= pair[1].processed);
        }
    }

    #[test]
    fn test_search_parallel_matches_sequential() {
        let ranker = Ranker::new(Algorithm::DamerauLevenshtein).with_max_distance(4);
        let corpus = Corpus::from_text(
            "the quick brown fox jumps over the lazy dog while the quiet \
             crowd watches from afar with great interest and quiet awe",
        );
        assert_eq!(
            ranker.search_parallel("quick", &corpus),
            ranker.search("quick", &corpus)
        );
    }

    #[test]
    fn test_empty_corpus() {
        let ranker = Ranker::new(Algorithm::Levenshtein);
        assert!(ranker.search("anything", &Corpus::default()).is_empty());
    }

    #[test]
    fn test_progress_interval() {
        assert_eq!(Ranker::progress_interval(&Corpus::default()), 1);
        let corpus = Corpus::from_words((0..50).map(|i| format!("word{i}")));
        assert_eq!(Ranker::progress_interval(&corpus), 5);
    }
}
