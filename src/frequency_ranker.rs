//! Frequency ranking: top-K token extraction using the table as a
//! bucket sort.
//!
//! Instead of counting into an ordinary map and sorting at the end, the
//! ranker stores each token in the bucket its *current count* hashes to
//! (the table's selector indirection). Extraction then walks candidate
//! counts from the high-water mark downward and reads tokens straight out
//! of each count's bucket, so the top K fall out without sorting the full
//! distinct-token set.

use crate::chained_hash_map::{CapacityError, ChainedHashMap};
use crate::hash_strategy::{HashStrategy, WeightedCharSum};
use crate::tokenize::tokens;
use hashbrown::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Default bucket count for a ranking table. Large relative to the count
/// range of typical text so distinct counts rarely share a bucket.
pub const DEFAULT_RANKING_CAPACITY: usize = 2500;

/// Single-use token-frequency accumulator.
///
/// Feed every token through [`observe`](Self::observe), then consume the
/// ranker with [`into_top`](Self::into_top); the consuming call is what
/// makes the accumulate-then-extract lifecycle one-way.
///
/// Counts are re-derived from an append-only occurrence log rather than a
/// live counter map, trading memory (O(total tokens)) and recount time for
/// having exactly one structure that knows current counts.
pub struct FrequencyRanker<H = WeightedCharSum> {
    table: ChainedHashMap<String, usize, H>,
    seen: HashSet<String>,
    log: Vec<String>,
    max_count: usize,
}

impl FrequencyRanker<WeightedCharSum> {
    /// Ranker over a default-capacity table with the default strategy.
    pub fn new() -> Self {
        // DEFAULT_RANKING_CAPACITY > 0, so this cannot fail.
        match Self::with_capacity(DEFAULT_RANKING_CAPACITY) {
            Ok(r) => r,
            Err(_) => unreachable!("default capacity is non-zero"),
        }
    }
}

impl Default for FrequencyRanker<WeightedCharSum> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FrequencyRanker<H>
where
    H: HashStrategy + Default,
{
    /// Ranker over a table with `capacity` buckets.
    pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        Ok(Self {
            table: ChainedHashMap::with_capacity(capacity)?,
            seen: HashSet::new(),
            log: Vec::new(),
            max_count: 1,
        })
    }
}

impl<H> FrequencyRanker<H>
where
    H: HashStrategy,
{
    /// Account one occurrence of `token`.
    ///
    /// A token seen before moves buckets: it is removed under its old count
    /// and re-inserted under the new one. The remove must use the *old*
    /// count as selector; that is where the previous `observe` left it.
    pub fn observe(&mut self, token: String) {
        if self.seen.contains(&token) {
            let count = self.log.iter().filter(|t| **t == token).count();
            self.table.remove_via(&token, &count);
            self.table.put_via(token.clone(), count + 1, &(count + 1));
            if count + 1 > self.max_count {
                self.max_count = count + 1;
            }
        } else {
            self.table.put_via(token.clone(), 1, &1usize);
            self.seen.insert(token.clone());
        }
        self.log.push(token);
    }

    /// Number of distinct tokens observed so far.
    pub fn distinct(&self) -> usize {
        self.seen.len()
    }

    /// Extract up to `k` (token, count) pairs, highest count first,
    /// consuming the ranker.
    ///
    /// Walks candidate counts from the watermark down to 1 and inspects
    /// only the chain that count's bucket holds, keeping entries whose
    /// stored count matches the candidate exactly. Two different counts
    /// can hash into the same bucket, so the value check is load-bearing.
    /// Stops mid-bucket once `k` pairs are collected.
    ///
    /// Tie order among tokens with equal counts is the chain order of that
    /// bucket, i.e. most-recently-re-inserted first. That is a function of
    /// the re-insertion history, not of lexical or first-seen order; callers
    /// needing a deterministic tie-break must impose their own.
    pub fn into_top(self, k: usize) -> Vec<(String, usize)> {
        let mut results = Vec::new();
        if k == 0 {
            return results;
        }
        for count in (1..=self.max_count).rev() {
            let idx = self.table.bucket_index(&count);
            let Some(chain) = self.table.bucket(idx) else {
                continue;
            };
            for (token, &c) in chain {
                if c == count {
                    results.push((token.clone(), c));
                    if results.len() == k {
                        return results;
                    }
                }
            }
        }
        results
    }
}

/// Rank a token stream: up to `k` (token, count) pairs by descending count.
/// Tokens are taken as-is; case folding is the producer's job.
pub fn rank<I>(tokens: I, k: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut ranker = FrequencyRanker::new();
    for token in tokens {
        ranker.observe(token);
    }
    ranker.into_top(k)
}

/// Rank the words of a UTF-8 text file, reading line by line and feeding
/// each line through the word tokenizer. I/O errors propagate.
pub fn top_words<P: AsRef<Path>>(path: P, k: usize) -> io::Result<Vec<(String, usize)>> {
    let reader = BufReader::new(File::open(path)?);
    let mut ranker = FrequencyRanker::new();
    for line in reader.lines() {
        let line = line?;
        for token in tokens(&line) {
            ranker.observe(token);
        }
    }
    Ok(ranker.into_top(k))
}
