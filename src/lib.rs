//! chained-hashmap: a single-threaded separate-chaining hash map with
//! pluggable hash strategies, explicit resize, and a top-K frequency
//! ranker that reuses the table as a bucket sort.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: build the table and the ranker in small, safe layers so each
//!   piece can be reasoned about independently.
//! - Layers:
//!   - Chain<K, V>: one bucket, a singly linked key/value list whose
//!     nodes live in a per-chain slotmap arena; the chain holds the head
//!     key and links run through arena keys, never aliased references.
//!   - ChainedHashMap<K, V, H>: the bucket array plus size/capacity
//!     bookkeeping, the selector indirection, and stop-the-world resize.
//!   - FrequencyRanker<H>: wraps a table keyed by token and bucketed by
//!     occurrence count to answer top-K queries by scanning counts from
//!     the high-water mark downward.
//!   - tokenize / top_words: the thin outer collaborators, a word
//!     tokenizer equivalent to `\w[\w']*\w|\w` and a line-by-line file
//!     driver.
//!
//! Constraints
//! - Single-threaded; callers serialize externally before any
//!   multi-threaded use.
//! - No automatic growth: `resize` is an explicit operation, never
//!   triggered by `put`. A load-factor policy belongs above the table,
//!   not inside it.
//! - Hash strategies are injected values (string -> u64), deterministic
//!   and total; bucket choice is always `hash % capacity`.
//! - Selector indirection is caller-managed: the table does not track
//!   which selector placed an entry. Moving a key between selectors is an
//!   explicit remove-under-old / put-under-new pair, and `resize` always
//!   restores key-based addressing.
//!
//! Why this split?
//! - Localize invariants: the chain knows only link integrity, the table
//!   only bucket arithmetic and size, the ranker only the count/bucket
//!   correspondence.
//! - Safe Rust throughout: arena keys instead of owned `next` boxes make
//!   unlink a key rewrite rather than an ownership dance.
//!
//! Notes and non-goals
//! - `contains_key` scans every bucket by design: an entry placed via an
//!   alternate selector is not reachable through its key's own hash.
//! - Tie order in ranking results is re-insertion order within a bucket's
//!   chain; it is documented, not guaranteed.
//! - No deletion tombstones, no persistence, no iteration-order guarantee
//!   beyond head-to-tail within a chain.

mod chain;
mod chained_hash_map;
mod chained_hash_map_proptest;
mod frequency_ranker;
mod hash_strategy;
mod tokenize;

// Public surface
pub use chain::Chain;
pub use chained_hash_map::{CapacityError, ChainedHashMap};
pub use frequency_ranker::{rank, top_words, FrequencyRanker, DEFAULT_RANKING_CAPACITY};
pub use hash_strategy::{CharSum, HashStrategy, WeightedCharSum};
pub use tokenize::{tokens, Tokens};
