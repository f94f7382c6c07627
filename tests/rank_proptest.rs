// Property test for the ranking pipeline against a plain counting model.
//
// Tie order is unspecified, so the assertions compare count sequences and
// per-token counts, never the token order inside a tie group.
use chained_hashmap::rank;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_rank_matches_counting_model(
        stream in proptest::collection::vec("[a-e]{1,2}", 0..120),
        k in 0usize..12,
    ) {
        let mut model: HashMap<String, usize> = HashMap::new();
        for t in &stream {
            *model.entry(t.clone()).or_insert(0) += 1;
        }
        let mut model_counts: Vec<usize> = model.values().copied().collect();
        model_counts.sort_unstable_by(|a, b| b.cmp(a));

        let got = rank(stream, k);

        // length: min(k, distinct tokens)
        prop_assert_eq!(got.len(), k.min(model.len()));

        // descending counts, equal to the model's top counts
        let got_counts: Vec<usize> = got.iter().map(|(_, c)| *c).collect();
        prop_assert_eq!(&got_counts[..], &model_counts[..got.len()]);

        // every reported pair is exact per the model; no token repeats
        let mut seen = HashSet::new();
        for (token, count) in &got {
            prop_assert_eq!(model.get(token), Some(count));
            prop_assert!(seen.insert(token.clone()));
        }
    }
}
