//! Property-based tests for suffix tree construction and queries.
//!
//! Every tree is compared against a naive scan of the terminated text:
//! 1. Structural invariants hold for arbitrary inputs
//! 2. Substring search and occurrence lists agree with a linear scan
//! 3. Suffix enumeration yields each suffix once, in ascending order

use proptest::prelude::*;
use rayon::prelude::*;
use sufx::collections::Sequenceable;
use sufx::{SuffixTreeBuilder, TreeError, build_suffix_tree};

// ============================================================================
// Test Data Generators
// ============================================================================

/// Small alphabet so that repeats (and therefore internal nodes) are common
fn text_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(b'a'..=b'c', 1..64)
}

fn pattern_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(b'a'..=b'd', 0..6)
}

fn wide_text_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..6, 1..48)
}

// ============================================================================
// Helper Functions
// ============================================================================

fn terminated(text: &[u8]) -> Vec<u8> {
    let mut full = text.to_vec();
    full.push(0);
    full
}

fn naive_occurrences(full: &[u8], pattern: &[u8]) -> Vec<usize> {
    (0..full.len())
        .filter(|&i| full[i..].starts_with(pattern))
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_construction_is_valid(text in text_strategy()) {
        let tree = build_suffix_tree(&text).unwrap();
        prop_assert_eq!(tree.check(), Ok(()));
        prop_assert!(tree.validate());
        prop_assert_eq!(tree.leaf_count(), text.len() + 1);
        prop_assert!(tree.node_count() <= 2 * (text.len() + 1) - 1);
        prop_assert_eq!(tree.edge_count() + 1, tree.node_count());
    }

    #[test]
    fn prop_every_suffix_is_contained(text in text_strategy()) {
        let tree = build_suffix_tree(&text).unwrap();
        let full = terminated(&text);
        for start in 0..full.len() {
            prop_assert!(tree.contains(&text[start.min(text.len())..]));
            prop_assert!(tree.contains(&full[start..]));
        }
    }

    #[test]
    fn prop_contains_matches_linear_scan(
        text in text_strategy(),
        patterns in prop::collection::vec(pattern_strategy(), 1..20),
    ) {
        let tree = build_suffix_tree(&text).unwrap();
        let full = terminated(&text);
        for pattern in &patterns {
            let expected = !naive_occurrences(&full, pattern).is_empty();
            prop_assert_eq!(tree.contains(pattern), expected, "pattern {:?}", pattern);
        }
    }

    #[test]
    fn prop_occurrences_match_linear_scan(
        text in text_strategy(),
        pattern in pattern_strategy(),
    ) {
        let tree = build_suffix_tree(&text).unwrap();
        let full = terminated(&text);
        let expected = naive_occurrences(&full, &pattern);
        prop_assert_eq!(tree.count_occurrences(&pattern), expected.len());
        prop_assert_eq!(tree.occurrences(&pattern), expected);
    }

    #[test]
    fn prop_enumeration_is_sorted_and_complete(text in text_strategy()) {
        let tree = build_suffix_tree(&text).unwrap();
        let full = terminated(&text);
        let entries: Vec<_> = tree.enumerate_suffixes().collect();

        prop_assert_eq!(entries.len(), full.len());
        for entry in &entries {
            prop_assert_eq!(&entry.symbols[..], &full[entry.start..]);
        }
        for pair in entries.windows(2) {
            prop_assert!(pair[0].symbols < pair[1].symbols);
        }

        let mut starts: Vec<usize> = entries.iter().map(|e| e.start).collect();
        starts.sort_unstable();
        prop_assert_eq!(starts, (0..full.len()).collect::<Vec<_>>());
        prop_assert_eq!(tree.suffix_set().len(), full.len());
    }

    #[test]
    fn prop_construction_is_deterministic(text in text_strategy()) {
        let first = build_suffix_tree(&text).unwrap();
        let second = build_suffix_tree(&text).unwrap();
        prop_assert_eq!(first.stats(), second.stats());
        prop_assert_eq!(first.to_vec(), second.to_vec());
    }

    #[test]
    fn prop_wide_alphabet_is_valid(text in wide_text_strategy()) {
        let tree = build_suffix_tree(&text).unwrap();
        prop_assert_eq!(tree.check(), Ok(()));
        prop_assert_eq!(tree.len(), text.len() + 1);
        for start in 0..text.len() {
            prop_assert!(tree.contains(&text[start..]));
        }
    }

    #[test]
    fn prop_embedded_sentinel_is_rejected(
        text in prop::collection::vec(1u8..=255, 1..32),
        at in any::<prop::sample::Index>(),
    ) {
        let mut text = text;
        let position = at.index(text.len());
        text[position] = 0;
        prop_assert_eq!(
            build_suffix_tree(&text).unwrap_err(),
            TreeError::NonUniqueSentinel { position }
        );
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_banana() {
    let tree = build_suffix_tree(b"banana").unwrap();
    assert!(tree.contains(b"ana"));
    assert!(!tree.contains(b"nab"));

    let entries = tree.to_vec();
    assert_eq!(entries.len(), 7);
    let anana = entries.iter().find(|e| e.start == 1).unwrap();
    assert_eq!(anana.symbols, b"anana\0".to_vec());
}

#[test]
fn test_all_repeated_symbol() {
    let tree = build_suffix_tree(b"aaaa").unwrap();
    assert_eq!(tree.check(), Ok(()));
    assert_eq!(tree.occurrences(b"aa"), vec![0, 1, 2]);
    assert!(!tree.contains(b"aaaaa"));

    let long = vec![b'a'; 2000];
    let tree = build_suffix_tree(&long).unwrap();
    assert_eq!(tree.check(), Ok(()));
    assert_eq!(tree.count_occurrences(&long[..1000]), 1001);
}

#[test]
fn test_suffix_link_heavy_input() {
    let tree = build_suffix_tree(b"abcabxabcd").unwrap();
    assert_eq!(tree.check(), Ok(()));
    assert_eq!(tree.occurrences(b"abc"), vec![0, 6]);
    assert_eq!(tree.occurrences(b"ab"), vec![0, 3, 6]);
}

#[test]
fn test_custom_sentinel() {
    let text = b"mississippi";
    let tree = SuffixTreeBuilder::new(&text[..])
        .sentinel(b'$')
        .build()
        .unwrap();
    assert_eq!(tree.check(), Ok(()));
    assert!(tree.contains(b"ssippi$"));
    assert!(!tree.contains(b"ssippi\0"));
    assert_eq!(tree.occurrences(b"issi"), vec![1, 4]);
}

#[test]
fn test_empty_input_is_rejected() {
    let empty: &[u8] = &[];
    assert_eq!(build_suffix_tree(empty).unwrap_err(), TreeError::EmptyInput);
}

#[test]
fn test_concurrent_queries() {
    let text: Vec<u8> = (0..4096u32).map(|i| b'a' + (i * 7 % 5) as u8).collect();
    let tree = build_suffix_tree(&text).unwrap();

    let all_found = (0..text.len() - 8)
        .into_par_iter()
        .all(|start| tree.contains(&text[start..start + 8]));
    assert!(all_found);

    std::thread::scope(|scope| {
        for offset in 0..4 {
            let tree = &tree;
            let text = &text;
            scope.spawn(move || {
                let pattern = &text[offset..offset + 5];
                assert!(tree.count_occurrences(pattern) >= 1);
            });
        }
    });
}
