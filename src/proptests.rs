//! Randomized checks of the trie against a plain `HashSet` of keys.

use std::collections::HashSet;
use proptest::prelude::*;
use crate::{Trie, build_trie, autocomplete_word};


fn keys() -> impl Strategy<Value = Vec<Vec<u8>>> {
    // a small alphabet, so that keys actually share prefixes
    prop::collection::vec(prop::collection::vec(0u8..4, 0..6), 0..32)
}

proptest! {
    #[test]
    fn insert_then_contains(keys in keys(), key in prop::collection::vec(0u8..4, 0..6)) {
        let trie: Trie<u8> = keys.iter().collect();
        prop_assert!(trie.insert(&key).contains(&key));
    }

    #[test]
    fn no_false_positives(keys in keys(), probe in prop::collection::vec(0u8..4, 0..6)) {
        let trie: Trie<u8> = keys.iter().collect();
        let stored: HashSet<_> = keys.into_iter().collect();

        prop_assert_eq!(trie.contains(&probe), stored.contains(&probe));
        prop_assert_eq!(trie.elements(), stored);
    }

    #[test]
    fn idempotent(keys in keys(), key in prop::collection::vec(0u8..4, 0..6)) {
        let trie: Trie<u8> = keys.iter().collect();
        let once = trie.insert(&key);
        let twice = once.insert(&key);

        prop_assert_eq!(once.elements(), twice.elements());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn order_independent(keys in keys().prop_shuffle(), mut other in keys()) {
        other.extend(keys.iter().cloned());
        let forward: Trie<u8> = other.iter().collect();
        let backward: Trie<u8> = other.iter().rev().collect();

        prop_assert_eq!(forward.elements(), backward.elements());
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn autocomplete_matches_prefix_filter(keys in keys(), prefix in prop::collection::vec(0u8..4, 0..3)) {
        let trie: Trie<u8> = keys.iter().collect();
        let expected: HashSet<Vec<u8>> = keys
            .iter()
            .filter_map(|key| key.strip_prefix(prefix.as_slice()))
            .map(<[u8]>::to_vec)
            .collect();

        prop_assert_eq!(trie.autocomplete(&prefix), expected);
        // the empty prefix always narrows to the root, even with no keys stored
        let reachable = prefix.is_empty() || keys.iter().any(|key| key.starts_with(&prefix));
        prop_assert_eq!(trie.with_prefix(&prefix).is_some(), reachable);
    }

    #[test]
    fn iter_agrees_with_elements(keys in keys()) {
        let trie: Trie<u8> = keys.iter().collect();
        let iterated: Vec<_> = trie.iter().collect();
        let unique: HashSet<_> = iterated.iter().cloned().collect();

        // every key is visited exactly once
        prop_assert_eq!(iterated.len(), unique.len());
        prop_assert_eq!(unique, trie.elements());
    }

    #[test]
    fn old_versions_survive(keys in keys(), extra in keys()) {
        let old: Trie<u8> = keys.iter().collect();
        let before = old.elements();

        let mut new = old.clone();
        new.extend(&extra);

        prop_assert_eq!(old.elements(), before);
        for key in &extra {
            prop_assert!(new.contains(key));
        }
    }

    #[test]
    fn words_complete_to_stored_words(words in prop::collection::vec("[a-c]{0,5}", 0..16), partial in "[a-c]{0,2}") {
        let trie = build_trie(&words);
        let expected: HashSet<&str> = words
            .iter()
            .map(String::as_str)
            .filter(|word| word.starts_with(partial.as_str()))
            .collect();
        let found = autocomplete_word(&trie, &partial);

        prop_assert_eq!(found.len(), expected.len());
        for word in &found {
            prop_assert!(expected.contains(word.as_str()));
        }
    }
}
