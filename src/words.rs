//! Tries of words, i.e. of sequences of `char`s.

use std::collections::BTreeSet;
use crate::trie::Trie;


impl Trie<char> {
    /// Returns a new trie which also contains `word`.
    #[must_use]
    pub fn insert_word(&self, word: &str) -> Self {
        self.insert(&word.chars().collect::<Vec<_>>())
    }

    /// Returns `true` if and only if `word` itself was inserted.
    pub fn contains_word(&self, word: &str) -> bool {
        self.contains(&word.chars().collect::<Vec<_>>())
    }
}

/// Builds a trie containing every word in `words`.
///
/// The order of the words does not matter.
pub fn build_trie<I>(words: I) -> Trie<char>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .fold(Trie::new(), |trie, word| trie.insert_word(word.as_ref()))
}

/// Returns every stored word that starts with `partial`, in lexicographic order.
///
/// If `partial` is itself a stored word, it is part of the result.
pub fn autocomplete_word(trie: &Trie<char>, partial: &str) -> BTreeSet<String> {
    let prefix: Vec<char> = partial.chars().collect();

    trie.autocomplete(&prefix)
        .into_iter()
        .map(|suffix| {
            let mut word = String::from(partial);
            word.extend(suffix);
            word
        })
        .collect()
}
