#![forbid(unsafe_code)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", env!("CARGO_PKG_README")))]

mod node;

pub mod decompose;
pub mod trie;
pub mod words;

pub use decompose::Decompose;
pub use trie::{Trie, Iter};
pub use words::{build_trie, autocomplete_word};

#[cfg(test)]
mod proptests;
