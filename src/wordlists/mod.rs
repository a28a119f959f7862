//! Word lists and the dictionary store
//!
//! Sources hand out raw list text, the store normalizes and caches it per
//! `(language, length)`, and the daily service picks the word of the day.

pub mod daily;
mod embedded;
pub mod loader;
pub mod source;
pub mod store;

pub use daily::{DateSeededDaily, WordOfTheDay};
pub use embedded::WORD_LISTS;
pub use source::{
    DirectoryWordLists, EmbeddedWordLists, LayeredWordLists, WordListRole, WordListSource,
};
pub use store::{Dictionary, WordDictionaryKey, WordStore, WordValidator};
