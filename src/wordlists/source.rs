//! Word list sources
//!
//! A source hands out raw list text for a `(language, length, role)` triple.
//! All normalization happens in the store, so sources stay dumb.

use super::embedded::WORD_LISTS;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Which of the two lists for a key is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordListRole {
    /// Words that may be picked as the hidden target
    Solutions,
    /// Additional words accepted as guesses
    Guesses,
}

impl WordListRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solutions => "solutions",
            Self::Guesses => "guesses",
        }
    }
}

impl fmt::Display for WordListRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of a list, e.g. `solutions_en_5`
#[must_use]
pub fn list_name(language: &str, length: usize, role: WordListRole) -> String {
    format!("{role}_{}_{length}", language.to_lowercase())
}

/// Provider of raw, whitespace-delimited word list text
pub trait WordListSource {
    /// Returns the list text, or `None` when no such list exists
    fn load(&self, language: &str, length: usize, role: WordListRole) -> Option<String>;
}

impl<T: WordListSource + ?Sized> WordListSource for Arc<T> {
    fn load(&self, language: &str, length: usize, role: WordListRole) -> Option<String> {
        (**self).load(language, length, role)
    }
}

/// Lists compiled into the binary from `data/`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordLists;

impl WordListSource for EmbeddedWordLists {
    fn load(&self, language: &str, length: usize, role: WordListRole) -> Option<String> {
        let name = list_name(language, length, role);
        WORD_LISTS
            .iter()
            .find(|(list, _)| *list == name)
            .map(|(_, text)| (*text).to_string())
    }
}

/// Lists read from `{root}/{name}.txt`
#[derive(Debug, Clone)]
pub struct DirectoryWordLists {
    root: PathBuf,
}

impl DirectoryWordLists {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl WordListSource for DirectoryWordLists {
    fn load(&self, language: &str, length: usize, role: WordListRole) -> Option<String> {
        let path = self
            .root
            .join(format!("{}.txt", list_name(language, length, role)));

        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), "read word list");
                Some(text)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read word list");
                None
            }
        }
    }
}

/// Sources chained in order; the first one that has a list wins
///
/// Lets a words directory override single lists while the embedded ones fill
/// in the rest.
pub struct LayeredWordLists {
    layers: Vec<Box<dyn WordListSource + Send + Sync>>,
}

impl LayeredWordLists {
    #[must_use]
    pub fn new(layers: Vec<Box<dyn WordListSource + Send + Sync>>) -> Self {
        Self { layers }
    }
}

impl WordListSource for LayeredWordLists {
    fn load(&self, language: &str, length: usize, role: WordListRole) -> Option<String> {
        self.layers
            .iter()
            .find_map(|layer| layer.load(language, length, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn list_names() {
        assert_eq!(
            list_name("EN", 5, WordListRole::Solutions),
            "solutions_en_5"
        );
        assert_eq!(list_name("pl", 6, WordListRole::Guesses), "guesses_pl_6");
    }

    #[test]
    fn embedded_has_english_five_letter_lists() {
        assert!(
            EmbeddedWordLists
                .load("en", 5, WordListRole::Guesses)
                .is_some()
        );

        let text = EmbeddedWordLists
            .load("en", 5, WordListRole::Solutions)
            .unwrap();
        assert!(text.lines().any(|line| line.trim() == "crane"));
    }

    #[test]
    fn embedded_missing_list_is_none() {
        assert!(EmbeddedWordLists.load("xx", 5, WordListRole::Solutions).is_none());
        assert!(EmbeddedWordLists.load("en", 6, WordListRole::Guesses).is_none());
    }

    #[test]
    fn directory_reads_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = File::create(dir.path().join("solutions_de_4.txt")).unwrap();
        writeln!(file, "haus\nbaum").unwrap();

        let source = DirectoryWordLists::new(dir.path());
        let text = source.load("de", 4, WordListRole::Solutions).unwrap();
        assert!(text.contains("baum"));
        assert!(source.load("de", 4, WordListRole::Guesses).is_none());
    }

    #[test]
    fn layered_prefers_first_layer() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = File::create(dir.path().join("solutions_en_5.txt")).unwrap();
        writeln!(file, "zebra").unwrap();

        let source = LayeredWordLists::new(vec![
            Box::new(DirectoryWordLists::new(dir.path())),
            Box::new(EmbeddedWordLists),
        ]);

        assert_eq!(
            source.load("en", 5, WordListRole::Solutions).unwrap().trim(),
            "zebra"
        );
        // Falls through to the embedded guesses
        assert!(source.load("en", 5, WordListRole::Guesses).is_some());
    }
}
