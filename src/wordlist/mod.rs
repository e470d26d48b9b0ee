//! Reference word lists and the [`WordList`] model.
//!
//! Two lists are provided: the canonical BIP39 English list (2048 words,
//! supplied by the `bip39` crate) and the bundled share word list (1024
//! words). Both are ordered sequences of unique lowercase words in which no
//! two words share the same first four characters, so a four-character
//! prefix identifies a word losslessly. That uniqueness is supplied by the
//! list data and relied upon here, not enforced.

use std::collections::HashMap;
use std::sync::LazyLock;

use bip39::Language;

/// Number of leading characters that uniquely identify a word within a list
pub const PREFIX_LEN: usize = 4;

/// An immutable, ordered list of unique lowercase words
///
/// Built once at construction with derived lookup tables: word membership,
/// word/index positions (used by the share codec) and a map from each word's
/// first-4-character prefix to the word owning it. Words shorter than
/// [`PREFIX_LEN`] are keyed by their full spelling.
pub struct WordList {
    words: Vec<String>,
    positions: HashMap<String, usize>,
    prefix_owners: HashMap<String, usize>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(words.len());
        let mut prefix_owners = HashMap::with_capacity(words.len());

        for (idx, word) in words.iter().enumerate() {
            positions.insert(word.clone(), idx);
            let cut = word.len().min(PREFIX_LEN);
            prefix_owners.insert(word[..cut].to_string(), idx);
        }

        Self {
            words,
            positions,
            prefix_owners,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// Word at `index`, if in range
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Position of `word` within the list
    #[must_use]
    pub fn position(&self, word: &str) -> Option<usize> {
        self.positions.get(word).copied()
    }

    /// The unique word owning this first-4-character prefix, if any
    #[must_use]
    pub fn by_prefix(&self, prefix: &str) -> Option<&str> {
        self.prefix_owners
            .get(prefix)
            .map(|&idx| self.words[idx].as_str())
    }

    /// All words starting with `prefix`, whatever its length
    #[must_use]
    pub fn matching(&self, prefix: &str) -> Vec<&str> {
        self.words
            .iter()
            .filter(|word| word.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }
}

static BIP39: LazyLock<WordList> =
    LazyLock::new(|| WordList::new(Language::English.word_list().iter().copied()));

static SLIP39: LazyLock<WordList> =
    LazyLock::new(|| WordList::new(include_str!("slip39.txt").lines()));

/// The canonical BIP39 English word list (2048 entries)
pub fn bip39() -> &'static WordList {
    &BIP39
}

/// The share word list (1024 entries, SLIP39-style)
pub fn slip39() -> &'static WordList {
    &SLIP39
}
