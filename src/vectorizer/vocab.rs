use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::tokenizer;

/// Vocabulary structure
/// The sorted, deduplicated set of tokens across a corpus. It defines the
/// dimensionality of every document vector and the meaning of each
/// dimension: position `i` of a vector counts occurrences of token `i`.
///
/// The vocabulary is fixed once built. Alongside the sorted token list it
/// keeps a token-to-dimension index so vectorization does not scan the
/// list per token.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Vocabulary {
    /// Tokens in dimension order (lexicographically sorted, unique)
    tokens: Vec<String>,
    /// Reverse index: token to its dimension
    #[serde(with = "indexmap::map::serde_seq")]
    dim_index: IndexMap<Box<str>, usize>,
}

impl Vocabulary {
    /// Build the vocabulary for a corpus.
    ///
    /// Every document is tokenized, the tokens are unioned into a set, and
    /// the set is sorted lexicographically. Sorting makes the dimension
    /// order deterministic regardless of document order. An empty corpus,
    /// or one containing only empty or non-word strings, yields an empty
    /// vocabulary.
    ///
    /// # Arguments
    /// * `corpus` - ordered slice of documents
    pub fn from_corpus<T>(corpus: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for doc in corpus {
            set.extend(tokenizer::tokenize(doc.as_ref()));
        }
        Self::from_sorted_set(set)
    }

    fn from_sorted_set(set: BTreeSet<String>) -> Self {
        let tokens: Vec<String> = set.into_iter().collect();
        let dim_index = tokens
            .iter()
            .enumerate()
            .map(|(dim, token)| (Box::<str>::from(token.as_str()), dim))
            .collect();
        Vocabulary { tokens, dim_index }
    }

    /// Number of dimensions
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the vocabulary has no tokens
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in dimension order
    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Dimension of a token, `None` when out of vocabulary
    #[inline]
    pub fn dim_of(&self, token: &str) -> Option<usize> {
        self.dim_index.get(token).copied()
    }

    /// Whether the token is part of the vocabulary
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.dim_index.contains_key(token)
    }

    /// Iterate over tokens in dimension order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(|s| s.as_str())
    }
}
