pub mod compare;
pub mod token;
pub mod tokenizer;
pub mod vocab;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vectorizer::{tokenizer::token_counts, vocab::Vocabulary};

/// TextVectorizer structure
/// Eagerly derives a vocabulary and the count vectors for every document
/// at construction time, then holds them as immutable state. There is no
/// update or delete operation; build a new instance for a new corpus.
///
/// Index `i` of [`vectorized_corpus`](Self::vectorized_corpus) is the
/// vector of document `i` of the input corpus, and every vector has one
/// dimension per vocabulary token.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TextVectorizer {
    /// The documents the vocabulary was built from, in input order
    corpus: Vec<String>,
    /// Sorted unique tokens across the corpus
    vocabulary: Vocabulary,
    /// Count vectors, index-aligned with the corpus
    vectorized_corpus: Vec<Vec<u32>>,
}

impl TextVectorizer {
    /// Build a vectorizer from a corpus.
    ///
    /// # Arguments
    /// * `corpus` - ordered slice of documents; order fixes each
    ///   document's index in the vectorized corpus
    pub fn new<T>(corpus: &[T]) -> Self
    where
        T: AsRef<str> + Sync,
    {
        let vocabulary = Vocabulary::from_corpus(corpus);
        let vectorized_corpus = vectorize_corpus(corpus, &vocabulary);
        let corpus = corpus.iter().map(|doc| doc.as_ref().to_string()).collect();
        TextVectorizer {
            corpus,
            vocabulary,
            vectorized_corpus,
        }
    }

    /// The documents this vectorizer was built from
    #[inline]
    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    /// The corpus vocabulary
    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Count vectors for every document, index-aligned with the corpus
    #[inline]
    pub fn vectorized_corpus(&self) -> &[Vec<u32>] {
        &self.vectorized_corpus
    }

    /// Count vector of one document by corpus index
    #[inline]
    pub fn document_vector(&self, index: usize) -> Option<&[u32]> {
        self.vectorized_corpus.get(index).map(|v| v.as_slice())
    }

    /// Number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.vectorized_corpus.len()
    }

    /// Vectorize a document against this vectorizer's vocabulary.
    ///
    /// Works for new documents as well: tokens outside the vocabulary are
    /// silently dropped, they contribute nothing to the vector.
    #[inline]
    pub fn vectorize_document(&self, doc: &str) -> Vec<u32> {
        vectorize_document(doc, &self.vocabulary)
    }
}

/// Count a document's tokens along the vocabulary's dimension order.
///
/// The returned vector always has exactly one entry per vocabulary token;
/// position `i` holds the occurrence count of vocabulary token `i`.
/// Out-of-vocabulary tokens are dropped without error.
pub fn vectorize_document(doc: &str, vocabulary: &Vocabulary) -> Vec<u32> {
    let counts = token_counts(doc);
    let mut vector = vec![0u32; vocabulary.len()];
    for (token, count) in counts.iter() {
        if let Some(dim) = vocabulary.dim_of(token) {
            vector[dim] = count;
        }
    }
    vector
}

/// Vectorize every document in order.
///
/// Documents are independent, so they are mapped in parallel; the output
/// keeps the input order and is index-aligned with `corpus`.
pub fn vectorize_corpus<T>(corpus: &[T], vocabulary: &Vocabulary) -> Vec<Vec<u32>>
where
    T: AsRef<str> + Sync,
{
    corpus
        .par_iter()
        .map(|doc| vectorize_document(doc.as_ref(), vocabulary))
        .collect()
}
