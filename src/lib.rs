/// This crate is a minimal bag-of-words Text Vectorization engine.
/// It converts a document collection into count vectors over a shared
/// vocabulary and computes cosine similarity between such vectors.
pub mod error;
pub mod vectorizer;

/// Text Vectorizer
/// The top-level struct of this crate. It builds a vocabulary from a
/// corpus and converts every document into a count vector aligned to
/// that vocabulary.
///
/// Internally, it holds:
/// - The input corpus
/// - The corpus vocabulary (sorted unique tokens)
/// - A count vector per document, index-aligned with the corpus
///
/// Everything is derived eagerly at construction time and is immutable
/// afterward, so an instance can be shared read-only across threads.
/// There is no incremental update; build a new instance for a new corpus.
///
/// # Serialization
/// Supported, including the held corpus and vocabulary.
pub use vectorizer::TextVectorizer;

/// Vocabulary for the Text Vectorizer
/// The sorted, deduplicated token set of a corpus. It defines vector
/// dimensionality and the meaning of each dimension, and resolves tokens
/// to dimensions for vectorization.
///
/// Can also be built standalone via `Vocabulary::from_corpus` and used
/// with the free `vectorize_document` / `vectorize_corpus` functions.
pub use vectorizer::vocab::Vocabulary;

/// Token Counts structure
/// Per-document token occurrence counts, the intermediate between the
/// tokenizer and the vectorizer. Provides adding tokens, count lookup,
/// and simple statistics (totals, most frequent count, unique ratio).
pub use vectorizer::token::TokenCounts;

/// Cosine Similarity
/// Normalized dot-product similarity between two equal-length vectors,
/// in `[-1.0, 1.0]`. Zero-magnitude input is defined to compare as `0.0`
/// rather than failing; unequal lengths are rejected with
/// [`Error::DimensionMismatch`].
///
/// Generic over the component type: integer count vectors and float
/// vectors alike. Further comparison functions (dot product, Euclidean,
/// Manhattan and Chebyshev distance) live in [`vectorizer::compare`].
pub use vectorizer::compare::cosine_similarity;

/// Crate error type
/// The only fallible surface is pairwise vector comparison; everything
/// else is total by construction.
pub use error::Error;
