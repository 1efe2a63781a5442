use text_vectorizer::{cosine_similarity, Error, TextVectorizer, Vocabulary};

fn dickens_corpus() -> [&'static str; 4] {
    [
        "it was the best of times",
        "it was the worst of times",
        "it was the age of wisdom",
        "it was the age of foolishness",
    ]
}

#[test]
fn vocabulary_of_reference_corpus() {
    let vectorizer = TextVectorizer::new(&dickens_corpus());
    let expected = [
        "age",
        "best",
        "foolishness",
        "it",
        "of",
        "the",
        "times",
        "was",
        "wisdom",
        "worst",
    ];
    assert_eq!(vectorizer.vocabulary().tokens(), expected);
    assert_eq!(vectorizer.vocabulary().len(), 10);
}

#[test]
fn vocabulary_is_strictly_sorted_and_unique() {
    let vectorizer = TextVectorizer::new(&dickens_corpus());
    let tokens = vectorizer.vocabulary().tokens();
    for pair in tokens.windows(2) {
        assert!(pair[0] < pair[1], "{:?} not strictly before {:?}", pair[0], pair[1]);
    }
}

#[test]
fn vectorization_shape() {
    let vectorizer = TextVectorizer::new(&dickens_corpus());
    let vectors = vectorizer.vectorized_corpus();
    assert_eq!(vectors.len(), 4);
    for vector in vectors {
        assert_eq!(vector.len(), 10);
    }
}

#[test]
fn vector_values_of_first_document() {
    let vectorizer = TextVectorizer::new(&dickens_corpus());
    // "it was the best of times"
    assert_eq!(
        vectorizer.document_vector(0).unwrap(),
        [0, 1, 0, 1, 1, 1, 1, 1, 0, 0]
    );
}

#[test]
fn cosine_similarity_self() {
    let vectorizer = TextVectorizer::new(&dickens_corpus());
    let vectors = vectorizer.vectorized_corpus();
    let sim = cosine_similarity(&vectors[0], &vectors[0]).unwrap();
    assert!((sim - 1.0).abs() < 1e-12);
}

#[test]
fn cosine_similarity_between_wisdom_and_foolishness() {
    let vectorizer = TextVectorizer::new(&dickens_corpus());
    let vectors = vectorizer.vectorized_corpus();
    let sim = cosine_similarity(&vectors[2], &vectors[3]).unwrap();
    assert!((sim - 0.8333333).abs() < 1e-4, "got {sim}");
}

#[test]
fn cosine_similarity_is_symmetric_across_corpus() {
    let vectorizer = TextVectorizer::new(&dickens_corpus());
    let vectors = vectorizer.vectorized_corpus();
    for a in vectors {
        for b in vectors {
            assert_eq!(
                cosine_similarity(a, b).unwrap(),
                cosine_similarity(b, a).unwrap()
            );
        }
    }
}

#[test]
fn zero_vector_similarity() {
    let sim = cosine_similarity(&[0u32, 0, 0], &[1u32, 0, 0]).unwrap();
    assert_eq!(sim, 0.0);
}

#[test]
fn mismatched_dimensions_are_a_caller_error() {
    let err = cosine_similarity(&[1u32, 2, 3], &[1u32, 2]).unwrap_err();
    assert_eq!(err, Error::DimensionMismatch { left: 3, right: 2 });
}

#[test]
fn new_document_against_fixed_vocabulary() {
    let vectorizer = TextVectorizer::new(&dickens_corpus());
    // "spring" and "hope" are out of vocabulary and must vanish
    let vector = vectorizer.vectorize_document("it was the spring of hope");
    assert_eq!(vector, [0, 0, 0, 1, 1, 1, 0, 1, 0, 0]);
    assert_eq!(vector.len(), vectorizer.vocabulary().len());
}

#[test]
fn standalone_vocabulary_and_free_functions() {
    let corpus = dickens_corpus();
    let vocab = Vocabulary::from_corpus(&corpus);
    let vectors = text_vectorizer::vectorizer::vectorize_corpus(&corpus, &vocab);
    let vectorizer = TextVectorizer::new(&corpus);
    assert_eq!(vectors, vectorizer.vectorized_corpus());
}

#[test]
fn vectorizer_survives_a_serde_round_trip() {
    let vectorizer = TextVectorizer::new(&dickens_corpus());
    let json = serde_json::to_string(&vectorizer).unwrap();
    let restored: TextVectorizer = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.corpus(), vectorizer.corpus());
    assert_eq!(
        restored.vocabulary().tokens(),
        vectorizer.vocabulary().tokens()
    );
    assert_eq!(restored.vectorized_corpus(), vectorizer.vectorized_corpus());
    // the restored dimension index still resolves tokens
    for (dim, token) in vectorizer.vocabulary().iter().enumerate() {
        assert_eq!(restored.vocabulary().dim_of(token), Some(dim));
    }
}

#[test]
fn vocabulary_counts_every_distinct_token_once() {
    let corpus = ["one two two", "two three", ""];
    let vectorizer = TextVectorizer::new(&corpus);
    assert_eq!(vectorizer.vocabulary().tokens(), ["one", "three", "two"]);
    assert_eq!(vectorizer.document_vector(0).unwrap(), [1, 0, 2]);
    assert_eq!(vectorizer.document_vector(2).unwrap(), [0, 0, 0]);
}
