use text_vectorizer::{cosine_similarity, TextVectorizer};

/// Pairwise similarity of every document against every other.
fn main() {
    let corpus = [
        "the quick brown fox jumps over the lazy dog",
        "a quick brown dog outpaces a lazy fox",
        "rust gives memory safety without garbage collection",
        "the lazy dog sleeps",
    ];
    let vectorizer = TextVectorizer::new(&corpus);
    let vectors = vectorizer.vectorized_corpus();

    for (i, a) in vectors.iter().enumerate() {
        for (j, b) in vectors.iter().enumerate().skip(i + 1) {
            let similarity =
                cosine_similarity(a, b).expect("corpus vectors share one vocabulary");
            println!("doc{i} vs doc{j}: {similarity:.4}");
        }
    }
}
