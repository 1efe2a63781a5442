use text_vectorizer::{cosine_similarity, TextVectorizer};

fn main() {
    // build vectorizer from corpus
    let corpus = [
        "it was the best of times",
        "it was the worst of times",
        "it was the age of wisdom",
        "it was the age of foolishness",
    ];
    let vectorizer = TextVectorizer::new(&corpus);

    // print vocabulary and vectors
    println!("Vocabulary: {:?}", vectorizer.vocabulary().tokens());
    for (doc, vector) in corpus.iter().zip(vectorizer.vectorized_corpus()) {
        println!("{vector:?}  <- {doc:?}");
    }

    // cosine similarity between two documents
    let vectors = vectorizer.vectorized_corpus();
    let similarity = cosine_similarity(&vectors[2], &vectors[3])
        .expect("corpus vectors share one vocabulary");
    println!("Cosine Similarity: {similarity}");
}
