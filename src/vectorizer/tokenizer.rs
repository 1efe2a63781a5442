use crate::vectorizer::token::TokenCounts;

/// Word characters are Unicode letters, digits, and the underscore.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into lowercase word tokens.
///
/// The text is lowercased, then maximal runs of word characters are
/// extracted in left-to-right order. Punctuation and whitespace are
/// discarded and never produce empty tokens. Repeated words yield
/// repeated tokens; deduplication is the vocabulary's job.
///
/// # Examples
/// ```
/// use text_vectorizer::vectorizer::tokenizer::tokenize;
/// let tokens = tokenize("It was the best of times!");
/// assert_eq!(tokens, ["it", "was", "the", "best", "of", "times"]);
/// ```
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|run| !run.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize text and tally occurrences in one pass.
///
/// # Returns
/// * `TokenCounts` - per-token occurrence counts for the text
#[inline]
pub fn token_counts(text: &str) -> TokenCounts {
    let mut counts = TokenCounts::new();
    for run in text
        .to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|run| !run.is_empty())
    {
        counts.add_token(run);
    }
    counts
}
