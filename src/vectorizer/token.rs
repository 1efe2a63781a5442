use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TokenCounts structure
/// Tallies how often each token occurs within a single document.
/// It is the counting stage between the tokenizer and the vectorizer:
/// the vectorizer reads these counts out along the vocabulary's
/// dimension order.
///
/// # Examples
/// ```
/// use text_vectorizer::TokenCounts;
/// let mut counts = TokenCounts::new();
/// counts.add_token("times");
/// counts.add_token("best");
/// counts.add_token("times");
///
/// assert_eq!(counts.token_count("times"), 2);
/// assert_eq!(counts.token_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TokenCounts {
    #[serde(with = "indexmap::map::serde_seq")]
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

/// Token insertion
impl TokenCounts {
    /// Create an empty TokenCounts
    pub fn new() -> Self {
        TokenCounts {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Record one occurrence of a token
    ///
    /// # Arguments
    /// * `token` - the token to count
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        let count = self.token_count.entry(token.to_string()).or_insert(0);
        *count += 1;
        self.total_token_count += 1;
        self
    }

    /// Record one occurrence of each token in the slice
    ///
    /// # Arguments
    /// * `tokens` - slice of tokens to count
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    /// Reset every count
    #[inline]
    pub fn clear(&mut self) {
        self.token_count.clear();
        self.total_token_count = 0;
    }
}

/// Count lookups and statistics
impl TokenCounts {
    /// Occurrence count for one token (0 when absent)
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        *self.token_count.get(token).unwrap_or(&0)
    }

    /// Total occurrences across all tokens
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens seen
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    /// Whether the token occurred at all
    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }

    /// Iterate over (token, count) pairs in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.token_count
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
    }

    /// The set of distinct tokens
    /// Strings are borrowed from this structure
    ///
    /// # Returns
    /// * `Vec<&str>` - distinct tokens in first-seen order
    #[inline]
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(|s| s.as_str()).collect()
    }

    /// Occurrence count of the most frequent token
    /// 0 when no tokens have been recorded
    #[inline]
    pub fn most_frequent_token_count(&self) -> u32 {
        self.token_count.values().copied().max().unwrap_or(0)
    }

    /// Ratio of distinct tokens to total occurrences
    /// 1.0 means every token is unique, 0.0 means the document is empty
    #[inline]
    pub fn unique_token_ratio(&self) -> f64 {
        if self.total_token_count == 0 {
            return 0.0;
        }
        self.token_count.len() as f64 / self.total_token_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_bookkeeping() {
        let mut counts = TokenCounts::new();
        counts.add_tokens(&["it", "was", "the", "best", "of", "times"]);
        counts.add_token("times");

        assert_eq!(counts.token_count("times"), 2);
        assert_eq!(counts.token_count("absent"), 0);
        assert_eq!(counts.token_sum(), 7);
        assert_eq!(counts.token_num(), 6);
        assert!(counts.contains_token("best"));
        assert!(!counts.contains_token("worst"));
        assert_eq!(counts.most_frequent_token_count(), 2);
        // distinct tokens come back in first-seen order
        assert_eq!(
            counts.token_set_ref_str(),
            ["it", "was", "the", "best", "of", "times"]
        );
    }

    #[test]
    fn unique_ratio_edges() {
        let mut counts = TokenCounts::new();
        assert_eq!(counts.unique_token_ratio(), 0.0);

        counts.add_tokens(&["a", "b", "c"]);
        assert_eq!(counts.unique_token_ratio(), 1.0);

        counts.add_token("a");
        assert_eq!(counts.unique_token_ratio(), 0.75);
    }

    #[test]
    fn clear_resets_everything() {
        let mut counts = TokenCounts::new();
        counts.add_tokens(&["x", "y", "x"]);
        counts.clear();
        assert_eq!(counts.token_sum(), 0);
        assert_eq!(counts.token_num(), 0);
        assert_eq!(counts.most_frequent_token_count(), 0);
    }
}
