/// Errors for vector comparison.
///
/// Vectorization itself is total: every document maps to a vector, so the
/// only fallible surface is pairwise comparison of vectors the caller
/// supplies.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The two vectors do not share a dimensionality.
    /// Truncating to the shorter vector would hide a vocabulary mismatch,
    /// so unequal lengths are rejected outright.
    #[error("vector dimension mismatch: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },
}
