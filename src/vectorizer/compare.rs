//! Vector comparison functions.
//!
//! All functions are pure and generic over the component type: integer
//! count vectors and float vectors alike are promoted to `f64` before any
//! division. Pairwise functions validate that both vectors share a
//! dimensionality and refuse to pair mismatched lengths, since silent
//! truncation would hide a vocabulary mismatch between the callers.

use num::Num;

use crate::error::Error;

#[inline]
fn check_dims(left: usize, right: usize) -> Result<(), Error> {
    if left != right {
        return Err(Error::DimensionMismatch { left, right });
    }
    Ok(())
}

/// Dot product
/// d(a, b) = Σ(a_i * b_i)
#[inline]
pub fn dot<N>(a: &[N], b: &[N]) -> Result<f64, Error>
where
    N: Num + Copy + Into<f64>,
{
    check_dims(a.len(), b.len())?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let x: f64 = x.into();
            let y: f64 = y.into();
            x * y
        })
        .sum())
}

/// Euclidean magnitude
/// ||v|| = sqrt(Σ(v_i^2))
#[inline]
pub fn magnitude<N>(v: &[N]) -> f64
where
    N: Num + Copy + Into<f64>,
{
    v.iter()
        .map(|&x| {
            let x: f64 = x.into();
            x * x
        })
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// If either vector has zero magnitude the similarity is defined as `0.0`
/// instead of failing on the division, so the function is total over
/// all-zero inputs. Otherwise the result lies in `[-1.0, 1.0]`; it is
/// clamped against float rounding that could push it just past 1.
///
/// # Errors
/// `Error::DimensionMismatch` when the vectors differ in length.
///
/// # Examples
/// ```
/// use text_vectorizer::cosine_similarity;
/// let sim = cosine_similarity(&[1u32, 0, 1], &[1u32, 0, 1]).unwrap();
/// assert!((sim - 1.0).abs() < 1e-12);
/// ```
pub fn cosine_similarity<N>(a: &[N], b: &[N]) -> Result<f64, Error>
where
    N: Num + Copy + Into<f64>,
{
    check_dims(a.len(), b.len())?;
    let magnitude_a = magnitude(a);
    let magnitude_b = magnitude(b);
    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return Ok(0.0);
    }
    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let x: f64 = x.into();
            let y: f64 = y.into();
            x * y
        })
        .sum();
    Ok((dot / (magnitude_a * magnitude_b)).clamp(-1.0, 1.0))
}

/// Euclidean distance
/// d(a, b) = sqrt(Σ((a_i - b_i)^2))
#[inline]
pub fn euclidean_distance<N>(a: &[N], b: &[N]) -> Result<f64, Error>
where
    N: Num + Copy + Into<f64>,
{
    check_dims(a.len(), b.len())?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let x: f64 = x.into();
            let y: f64 = y.into();
            (x - y) * (x - y)
        })
        .sum::<f64>()
        .sqrt())
}

/// Manhattan distance
/// d(a, b) = Σ(|a_i - b_i|)
#[inline]
pub fn manhattan_distance<N>(a: &[N], b: &[N]) -> Result<f64, Error>
where
    N: Num + Copy + Into<f64>,
{
    check_dims(a.len(), b.len())?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let x: f64 = x.into();
            let y: f64 = y.into();
            (x - y).abs()
        })
        .sum())
}

/// Chebyshev distance
/// d(a, b) = max(|a_i - b_i|)
#[inline]
pub fn chebyshev_distance<N>(a: &[N], b: &[N]) -> Result<f64, Error>
where
    N: Num + Copy + Into<f64>,
{
    check_dims(a.len(), b.len())?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let x: f64 = x.into();
            let y: f64 = y.into();
            (x - y).abs()
        })
        .fold(0.0, f64::max))
}
