use crate::core::Summary;

/// Stateless rescaling of a feature vector against training-time statistics.
///
/// Implementations must be pure: the same `(x, summary)` pair always maps to
/// the same output, and the output has exactly `x.len()` elements. Position
/// `i` of `x` is paired with column `i` of `summary`.
pub trait Normalizer {
    fn normalize(&self, x: &[f64], summary: &Summary) -> Vec<f64>;
}
