use crate::core::Summary;
use crate::normalization::Normalizer;

/// Rescales each feature to `[0, 1]` using the observed training range.
///
/// Constant columns map to `0.0`; columns missing from the summary map to `NaN`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinMaxNormalizer;

impl Normalizer for MinMaxNormalizer {
    fn normalize(&self, x: &[f64], summary: &Summary) -> Vec<f64> {
        x.iter()
            .enumerate()
            .map(|(i, &v)| match summary.feature(i) {
                Some(f) if f.range() == 0.0 => 0.0,
                Some(f) => (v - f.minimum) / f.range(),
                None => f64::NAN,
            })
            .collect()
    }
}
