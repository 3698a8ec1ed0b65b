use crate::core::Summary;
use crate::normalization::Normalizer;
use crate::utils::math::sigmoid;

/// Squashes each feature through the logistic function. Ignores the summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogisticNormalizer;

impl Normalizer for LogisticNormalizer {
    fn normalize(&self, x: &[f64], _summary: &Summary) -> Vec<f64> {
        x.iter().map(|&v| sigmoid(v)).collect()
    }
}
