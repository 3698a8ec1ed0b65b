use crate::core::Summary;
use crate::normalization::Normalizer;

/// Centers each feature on its training mean and scales by its standard deviation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZScoreNormalizer;

impl Normalizer for ZScoreNormalizer {
    fn normalize(&self, x: &[f64], summary: &Summary) -> Vec<f64> {
        x.iter()
            .enumerate()
            .map(|(i, &v)| match summary.feature(i) {
                Some(f) if f.standard_deviation == 0.0 => 0.0,
                Some(f) => (v - f.average) / f.standard_deviation,
                None => f64::NAN,
            })
            .collect()
    }
}
