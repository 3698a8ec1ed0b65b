use crate::core::Matrix;
use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// Training-time statistics of a single feature column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSummary {
    pub average: f64,
    pub standard_deviation: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub median: f64,
}

impl FeatureSummary {
    /// Summary carrying only a range; moments are derived from it.
    pub fn with_range(minimum: f64, maximum: f64) -> Self {
        Self {
            average: (minimum + maximum) / 2.0,
            standard_deviation: (maximum - minimum) / 2.0,
            minimum,
            maximum,
            median: (minimum + maximum) / 2.0,
        }
    }

    /// Summarizes the finite values of one column. `NaN`s are treated as missing.
    pub fn of(values: &[f64]) -> Self {
        let mut seen: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if seen.is_empty() {
            return Self {
                average: f64::NAN,
                standard_deviation: f64::NAN,
                minimum: f64::NAN,
                maximum: f64::NAN,
                median: f64::NAN,
            };
        }
        seen.sort_by(f64::total_cmp);

        let n = seen.len() as f64;
        let average = seen.iter().sum::<f64>() / n;
        let variance = seen.iter().map(|v| (v - average).powi(2)).sum::<f64>() / n;
        let mid = seen.len() / 2;
        let median = if seen.len() % 2 == 0 {
            (seen[mid - 1] + seen[mid]) / 2.0
        } else {
            seen[mid]
        };

        Self {
            average,
            standard_deviation: variance.sqrt(),
            minimum: seen[0],
            maximum: seen[seen.len() - 1],
            median,
        }
    }

    #[inline]
    pub fn range(&self) -> f64 {
        self.maximum - self.minimum
    }
}

/// Per-feature statistics keyed by feature column index.
///
/// Immutable once computed; it must stay index-aligned with the feature
/// vectors it is later applied to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    features: Vec<FeatureSummary>,
}

impl Summary {
    pub fn new(features: Vec<FeatureSummary>) -> Self {
        Self { features }
    }

    /// Computes column statistics over a training matrix.
    pub fn summarize(x: &Matrix) -> Result<Self> {
        if x.rows() == 0 {
            return Err(ModelError::Configuration(
                "cannot summarize a matrix without rows".into(),
            ));
        }
        let mut features = Vec::with_capacity(x.cols());
        for col in 0..x.cols() {
            let values = x.column(col).unwrap_or_default();
            let summary = FeatureSummary::of(&values);
            if summary.range() == 0.0 {
                log::warn!("feature column {col} is constant ({})", summary.minimum);
            }
            features.push(summary);
        }
        Ok(Self { features })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn feature(&self, index: usize) -> Option<&FeatureSummary> {
        self.features.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureSummary> {
        self.features.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;

    #[test]
    fn column_statistics() {
        let s = FeatureSummary::of(&[1.0, 3.0, 2.0, 6.0]);
        assert!((s.average - 3.0).abs() < EPS);
        assert!((s.minimum - 1.0).abs() < EPS);
        assert!((s.maximum - 6.0).abs() < EPS);
        assert!((s.median - 2.5).abs() < EPS);
        assert!((s.standard_deviation - 3.5f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn nan_values_are_ignored() {
        let s = FeatureSummary::of(&[f64::NAN, 4.0, 2.0, 3.0]);
        assert!((s.median - 3.0).abs() < EPS);
        assert!((s.average - 3.0).abs() < EPS);

        let all_missing = FeatureSummary::of(&[f64::NAN]);
        assert!(all_missing.average.is_nan());
    }

    #[test]
    fn summarize_is_index_aligned() {
        let x = Matrix::from_rows(vec![vec![0.0, 1.0], vec![10.0, 0.0], vec![5.0, 0.5]]).unwrap();
        let summary = Summary::summarize(&x).unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.feature(0).unwrap().maximum, 10.0);
        assert_eq!(summary.feature(1).unwrap().minimum, 0.0);
        assert!(summary.feature(2).is_none());

        let maxima: Vec<f64> = summary.iter().map(|f| f.maximum).collect();
        assert_eq!(maxima, vec![10.0, 1.0]);
    }

    #[test]
    fn summarize_rejects_empty_matrix() {
        let err = Summary::summarize(&Matrix::zeros(0, 3)).unwrap_err();
        assert!(matches!(err, ModelError::Configuration(_)));
    }

    #[test]
    fn with_range_sets_bounds() {
        let s = FeatureSummary::with_range(0.0, 10.0);
        assert_eq!(s.range(), 10.0);
        assert_eq!(s.average, 5.0);
    }
}
