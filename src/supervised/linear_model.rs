use crate::descriptor::Descriptor;
use crate::error::{ModelError, Result};
use crate::supervised::{Model, Persistable, Preprocessor};
use crate::utils::math::dot;
use serde::{Deserialize, Serialize};

/// Trained linear predictor: `theta · preprocess(x) + intercept`.
///
/// The descriptor is made of accessor functions and is not part of the
/// persisted state; reattach it with [`set_descriptor`](Self::set_descriptor)
/// after [`Persistable::from_json`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LinearModel<T> {
    #[serde(skip)]
    descriptor: Descriptor<T>,
    theta: Vec<f64>,
    #[serde(default)]
    intercept: f64,
    #[serde(default)]
    preprocessor: Preprocessor,
}

impl<T> LinearModel<T> {
    pub fn new(descriptor: Descriptor<T>, theta: Vec<f64>, intercept: f64) -> Self {
        Self {
            descriptor,
            theta,
            intercept,
            preprocessor: Preprocessor::disabled(),
        }
    }

    pub fn with_preprocessor(mut self, preprocessor: Preprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    pub fn set_descriptor(&mut self, descriptor: Descriptor<T>) {
        self.descriptor = descriptor;
    }

    pub fn preprocessor_mut(&mut self) -> &mut Preprocessor {
        &mut self.preprocessor
    }

    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl<T> Model for LinearModel<T> {
    type Item = T;

    fn descriptor(&self) -> &Descriptor<T> {
        &self.descriptor
    }

    fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    fn predict(&self, x: Vec<f64>) -> Result<f64> {
        let x = self.preprocess(x)?;
        if x.len() != self.theta.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.theta.len(),
                actual: x.len(),
            });
        }
        Ok(dot(&self.theta, &x) + self.intercept)
    }
}

impl<T> Persistable for LinearModel<T> {
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Matrix;
    use crate::descriptor::LabelValue;
    use crate::normalization::NormalizerKind;
    use crate::testing::dummies::{Point, point_descriptor};
    use serde_json::{Value, json};
    use tempfile::tempdir;

    fn model() -> LinearModel<Point> {
        LinearModel::new(point_descriptor(), vec![2.0, -1.0], 0.5)
    }

    #[test]
    fn predicts_affine_combination() {
        assert_eq!(model().predict(vec![3.0, 1.0]).unwrap(), 5.5);
        let p = model().predict_into(Point::new(1.0, 1.0)).unwrap();
        assert_eq!(p.value, Some(1.5));
    }

    #[test]
    fn rejects_vectors_of_the_wrong_length() {
        let err = model().predict(vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn replays_training_normalization() {
        let training = Matrix::from_rows(vec![vec![0.0, 0.0], vec![10.0, 2.0]]).unwrap();
        let preprocessor = Preprocessor::fit(NormalizerKind::MinMax.into(), &training).unwrap();
        let m = LinearModel::new(point_descriptor(), vec![1.0, 1.0], 0.0)
            .with_preprocessor(preprocessor);

        assert_eq!(m.predict(vec![5.0, 1.0]).unwrap(), 1.0);
        assert_eq!(m.predict_batch(&training).unwrap(), vec![0.0, 2.0]);
    }

    #[test]
    fn toggling_normalization_after_training() {
        let training = Matrix::from_rows(vec![vec![0.0, 0.0], vec![10.0, 2.0]]).unwrap();
        let preprocessor = Preprocessor::fit(NormalizerKind::MinMax.into(), &training).unwrap();
        let mut m = LinearModel::new(point_descriptor(), vec![1.0, 1.0], 0.0)
            .with_preprocessor(preprocessor);
        m.preprocessor_mut().set_normalize_features(false).unwrap();
        assert_eq!(m.predict(vec![5.0, 1.0]).unwrap(), 6.0);
    }

    #[test]
    fn json_excludes_descriptor() {
        let v: Value = serde_json::from_str(&model().to_json().unwrap()).unwrap();
        assert_eq!(v.get("theta"), Some(&json!([2.0, -1.0])));
        assert_eq!(v.get("intercept"), Some(&json!(0.5)));
        assert!(v.get("descriptor").is_none());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let training = Matrix::from_rows(vec![vec![0.0, 0.0], vec![4.0, 8.0]]).unwrap();
        let preprocessor = Preprocessor::fit(NormalizerKind::ZScore.into(), &training).unwrap();
        let original = model().with_preprocessor(preprocessor);

        let dir = tempdir().unwrap();
        let path = dir.path().join("linear.json");
        original.save(&path).unwrap();

        let mut restored = LinearModel::<Point>::load(&path).unwrap();
        assert_eq!(restored.theta(), original.theta());
        assert_eq!(restored.preprocessor(), original.preprocessor());
        assert!(matches!(
            restored.predict_value(&Point::new(1.0, 1.0)),
            Err(ModelError::MissingLabel)
        ));

        restored.set_descriptor(point_descriptor());
        let p = Point::new(3.0, 2.0);
        assert_eq!(
            restored.predict_value(&p).unwrap(),
            original.predict_value(&p).unwrap()
        );
        assert!(matches!(
            restored.predict_value(&p).unwrap(),
            LabelValue::Number(_)
        ));
    }

    #[test]
    fn load_reports_missing_files_and_bad_state() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            LinearModel::<Point>::load(dir.path().join("absent.json")),
            Err(ModelError::Io(_))
        ));

        let bad = json!({ "theta": [1.0], "preprocessor": { "normalize_features": true } });
        assert!(matches!(
            LinearModel::<Point>::from_json(&bad.to_string()),
            Err(ModelError::Serialization(_))
        ));
    }
}
