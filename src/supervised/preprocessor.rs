use crate::core::{Matrix, Summary};
use crate::error::{ModelError, Result};
use crate::normalization::{Normalizer, NormalizerChoice};
use serde::{Deserialize, Serialize};

/// Feature normalization replayed at prediction time.
///
/// Holds the flag, the normalizer and the training summary ("feature
/// properties"). While the flag is set both of the others are present; every
/// constructor and setter keeps it that way, and deserialized values are
/// checked on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPreprocessor")]
pub struct Preprocessor {
    normalize_features: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalizer: Option<NormalizerChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    feature_properties: Option<Summary>,
}

impl Preprocessor {
    /// Leaves every vector untouched.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn normalized(normalizer: NormalizerChoice, feature_properties: Summary) -> Self {
        Self {
            normalize_features: true,
            normalizer: Some(normalizer),
            feature_properties: Some(feature_properties),
        }
    }

    /// Summarizes the training matrix and enables normalization with it.
    pub fn fit(normalizer: NormalizerChoice, x: &Matrix) -> Result<Self> {
        let summary = Summary::summarize(x)?;
        log::debug!("fitted {} feature summaries for {normalizer:?}", summary.len());
        Ok(Self::normalized(normalizer, summary))
    }

    #[inline]
    pub fn normalize_features(&self) -> bool {
        self.normalize_features
    }

    /// Turns normalization on or off. Turning it on without a normalizer and
    /// a summary is a configuration error and leaves the flag unchanged.
    pub fn set_normalize_features(&mut self, on: bool) -> Result<()> {
        if on && (self.normalizer.is_none() || self.feature_properties.is_none()) {
            return Err(ModelError::Configuration(
                "normalization requires a normalizer and feature properties".into(),
            ));
        }
        self.normalize_features = on;
        log::debug!("feature normalization set to {on}");
        Ok(())
    }

    pub fn normalizer(&self) -> Option<&NormalizerChoice> {
        self.normalizer.as_ref()
    }

    pub fn feature_properties(&self) -> Option<&Summary> {
        self.feature_properties.as_ref()
    }

    pub fn validate(&self) -> Result<()> {
        if self.normalize_features && self.active().is_none() {
            return Err(ModelError::Configuration(
                "normalization requires a normalizer and feature properties".into(),
            ));
        }
        Ok(())
    }

    /// Normalizes `x` in place when the flag is set, otherwise hands it back
    /// as is. The returned buffer is the one passed in.
    pub fn preprocess(&self, x: Vec<f64>) -> Result<Vec<f64>> {
        if !self.normalize_features {
            return Ok(x);
        }
        let (normalizer, summary) = self.active().ok_or_else(|| {
            ModelError::Configuration(
                "normalization requires a normalizer and feature properties".into(),
            )
        })?;
        preprocess_with(normalizer, summary, x)
    }

    fn active(&self) -> Option<(&NormalizerChoice, &Summary)> {
        self.normalizer.as_ref().zip(self.feature_properties.as_ref())
    }
}

/// Runs `normalizer` over `x` and overwrites `x` element by element.
///
/// `x` must have one element per summary column.
pub fn preprocess_with<N: Normalizer + ?Sized>(
    normalizer: &N,
    summary: &Summary,
    mut x: Vec<f64>,
) -> Result<Vec<f64>> {
    if x.len() != summary.len() {
        return Err(ModelError::DimensionMismatch {
            expected: summary.len(),
            actual: x.len(),
        });
    }
    let xp = normalizer.normalize(&x, summary);
    if xp.len() != x.len() {
        return Err(ModelError::DimensionMismatch {
            expected: x.len(),
            actual: xp.len(),
        });
    }
    for (i, v) in xp.into_iter().enumerate() {
        x[i] = v;
    }
    Ok(x)
}

#[derive(Deserialize)]
struct RawPreprocessor {
    #[serde(default)]
    normalize_features: bool,
    #[serde(default)]
    normalizer: Option<NormalizerChoice>,
    #[serde(default)]
    feature_properties: Option<Summary>,
}

impl TryFrom<RawPreprocessor> for Preprocessor {
    type Error = ModelError;

    fn try_from(raw: RawPreprocessor) -> Result<Self> {
        let p = Preprocessor {
            normalize_features: raw.normalize_features,
            normalizer: raw.normalizer,
            feature_properties: raw.feature_properties,
        };
        p.validate()?;
        Ok(p)
    }
}
