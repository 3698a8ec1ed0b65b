use crate::core::Summary;
use crate::normalization::{LogisticNormalizer, MinMaxNormalizer, Normalizer, ZScoreNormalizer};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Empty parameter object so every choice still carries a "params" key
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoParams {}

/// Built-in normalizers, as stored in model state and configuration files.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(NormalizerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum NormalizerChoice {
    #[strum_discriminants(strum(
        message = "Min-Max",
        detailed_message = "Rescale each feature to [0, 1] using its training range."
    ))]
    MinMax(NoParams),
    #[strum_discriminants(strum(
        message = "Z-Score",
        detailed_message = "Center on the training mean, scale by standard deviation."
    ))]
    ZScore(NoParams),
    #[strum_discriminants(strum(
        message = "Logistic",
        detailed_message = "Squash each feature through the logistic function."
    ))]
    Logistic(NoParams),
}

impl Default for NormalizerChoice {
    fn default() -> Self {
        Self::MinMax(NoParams::default())
    }
}

impl From<NormalizerKind> for NormalizerChoice {
    fn from(kind: NormalizerKind) -> Self {
        match kind {
            NormalizerKind::MinMax => Self::MinMax(NoParams::default()),
            NormalizerKind::ZScore => Self::ZScore(NoParams::default()),
            NormalizerKind::Logistic => Self::Logistic(NoParams::default()),
        }
    }
}

impl Normalizer for NormalizerChoice {
    fn normalize(&self, x: &[f64], summary: &Summary) -> Vec<f64> {
        match self {
            Self::MinMax(_) => MinMaxNormalizer.normalize(x, summary),
            Self::ZScore(_) => ZScoreNormalizer.normalize(x, summary),
            Self::Logistic(_) => LogisticNormalizer.normalize(x, summary),
        }
    }
}
