use crate::core::Matrix;
use crate::error::Result;
use crate::normalization::NormalizerChoice;
use crate::supervised::Preprocessor;
use anyhow::Context;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_normalize_features() -> bool {
    false
}

/// How a model should preprocess its features, as written in a config file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PreprocessingConfig {
    #[serde(default = "default_normalize_features")]
    #[schemars(
        title = "Normalize features?",
        description = "Replay training-time feature normalization before predicting.",
        default = "default_normalize_features"
    )]
    pub normalize_features: bool,

    #[serde(default)]
    #[schemars(
        title = "Normalizer",
        description = "Normalizer applied when feature normalization is enabled."
    )]
    pub normalizer: NormalizerChoice,
}

impl Default for PreprocessingConfig {
    fn default() -> Self {
        Self {
            normalize_features: default_normalize_features(),
            normalizer: NormalizerChoice::default(),
        }
    }
}

impl PreprocessingConfig {
    pub fn schema() -> Schema {
        schema_for!(PreprocessingConfig)
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid preprocessing config")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("cannot read preprocessing config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Preprocessor for a model trained on `training`.
    pub fn build(&self, training: &Matrix) -> Result<Preprocessor> {
        if self.normalize_features {
            Preprocessor::fit(self.normalizer.clone(), training)
        } else {
            Ok(Preprocessor::disabled())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalization::{NoParams, NormalizerKind};
    use serde_json::{Value, json};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn root_props() -> Value {
        let v = serde_json::to_value(PreprocessingConfig::schema()).expect("schema to JSON");
        v.get("properties").cloned().unwrap_or_else(|| json!({}))
    }

    #[test]
    fn missing_fields_apply_defaults() {
        let c = PreprocessingConfig::from_json_str("{}").unwrap();
        assert_eq!(c, PreprocessingConfig::default());
        assert!(!c.normalize_features);
        assert_eq!(c.normalizer, NormalizerChoice::MinMax(NoParams::default()));
    }

    #[test]
    fn reads_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            json!({ "normalize_features": true, "normalizer": { "type": "z-score", "params": {} } })
        )
        .unwrap();

        let c = PreprocessingConfig::from_file(file.path()).unwrap();
        assert!(c.normalize_features);
        assert_eq!(c.normalizer, NormalizerChoice::from(NormalizerKind::ZScore));
    }

    #[test]
    fn errors_carry_the_file_name() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ \"normalizer\": {{ \"type\": \"unit-vector\" }} }}").unwrap();
        let err = PreprocessingConfig::from_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains(&file.path().display().to_string()));

        assert!(PreprocessingConfig::from_file("/definitely/not/here.json").is_err());
    }

    #[test]
    fn build_respects_the_flag() {
        let training = Matrix::from_rows(vec![vec![0.0], vec![10.0]]).unwrap();
        let disabled = PreprocessingConfig::default().build(&training).unwrap();
        assert!(!disabled.normalize_features());

        let enabled = PreprocessingConfig {
            normalize_features: true,
            ..Default::default()
        }
        .build(&training)
        .unwrap();
        assert_eq!(enabled.preprocess(vec![2.5]).unwrap(), vec![0.25]);
    }

    #[test]
    fn schema_describes_fields() {
        let props = root_props();
        let flag = props.get("normalize_features").expect("flag property");
        assert_eq!(
            flag.get("title").and_then(Value::as_str),
            Some("Normalize features?")
        );
        assert_eq!(flag.get("default"), Some(&json!(false)));
        assert!(props.get("normalizer").is_some());
    }
}
