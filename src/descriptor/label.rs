use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Domain-typed value of a label column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LabelValue {
    Number(f64),
    Boolean(bool),
    Category(String),
}

impl Display for LabelValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelValue::Number(v) => write!(f, "{v}"),
            LabelValue::Boolean(b) => write!(f, "{b}"),
            LabelValue::Category(c) => write!(f, "{c}"),
        }
    }
}

impl TryFrom<LabelValue> for f64 {
    type Error = ModelError;

    fn try_from(value: LabelValue) -> Result<Self> {
        match value {
            LabelValue::Number(v) => Ok(v),
            other => Err(ModelError::cast("f64", format!("{other:?}"))),
        }
    }
}

impl TryFrom<LabelValue> for bool {
    type Error = ModelError;

    fn try_from(value: LabelValue) -> Result<Self> {
        match value {
            LabelValue::Boolean(b) => Ok(b),
            other => Err(ModelError::cast("bool", format!("{other:?}"))),
        }
    }
}

impl TryFrom<LabelValue> for String {
    type Error = ModelError;

    fn try_from(value: LabelValue) -> Result<Self> {
        match value {
            LabelValue::Category(c) => Ok(c),
            other => Err(ModelError::cast("String", format!("{other:?}"))),
        }
    }
}

impl TryFrom<LabelValue> for usize {
    type Error = ModelError;

    fn try_from(value: LabelValue) -> Result<Self> {
        match value {
            LabelValue::Number(v) if v >= 0.0 && v.fract() == 0.0 && v < usize::MAX as f64 => {
                Ok(v as usize)
            }
            other => Err(ModelError::cast("usize", format!("{other:?}"))),
        }
    }
}

/// How a label column maps between its domain type and a numeric scalar.
///
/// Booleans travel as `+1.0`/`-1.0` and come back as `value >= 0.0`.
/// Categories travel as their index and come back by rounding to the
/// nearest index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LabelKind {
    Numeric,
    Boolean,
    Categorical(Vec<String>),
}

impl LabelKind {
    pub fn encode(&self, value: &LabelValue) -> Result<f64> {
        match (self, value) {
            (LabelKind::Numeric, LabelValue::Number(v)) => Ok(*v),
            (LabelKind::Boolean, LabelValue::Boolean(b)) => Ok(if *b { 1.0 } else { -1.0 }),
            (LabelKind::Categorical(categories), LabelValue::Category(c)) => categories
                .iter()
                .position(|x| x == c)
                .map(|i| i as f64)
                .ok_or_else(|| ModelError::cast("category", c)),
            (kind, other) => Err(ModelError::cast(kind.type_name(), format!("{other:?}"))),
        }
    }

    pub fn decode(&self, value: f64) -> Result<LabelValue> {
        match self {
            LabelKind::Numeric => Ok(LabelValue::Number(value)),
            LabelKind::Boolean => {
                if value.is_nan() {
                    return Err(ModelError::cast("bool", value));
                }
                Ok(LabelValue::Boolean(value >= 0.0))
            }
            LabelKind::Categorical(categories) => {
                let index = value.round();
                if index.is_nan() || index < 0.0 || index >= categories.len() as f64 {
                    return Err(ModelError::cast("category", value));
                }
                Ok(LabelValue::Category(categories[index as usize].clone()))
            }
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            LabelKind::Numeric => "number",
            LabelKind::Boolean => "bool",
            LabelKind::Categorical(_) => "category",
        }
    }
}
