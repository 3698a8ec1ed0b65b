use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("prediction impossible without a label")]
    MissingLabel,

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("dimension mismatch: expected {expected} features, found {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("cannot cast {found} into {expected}")]
    Cast {
        expected: &'static str,
        found: String,
    },

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ModelError {
    pub(crate) fn cast(expected: &'static str, found: impl ToString) -> Self {
        ModelError::Cast {
            expected,
            found: found.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            ModelError::MissingLabel.to_string(),
            "prediction impossible without a label"
        );
        assert_eq!(
            ModelError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
            .to_string(),
            "dimension mismatch: expected 2 features, found 3"
        );
        assert_eq!(
            ModelError::cast("bool", "Category(\"a\")").to_string(),
            "cannot cast Category(\"a\") into bool"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ModelError = io.into();
        assert!(matches!(err, ModelError::Io(_)));
    }
}
