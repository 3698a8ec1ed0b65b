use crate::descriptor::Descriptor;
use crate::error::{ModelError, Result};
use crate::supervised::{Model, Preprocessor};

/// Predicts the (preprocessed) value of one feature column.
#[derive(Debug)]
pub struct ColumnModel<T> {
    descriptor: Descriptor<T>,
    preprocessor: Preprocessor,
    column: usize,
}

impl<T> ColumnModel<T> {
    pub fn new(descriptor: Descriptor<T>, column: usize) -> Self {
        Self {
            descriptor,
            preprocessor: Preprocessor::disabled(),
            column,
        }
    }

    pub fn with_preprocessor(mut self, preprocessor: Preprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }
}

impl<T> Model for ColumnModel<T> {
    type Item = T;

    fn descriptor(&self) -> &Descriptor<T> {
        &self.descriptor
    }

    fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    fn predict(&self, x: Vec<f64>) -> Result<f64> {
        let x = self.preprocess(x)?;
        x.get(self.column)
            .copied()
            .ok_or(ModelError::DimensionMismatch {
                expected: self.column + 1,
                actual: x.len(),
            })
    }
}
