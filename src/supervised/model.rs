use crate::core::Matrix;
use crate::descriptor::{Descriptor, LabelValue};
use crate::error::{ModelError, Result};
use crate::supervised::Preprocessor;

/// Contract shared by every trained supervised model.
///
/// Implementors supply [`predict`] for a single feature vector; batch,
/// domain-object and typed predictions are derived from it. `predict` is
/// expected to run [`preprocess`] exactly once before reading the vector so
/// that training-time normalization is replayed.
///
/// All methods take `&self`: a configured model is read-only while
/// predicting and can be shared between threads when it is `Sync`.
///
/// [`predict`]: Model::predict
/// [`preprocess`]: Model::preprocess
pub trait Model {
    /// Domain type the descriptor maps to and from feature vectors.
    type Item;

    fn descriptor(&self) -> &Descriptor<Self::Item>;

    fn preprocessor(&self) -> &Preprocessor;

    /// Applies the model's feature normalization, if enabled, to `x`.
    fn preprocess(&self, x: Vec<f64>) -> Result<Vec<f64>> {
        self.preprocessor().preprocess(x)
    }

    /// Raw numeric prediction for one feature vector.
    fn predict(&self, x: Vec<f64>) -> Result<f64>;

    /// One prediction per row of `x`, in row order.
    ///
    /// Rows are independent; implementations may override this for batch
    /// efficiency as long as element `i` equals `predict(row i)`.
    fn predict_batch(&self, x: &Matrix) -> Result<Vec<f64>> {
        let mut predictions = vec![0.0; x.rows()];
        for (row, features) in x.iter_rows().enumerate() {
            predictions[row] = self.predict(features.to_vec())?;
        }
        Ok(predictions)
    }

    /// Predicts the label of `item` and writes it onto the item's label field.
    ///
    /// Returns the same reference it was given. Fails with
    /// [`ModelError::MissingLabel`] before touching `item` when the descriptor
    /// has no label column.
    fn predict_item<'a>(&self, item: &'a mut Self::Item) -> Result<&'a mut Self::Item> {
        let value = self.predict_value(item)?;
        // predict_value already proved the label exists
        let name = self
            .descriptor()
            .label()
            .map(|label| label.name())
            .ok_or(ModelError::MissingLabel)?;
        self.descriptor().set(item, name, value)?;
        Ok(item)
    }

    /// Predicted label of `item` as a domain value, without writing it back.
    fn predict_value(&self, item: &Self::Item) -> Result<LabelValue> {
        let descriptor = self.descriptor();
        let label = descriptor.label().ok_or(ModelError::MissingLabel)?;
        let x = descriptor.convert(item, false)?;
        let y = self.predict(x)?;
        log::trace!("{} predicted {y} for '{}'", descriptor.name(), label.name());
        label.convert(y)
    }

    /// Owned form of [`predict_item`](Model::predict_item).
    fn predict_into(&self, mut item: Self::Item) -> Result<Self::Item> {
        self.predict_item(&mut item)?;
        Ok(item)
    }

    /// Predicted label converted to `L`; an incompatible label type is a
    /// [`ModelError::Cast`].
    fn predict_as<L>(&self, item: &Self::Item) -> Result<L>
    where
        Self: Sized,
        L: TryFrom<LabelValue, Error = ModelError>,
    {
        L::try_from(self.predict_value(item)?)
    }
}
