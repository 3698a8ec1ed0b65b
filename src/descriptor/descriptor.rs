use crate::core::Matrix;
use crate::descriptor::{LabelProperty, LabelValue, Property};
use crate::error::{ModelError, Result};
use std::fmt::{Debug, Formatter};

/// Schema mapping a domain type `T` onto ordered feature columns and an
/// optional label column.
///
/// Built once when the model is configured. Column order is the order in
/// which features were added and must match the order used at training time;
/// nothing downstream re-derives it.
pub struct Descriptor<T> {
    name: String,
    features: Vec<Property<T>>,
    label: Option<LabelProperty<T>>,
}

impl<T> Descriptor<T> {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            features: Vec::new(),
            label: None,
        }
    }

    pub fn with_feature<N: Into<String>>(mut self, name: N, getter: fn(&T) -> f64) -> Self {
        self.features.push(Property::new(name, getter));
        self
    }

    pub fn with_label(mut self, label: LabelProperty<T>) -> Self {
        self.label = Some(label);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn features(&self) -> &[Property<T>] {
        &self.features
    }

    /// Number of feature columns (the label is not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn label(&self) -> Option<&LabelProperty<T>> {
        self.label.as_ref()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.features
            .iter()
            .map(Property::name)
            .chain(self.label.iter().map(LabelProperty::name))
            .collect()
    }

    /// Marshals `item` into a feature vector. With `include_label` the encoded
    /// label is appended as the last element (`NaN` when unset).
    pub fn convert(&self, item: &T, include_label: bool) -> Result<Vec<f64>> {
        let mut x = Vec::with_capacity(self.features.len() + usize::from(include_label));
        x.extend(self.features.iter().map(|p| p.value_of(item)));
        if include_label {
            let label = self.label.as_ref().ok_or(ModelError::MissingLabel)?;
            x.push(label.value_of(item)?);
        }
        Ok(x)
    }

    /// Feature matrix for a set of examples, one row per item.
    pub fn convert_all(&self, items: &[T]) -> Result<Matrix> {
        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            rows.push(self.convert(item, false)?);
        }
        if rows.is_empty() {
            return Ok(Matrix::zeros(0, self.len()));
        }
        Matrix::from_rows(rows)
    }

    /// Encoded labels for a set of examples.
    pub fn labels(&self, items: &[T]) -> Result<Vec<f64>> {
        let label = self.label.as_ref().ok_or(ModelError::MissingLabel)?;
        items.iter().map(|item| label.value_of(item)).collect()
    }

    /// Writes `value` onto the field called `name`. Only the label column is
    /// writable.
    pub fn set(&self, item: &mut T, name: &str, value: LabelValue) -> Result<()> {
        match &self.label {
            Some(label) if label.name() == name => label.set(item, value),
            _ => Err(ModelError::UnknownField(name.to_string())),
        }
    }
}

impl<T> Default for Descriptor<T> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<T> Clone for Descriptor<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            features: self.features.clone(),
            label: self.label.clone(),
        }
    }
}

impl<T> Debug for Descriptor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("features", &self.features)
            .field("label", &self.label)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{Point, point_descriptor, unlabeled_point_descriptor};

    #[test]
    fn convert_excludes_label_on_request() {
        let d = point_descriptor();
        let p = Point::new(5.0, 0.3).labeled(7.0);
        assert_eq!(d.convert(&p, false).unwrap(), vec![5.0, 0.3]);
        assert_eq!(d.convert(&p, true).unwrap(), vec![5.0, 0.3, 7.0]);
    }

    #[test]
    fn unset_label_converts_to_nan() {
        let d = point_descriptor();
        let x = d.convert(&Point::new(1.0, 2.0), true).unwrap();
        assert_eq!(x.len(), 3);
        assert!(x[2].is_nan());
    }

    #[test]
    fn including_a_missing_label_is_an_error() {
        let d = unlabeled_point_descriptor();
        assert!(matches!(
            d.convert(&Point::new(1.0, 2.0), true),
            Err(ModelError::MissingLabel)
        ));
        assert!(matches!(d.labels(&[]), Err(ModelError::MissingLabel)));
    }

    #[test]
    fn column_names_follow_insertion_order() {
        assert_eq!(point_descriptor().column_names(), vec!["x", "y", "value"]);
        assert_eq!(unlabeled_point_descriptor().column_names(), vec!["x", "y"]);
        assert_eq!(point_descriptor().len(), 2);

        let d = point_descriptor();
        let features: Vec<&str> = d.features().iter().map(|p| p.name()).collect();
        assert_eq!(features, vec!["x", "y"]);
    }

    #[test]
    fn set_only_writes_the_label() {
        let d = point_descriptor();
        let mut p = Point::new(0.0, 0.0);
        d.set(&mut p, "value", LabelValue::Number(4.0)).unwrap();
        assert_eq!(p.value, Some(4.0));

        let err = d.set(&mut p, "x", LabelValue::Number(1.0)).unwrap_err();
        assert!(matches!(err, ModelError::UnknownField(name) if name == "x"));
    }

    #[test]
    fn convert_all_builds_training_data() {
        let d = point_descriptor();
        let items = vec![
            Point::new(1.0, 2.0).labeled(3.0),
            Point::new(4.0, 5.0).labeled(6.0),
        ];
        let x = d.convert_all(&items).unwrap();
        assert_eq!(x.rows(), 2);
        assert_eq!(x.row(1), Some(vec![4.0, 5.0]));
        assert_eq!(d.labels(&items).unwrap(), vec![3.0, 6.0]);

        let empty = d.convert_all(&[]).unwrap();
        assert_eq!((empty.rows(), empty.cols()), (0, 2));
    }
}
