use crate::descriptor::{LabelKind, LabelValue};
use crate::error::Result;
use std::fmt::{Debug, Formatter};

/// A numeric feature column read off a domain object.
pub struct Property<T> {
    name: String,
    getter: fn(&T) -> f64,
}

impl<T> Property<T> {
    pub fn new<N: Into<String>>(name: N, getter: fn(&T) -> f64) -> Self {
        Self {
            name: name.into(),
            getter,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value_of(&self, item: &T) -> f64 {
        (self.getter)(item)
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            getter: self.getter,
        }
    }
}

impl<T> Debug for Property<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property").field("name", &self.name).finish()
    }
}

/// The label column: readable, writable and convertible to and from `f64`.
///
/// The getter returns `None` while the label is unset; the setter receives
/// the domain-typed value and reports a cast error when it cannot store it.
pub struct LabelProperty<T> {
    name: String,
    kind: LabelKind,
    getter: fn(&T) -> Option<LabelValue>,
    setter: fn(&mut T, LabelValue) -> Result<()>,
}

impl<T> LabelProperty<T> {
    pub fn new<N: Into<String>>(
        name: N,
        kind: LabelKind,
        getter: fn(&T) -> Option<LabelValue>,
        setter: fn(&mut T, LabelValue) -> Result<()>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            getter,
            setter,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> &LabelKind {
        &self.kind
    }

    /// Converts a raw model output into the label's domain value.
    pub fn convert(&self, value: f64) -> Result<LabelValue> {
        self.kind.decode(value)
    }

    /// Encoded label of `item`; `NaN` when the label is unset.
    pub fn value_of(&self, item: &T) -> Result<f64> {
        match (self.getter)(item) {
            Some(v) => self.kind.encode(&v),
            None => Ok(f64::NAN),
        }
    }

    pub fn get(&self, item: &T) -> Option<LabelValue> {
        (self.getter)(item)
    }

    pub fn set(&self, item: &mut T, value: LabelValue) -> Result<()> {
        (self.setter)(item, value)
    }
}

impl<T> Clone for LabelProperty<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind.clone(),
            getter: self.getter,
            setter: self.setter,
        }
    }
}

impl<T> Debug for LabelProperty<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelProperty")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}
