use crate::descriptor::Descriptor;
use crate::error::Result;
use crate::supervised::{Model, Preprocessor};
use std::cell::{Cell, RefCell};

/// Always predicts `0.0` and remembers what it was asked.
pub struct RecordingModel<T> {
    descriptor: Descriptor<T>,
    preprocessor: Preprocessor,
    calls: Cell<usize>,
    last_input: RefCell<Option<Vec<f64>>>,
}

impl<T> RecordingModel<T> {
    pub fn new(descriptor: Descriptor<T>) -> Self {
        Self {
            descriptor,
            preprocessor: Preprocessor::disabled(),
            calls: Cell::new(0),
            last_input: RefCell::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_input(&self) -> Option<Vec<f64>> {
        self.last_input.borrow().clone()
    }
}

impl<T> Model for RecordingModel<T> {
    type Item = T;

    fn descriptor(&self) -> &Descriptor<T> {
        &self.descriptor
    }

    fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    fn predict(&self, x: Vec<f64>) -> Result<f64> {
        self.calls.set(self.calls.get() + 1);
        *self.last_input.borrow_mut() = Some(x);
        Ok(0.0)
    }
}
