mod descriptors;
mod domain;

pub use descriptors::{fruit_descriptor, point_descriptor, unlabeled_point_descriptor};
pub use domain::{Fruit, Point};
