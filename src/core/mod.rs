mod matrix;
mod summary;

pub use matrix::Matrix;
pub use summary::{FeatureSummary, Summary};
