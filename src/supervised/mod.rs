mod linear_model;
mod model;
mod persistence;
mod preprocessor;

pub use linear_model::LinearModel;
pub use model::Model;
pub use persistence::Persistable;
pub use preprocessor::{Preprocessor, preprocess_with};
