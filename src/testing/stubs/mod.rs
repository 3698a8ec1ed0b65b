pub mod column_model;
pub mod recording_model;

pub use column_model::ColumnModel;
pub use recording_model::RecordingModel;
