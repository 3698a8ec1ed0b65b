mod descriptor;
mod label;
mod property;

pub use descriptor::Descriptor;
pub use label::{LabelKind, LabelValue};
pub use property::{LabelProperty, Property};
