use crate::error::Result;
use std::fs;
use std::path::Path;

/// Opt-in capability for models whose state can be written out and restored.
///
/// The exchange format is JSON text. Models that cannot be persisted simply
/// do not implement this trait, so the gap shows up at compile time.
pub trait Persistable: Sized {
    /// Serializes the model state to the exchange format.
    fn to_json(&self) -> Result<String>;

    /// Restores a configured model from the exchange format.
    fn from_json(json: &str) -> Result<Self>;

    /// Writes [`to_json`](Persistable::to_json) to `path`, replacing any existing file.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path.as_ref(), json)?;
        log::debug!("saved model to {}", path.as_ref().display());
        Ok(())
    }

    fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        log::debug!("loading model from {}", path.as_ref().display());
        Self::from_json(&json)
    }
}
