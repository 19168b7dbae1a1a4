use std::path::PathBuf;

use crate::app::error::{OctavoError, Result};
use crate::config::Config;
use crate::library::Library;
use crate::store::JsonStore;

/// Wires the configuration, storage, and library together. Constructed once
/// at startup; all mutations flow through `library`.
pub struct AppContext {
    pub library: Library,
    pub config: Config,
}

impl AppContext {
    /// Data directory precedence: CLI flag, then config file, then the
    /// platform default.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let config = Config::load().map_err(|e| OctavoError::Config(e.to_string()))?;

        let dir = match data_dir.or_else(|| config.data_dir.clone()) {
            Some(dir) => dir,
            None => Self::default_data_dir()?,
        };

        let storage = JsonStore::new(dir)?;
        let library = Library::open(Box::new(storage));

        Ok(Self { library, config })
    }

    fn default_data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or(OctavoError::NoDataDir)?;
        Ok(data_dir.join("octavo"))
    }
}
