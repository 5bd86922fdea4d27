use std::path::Path;

use clicksteer::ClickSteerConfig;
use tracing::debug;

use crate::Error;

/// Reads the node configuration from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClickSteerConfig, Error> {
    let path = path.as_ref();
    let s = std::fs::read_to_string(path).map_err(|e| Error::NoFile(path.to_owned(), e))?;
    config_from_str(&s, path)
}

pub fn config_from_str<P: AsRef<Path>>(s: &str, path: P) -> Result<ClickSteerConfig, Error> {
    toml::from_str(s).map_err(|e| Error::TomlParseFailure(path.as_ref().to_owned(), e))
}

/// Builds the configuration from an optional file and command line overrides,
/// then validates it.
///
/// `annotation_size` takes priority over the file.
pub fn resolve_config(
    config_path: Option<&Path>,
    annotation_size: Option<i64>,
) -> Result<ClickSteerConfig, Error> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => ClickSteerConfig::default(),
    };
    if let Some(annotation_size) = annotation_size {
        config.annotation_size = annotation_size;
    }
    config.validate()?;
    debug!(?config, "resolved config");
    Ok(config)
}
