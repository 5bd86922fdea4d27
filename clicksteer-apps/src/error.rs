use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("clicksteer-apps: No File {:?} is found ({}).", .0, .1)]
    NoFile(PathBuf, #[source] std::io::Error),
    #[error("clicksteer-apps: Failed to parse {:?} as toml ({}).", .0, .1)]
    TomlParseFailure(PathBuf, #[source] toml::de::Error),
    #[error("clicksteer-apps: No frame images are found in {:?}.", .0)]
    NoFrames(PathBuf),
    #[error("clicksteer-apps: Invalid pointer event {:?}: {}", line, message)]
    InvalidPointerEvent { line: String, message: String },
    #[error("clicksteer-apps: clicksteer: {}", .0)]
    Core(#[from] clicksteer::Error),
}
