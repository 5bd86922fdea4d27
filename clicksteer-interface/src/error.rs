use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("clicksteer-interface: Failed to decode frame: {}", message)]
    Decode { message: String },
    #[error(
        "clicksteer-interface: Unsupported encoding {} ({} channels, expected {})",
        encoding,
        channels,
        expected
    )]
    UnsupportedEncoding {
        encoding: String,
        channels: u8,
        expected: u8,
    },
    #[error(
        "clicksteer-interface: Buffer size mismatch ({}x{}x{}, input = {})",
        width,
        height,
        channels,
        input
    )]
    BufferSizeMismatch {
        width: usize,
        height: usize,
        channels: usize,
        input: usize,
    },
    #[error("clicksteer-interface: Connection error : {}", message)]
    Connection { message: String },
    #[error("clicksteer-interface: Display error : {}", message)]
    Display { message: String },
    #[error("clicksteer-interface: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}
