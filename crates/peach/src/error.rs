use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Grammar violation while decoding JSON text. `position` is the
    /// character offset of the cursor when the violation was detected.
    #[error("decode error at offset {position}: {message}")]
    Decode { position: usize, message: String },

    /// Malformed calendar or format input (bad date string, bad pattern).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Offset carried by a decode error, if this is one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Decode { position, .. } => Some(*position),
            Error::InvalidArgument(_) => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
