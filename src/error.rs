use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that aborts generation of a file or a whole plugin request.
#[derive(Debug, Error)]
pub enum Error {
    /// The render context does not fit the client template.
    #[error("cannot expand client template for {file}: {reason}")]
    Expansion { file: String, reason: String },

    /// Writing the syntax tree failed. Points at a bug in the printer.
    #[error("failed to print generated client")]
    Print(#[from] std::fmt::Error),

    #[error("invalid plugin parameter: {0}")]
    Config(String),

    #[error("file {0} requested but not present in the request")]
    MissingFile(String),

    #[error("failed to decode protobuf input")]
    Decode(#[from] prost::DecodeError),
}

impl Error {
    pub(crate) fn expansion(file: &str, reason: impl Into<String>) -> Self {
        Error::Expansion {
            file: file.to_string(),
            reason: reason.into(),
        }
    }
}
