use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an unsupported carrier media. For example, a WAV file handed to the MP3 codec
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a carrier that could not be parsed as MPEG-1 Layer III, or lost frame sync
    #[error("Format error at byte offset {offset}: {reason}")]
    Format { offset: usize, reason: String },

    /// Represents a payload that does not fit into the ancillary bytes of the carrier
    #[error(
        "Capacity Error: the payload requires {required} bits but the carrier only offers {available} bits"
    )]
    Capacity { required: u64, available: u64 },

    /// Represents an invalid configuration, for example 5 lsb bits or encryption without a key
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unveiled data that does not form a plausible envelope,
    /// either corrupted carrier data or a configuration mismatch
    #[error("Decode error: {0}")]
    Decode(String),

    /// Represents an error caused by an invalid filename, for example not unsupported charset or empty filename
    #[error("A file with an invalid file name was provided")]
    InvalidFileName,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing secret")]
    MissingSecret,
}

impl SteganoError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }

    pub(crate) fn decode(reason: impl Into<String>) -> Self {
        Self::Decode(reason.into())
    }

    pub(crate) fn format(offset: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            offset,
            reason: reason.into(),
        }
    }
}
