use anyhow::anyhow;

use crate::transpose::Boundary;

/// Custom error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error that shows the user the usage information.
    #[error("Usage: note-transposer <input_file> <semitones_to_transpose>")]
    Usage,
    /// The semitone argument is not a base-10 integer.
    #[error("semitones to transpose must be an integer, got '{0}'")]
    InvalidSemitones(String),
    /// The note list could not be opened or is not a list of integer pairs.
    #[error("Error reading notes: {0:#}")]
    SourceRead(#[from] anyhow::Error),
    /// A transposed note falls outside the playable envelope of the keyboard.
    ///
    /// `note_number` is the value before it is folded into a single octave.
    #[error("Out of range ({boundary}) [{octave},{note_number}]")]
    OutOfRange {
        boundary: Boundary,
        octave: i64,
        note_number: i64,
    },
}

impl Error {
    /// Constructs a new instance of `Error::SourceRead` with the given message.
    pub fn source_read(message: &str) -> Self {
        Self::SourceRead(anyhow!("{}", message))
    }

    /// Whether the error came from a bad invocation rather than from processing.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage | Self::InvalidSemitones(_))
    }
}
