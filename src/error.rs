//! Error type shared by the theory, chord and notation modules.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    #[error("Scale type '{0}' is not defined.")]
    UnknownScaleType(String),

    #[error("Tonic '{tonic}' is not defined in {scale_type} scale.")]
    UnknownTonic { tonic: String, scale_type: String },

    #[error("Numeral index {degree} is out of bounds for scale of length {len}.")]
    DegreeOutOfRange { degree: usize, len: usize },

    #[error(
        "Verification failed for {scale_type} scale with tonic {tonic}.\n\
         Expected: {expected:?}, Generated: {generated:?}"
    )]
    ScaleMismatch {
        scale_type: String,
        tonic: String,
        expected: Vec<String>,
        generated: Vec<String>,
    },

    #[error("Invalid numeral: {0}. Available numerals: I, II, III, IV, V, VI, VII")]
    InvalidNumeral(String),

    #[error("Invalid complexity: {0}. Must be an integer between 1 and 10.")]
    InvalidComplexity(i64),

    #[error("Invalid inversion: {0}. Must be an integer greater than or equal to 1.")]
    InvalidInversion(i64),

    #[error("Invalid note spelling: '{0}'")]
    InvalidNote(String),

    #[error("XML error: {0}")]
    Xml(String),
}

impl From<quick_xml::Error> for ChordError {
    fn from(e: quick_xml::Error) -> Self {
        ChordError::Xml(e.to_string())
    }
}
