use std::fmt;

/// Failures of the track layer. The simplification core itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackError {
    Io,
    Csv,
    MissingColumn(&'static str),
    InvalidValue,
    Json,
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::Io => f.write_str("track file could not be read or written"),
            TrackError::Csv => f.write_str("malformed track csv"),
            TrackError::MissingColumn(name) => write!(f, "track csv has no `{}` column", name),
            TrackError::InvalidValue => f.write_str("track csv contains a non-numeric coordinate"),
            TrackError::Json => f.write_str("track json could not be encoded or decoded"),
        }
    }
}

impl std::error::Error for TrackError {}
