use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Die value {value} is outside 1..={faces}")]
    DieOutOfRange { value: u32, faces: u32 },
}
