use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if any value lies outside `1..=faces`.
pub fn validate_dice(values: &[u32], faces: u32) -> Result<(), UtilsError> {
    debug!("Validating dice {:?} against {} faces", values, faces);

    if let Some(&value) = values.iter().find(|&&v| v == 0 || v > faces) {
        warn!("Die value {} is outside 1..={}", value, faces);
        return Err(UtilsError::DieOutOfRange { value, faces });
    }

    Ok(())
}
