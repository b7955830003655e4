//! Consistency check of the scale catalog against the interval profiles.
//!
//! The catalog is hand-written data; this is the only place scales are
//! derived by stepping intervals. The chord path never calls into here.

use crate::error::ChordError;
use crate::theory::pitch::{enharmonic_eq, pitch_class, CHROMATIC_SCALE};
use crate::theory::scales::{catalog_entries, stored_scale, ScaleType, SCALE_LENGTH};

/// Walk the chromatic circle from `tonic` by the scale type's steps.
pub fn generate_scale(tonic: &str, scale_type: ScaleType) -> Result<Vec<&'static str>, ChordError> {
    let start = pitch_class(tonic).ok_or_else(|| ChordError::InvalidNote(tonic.to_string()))?;

    let mut index = start as usize;
    let mut notes = Vec::with_capacity(SCALE_LENGTH);
    for step in scale_type.intervals() {
        notes.push(CHROMATIC_SCALE[index]);
        index = (index + step as usize) % CHROMATIC_SCALE.len();
    }
    Ok(notes)
}

/// Compare the stored row keyed by `tonic` with the regenerated scale.
pub fn verify(scale_type: ScaleType, tonic: &str) -> Result<(), ChordError> {
    let expected = stored_scale(scale_type, tonic)?;
    let generated = generate_scale(tonic, scale_type)?;

    let matches = expected.len() == generated.len()
        && expected
            .iter()
            .zip(generated.iter())
            .all(|(e, g)| enharmonic_eq(e, g));

    if matches {
        Ok(())
    } else {
        Err(ChordError::ScaleMismatch {
            scale_type: scale_type.to_string(),
            tonic: tonic.to_string(),
            expected: expected.iter().map(|n| n.to_string()).collect(),
            generated: generated.iter().map(|n| n.to_string()).collect(),
        })
    }
}

pub fn verify_named(scale_type: &str, tonic: &str) -> Result<(), ChordError> {
    verify(scale_type.parse()?, tonic)
}

/// Run [`verify`] over every row of every scale type; returns the failures.
pub fn verify_catalog() -> Vec<ChordError> {
    let mut failures = Vec::new();
    for scale_type in ScaleType::ALL {
        for (key, _) in catalog_entries(scale_type) {
            if let Err(e) = verify(scale_type, key) {
                log::warn!("{}", e);
                failures.push(e);
            }
        }
    }
    failures
}
