use crate::chords::inversion::invert;
use crate::error::ChordError;
use crate::theory::scales::{lookup_scale, ScaleType};

/// Degree offsets per complexity level 1..=10.
pub const COMPLEXITY_PROFILES: [&[usize]; 10] = [
    &[0, 2, 4], // root, third, fifth
    &[0, 2, 4, 5],
    &[0, 2, 4, 6],
    &[0, 3, 4, 6],
    &[0, 3, 4],
    &[0, 2, 5, 6],
    &[0, 2, 4, 6, 8],
    &[0, 2, 4, 6, 5],
    &[0, 2, 4, 6, 9],
    &[0, 2, 4, 6, 5, 10],
];

pub fn complexity_profile(level: i64) -> Result<&'static [usize], ChordError> {
    if (1..=COMPLEXITY_PROFILES.len() as i64).contains(&level) {
        Ok(COMPLEXITY_PROFILES[(level - 1) as usize])
    } else {
        Err(ChordError::InvalidComplexity(level))
    }
}

/// Scale indices selected by `profile` starting from `root_degree`.
///
/// Offsets at or past the scale length are wrapped twice: once by the modulo
/// and again by advancing one degree per full cycle. Profiles 9 and 10 rely
/// on this (offset 9 from the tonic lands on the fourth, not the third).
/// Each term is reduced before summing, so any offset is safe.
pub fn chord_indices(root_degree: usize, profile: &[usize], scale_length: usize) -> Vec<usize> {
    profile
        .iter()
        .map(|&offset| {
            let root = root_degree % scale_length;
            let cycles = (offset / scale_length) % scale_length;
            (root + offset % scale_length + cycles) % scale_length
        })
        .collect()
}

/// Realize a chord from an already resolved scale.
pub fn chord_from_scale(
    scale: &[&'static str],
    root_degree: usize,
    profile: &[usize],
) -> Result<Vec<&'static str>, ChordError> {
    if root_degree >= scale.len() {
        return Err(ChordError::DegreeOutOfRange {
            degree: root_degree,
            len: scale.len(),
        });
    }

    let indices = chord_indices(root_degree, profile, scale.len());
    log::debug!("Chord Indices: {:?}", indices);

    let chord: Vec<&'static str> = indices.iter().map(|&i| scale[i]).collect();
    log::debug!("Final Chord: {:?}", chord);
    Ok(chord)
}

/// Realize a chord from the catalog scale for `tonic`.
/// Duplicate notes are kept; order follows `profile`.
pub fn build_chord(
    scale_type: ScaleType,
    tonic: &str,
    root_degree: usize,
    profile: &[usize],
) -> Result<Vec<&'static str>, ChordError> {
    let scale = lookup_scale(tonic, scale_type)?;
    log::debug!("Scale Notes: {:?}", scale);
    chord_from_scale(scale, root_degree, profile)
}

pub fn build_chord_with_inversion(
    scale_type: ScaleType,
    tonic: &str,
    root_degree: usize,
    profile: &[usize],
    inversion: i64,
) -> Result<Vec<&'static str>, ChordError> {
    let chord = build_chord(scale_type, tonic, root_degree, profile)?;
    let inverted = invert(&chord, inversion);
    log::debug!("Original Chord: {:?}", chord);
    log::debug!("Inverted Chord (Inversion {}): {:?}", inversion, inverted);
    Ok(inverted)
}
