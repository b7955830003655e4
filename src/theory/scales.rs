use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChordError;
use crate::theory::pitch::{capitalize, normalize_note};

/// A scale row: table key and the seven spellings for degrees 0..=6.
pub type CatalogEntry = (&'static str, [&'static str; 7]);

pub type Scale = [&'static str; 7];

pub const SCALE_LENGTH: usize = 7;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleType {
    Major,
    Minor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    #[serde(rename = "Harmonic Minor")]
    HarmonicMinor,
}

impl ScaleType {
    pub const ALL: [ScaleType; 8] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Locrian,
        ScaleType::HarmonicMinor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Minor => "Minor",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Locrian => "Locrian",
            ScaleType::HarmonicMinor => "Harmonic Minor",
        }
    }

    /// Semitone steps between consecutive degrees, wrapping back to the tonic.
    pub fn intervals(self) -> [u8; 7] {
        match self {
            ScaleType::Major => [2, 2, 1, 2, 2, 2, 1],
            ScaleType::Minor => [2, 1, 2, 2, 1, 2, 2],
            ScaleType::Dorian => [2, 1, 2, 2, 2, 1, 2],
            ScaleType::Phrygian => [1, 2, 2, 2, 1, 2, 2],
            ScaleType::Lydian => [2, 2, 2, 1, 2, 2, 1],
            ScaleType::Mixolydian => [2, 2, 1, 2, 2, 1, 2],
            ScaleType::Locrian => [1, 2, 2, 1, 2, 2, 2],
            ScaleType::HarmonicMinor => [2, 1, 2, 2, 1, 3, 1],
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Title-cases each word before matching, so "harmonic minor" and
/// "MIXOLYDIAN" both resolve.
impl FromStr for ScaleType {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let title = s
            .split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");

        ScaleType::ALL
            .into_iter()
            .find(|t| t.name() == title)
            .ok_or_else(|| ChordError::UnknownScaleType(s.to_string()))
    }
}

/// Every row stored for a scale type, in table order.
pub fn catalog_entries(scale_type: ScaleType) -> &'static [CatalogEntry] {
    match scale_type {
        ScaleType::Major => MAJOR,
        ScaleType::Minor => MINOR,
        ScaleType::Dorian => DORIAN,
        ScaleType::Phrygian => PHRYGIAN,
        ScaleType::Lydian => LYDIAN,
        ScaleType::Mixolydian => MIXOLYDIAN,
        ScaleType::Locrian => LOCRIAN,
        ScaleType::HarmonicMinor => HARMONIC_MINOR,
    }
}

/// Index the table by its literal key, without normalization.
pub fn stored_scale(scale_type: ScaleType, key: &str) -> Result<&'static Scale, ChordError> {
    catalog_entries(scale_type)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, scale)| scale)
        .ok_or_else(|| ChordError::UnknownTonic {
            tonic: key.to_string(),
            scale_type: scale_type.to_string(),
        })
}

/// Normalize the tonic and fetch its row.
///
/// Normalization sends flat tonics to their sharp spelling, so rows keyed
/// "Db", "Gb", "Cb", "Fb", etc. are never returned here; "Ab" Major has no
/// "G#" row at all and fails. Only [`stored_scale`] reaches those rows.
pub fn lookup_scale(tonic: &str, scale_type: ScaleType) -> Result<&'static Scale, ChordError> {
    let tonic = normalize_note(tonic);
    stored_scale(scale_type, &tonic)
}

/// String-typed variant of [`lookup_scale`] for callers holding a scale name.
pub fn lookup_scale_named(tonic: &str, scale_type: &str) -> Result<&'static Scale, ChordError> {
    lookup_scale(tonic, scale_type.parse()?)
}

const MAJOR: &[CatalogEntry] = &[
    ("C", ["C", "D", "E", "F", "G", "A", "B"]),
    ("C#", ["C#", "D#", "E#", "F#", "G#", "A#", "B#"]),
    ("Db", ["Db", "Eb", "F", "Gb", "Ab", "Bb", "C"]),
    ("D", ["D", "E", "F#", "G", "A", "B", "C#"]),
    ("D#", ["D#", "E#", "F##", "G#", "A#", "B#", "C##"]),
    ("Eb", ["Eb", "F", "G", "Ab", "Bb", "C", "D"]),
    ("E", ["E", "F#", "G#", "A", "B", "C#", "D#"]),
    ("Fb", ["Fb", "Gb", "Ab", "Bbb", "Cb", "Db", "Eb"]),
    ("F", ["F", "G", "A", "Bb", "C", "D", "E"]),
    ("F#", ["F#", "G#", "A#", "B", "C#", "D#", "E#"]),
    ("Gb", ["Gb", "Ab", "Bb", "Cb", "Db", "Eb", "F"]),
    ("G", ["G", "A", "B", "C", "D", "E", "F#"]),
    ("Ab", ["Ab", "Bb", "C", "Db", "Eb", "F", "G"]),
    ("A", ["A", "B", "C#", "D", "E", "F#", "G#"]),
    ("A#", ["A#", "B#", "C##", "D#", "E#", "F##", "G##"]),
    ("Bb", ["Bb", "C", "D", "Eb", "F", "G", "A"]),
    ("B", ["B", "C#", "D#", "E", "F#", "G#", "A#"]),
    ("Cb", ["Cb", "Db", "Eb", "Fb", "Gb", "Ab", "Bb"]),
];

const MINOR: &[CatalogEntry] = &[
    ("C", ["C", "D", "Eb", "F", "G", "Ab", "Bb"]),
    ("C#", ["C#", "D#", "E", "F#", "G#", "A", "B"]),
    ("Db", ["Db", "Eb", "Fb", "Gb", "Ab", "Bbb", "Cb"]),
    ("D", ["D", "E", "F", "G", "A", "Bb", "C"]),
    ("D#", ["D#", "E#", "F#", "G#", "A#", "B", "C#"]),
    ("Eb", ["Eb", "F", "Gb", "Ab", "Bb", "Cb", "Db"]),
    ("E", ["E", "F#", "G", "A", "B", "C", "D"]),
    ("Fb", ["Fb", "Gb", "Abb", "Bbb", "Cb", "Dbb", "Ebb"]),
    ("F", ["F", "G", "Ab", "Bb", "C", "Db", "Eb"]),
    ("F#", ["F#", "G#", "A", "B", "C#", "D", "E"]),
    ("Gb", ["Gb", "Ab", "Bbb", "Cb", "Db", "Ebb", "Fb"]),
    ("G", ["G", "A", "Bb", "C", "D", "Eb", "F"]),
    ("Ab", ["Ab", "Bb", "Cb", "Db", "Eb", "Fb", "Gb"]),
    ("A", ["A", "B", "C", "D", "E", "F", "G"]),
    // Re-spelled from the older table row `A# C D D# F G A`, which is not an
    // A# minor scale. Reachable through lookup, so A# minor chords differ
    // from that table.
    ("A#", ["A#", "B#", "C#", "D#", "E#", "F#", "G#"]),
    ("Bb", ["Bb", "C", "Db", "Eb", "F", "Gb", "Ab"]),
    ("B", ["B", "C#", "D", "E", "F#", "G", "A"]),
    ("Cb", ["Cb", "Db", "Ebb", "Fb", "Gb", "Abb", "Bbb"]),
];

const DORIAN: &[CatalogEntry] = &[
    ("C", ["C", "D", "Eb", "F", "G", "A", "Bb"]),
    ("C#", ["C#", "D#", "E", "F#", "G#", "A#", "B"]),
    ("Db", ["Db", "Eb", "Fb", "Gb", "Ab", "Bb", "Cb"]),
    ("D", ["D", "E", "F", "G", "A", "B", "C"]),
    ("D#", ["D#", "E#", "F#", "G#", "A#", "B#", "C#"]),
    ("Eb", ["Eb", "F", "Gb", "Ab", "Bb", "C", "Db"]),
    ("E", ["E", "F#", "G", "A", "B", "C#", "D"]),
    ("Fb", ["Fb", "Gb", "Abb", "Bbb", "Cb", "Db", "Ebb"]),
    ("F", ["F", "G", "Ab", "Bb", "C", "D", "Eb"]),
    ("F#", ["F#", "G#", "A", "B", "C#", "D#", "E"]),
    ("Gb", ["Gb", "Ab", "Bbb", "Cb", "Db", "Eb", "Fb"]),
    ("G", ["G", "A", "Bb", "C", "D", "E", "F"]),
    ("G#", ["G#", "A#", "B", "C#", "D#", "E#", "F#"]),
    ("Ab", ["Ab", "Bb", "Cb", "Db", "Eb", "F", "Gb"]),
    ("A", ["A", "B", "C", "D", "E", "F#", "G"]),
    ("A#", ["A#", "B#", "C#", "D#", "E#", "F##", "G#"]),
    ("Bb", ["Bb", "C", "Db", "Eb", "F", "G", "Ab"]),
    ("B", ["B", "C#", "D", "E", "F#", "G#", "A"]),
    ("Cb", ["Cb", "Db", "Ebb", "Fb", "Gb", "Ab", "Bbb"]),
];

const PHRYGIAN: &[CatalogEntry] = &[
    ("C", ["C", "Db", "Eb", "F", "G", "Ab", "Bb"]),
    ("C#", ["C#", "D", "E", "F#", "G#", "A", "B"]),
    ("Db", ["Db", "Ebb", "Fb", "Gb", "Ab", "Bbb", "Cb"]),
    ("D", ["D", "Eb", "F", "G", "A", "Bb", "C"]),
    ("D#", ["D#", "E", "F#", "G#", "A#", "B", "C#"]),
    ("Eb", ["Eb", "Fb", "Gb", "Ab", "Bb", "Cb", "Db"]),
    ("E", ["E", "F", "G", "A", "B", "C", "D"]),
    ("Fb", ["Fb", "Gbb", "Abb", "Bbb", "Cb", "Dbb", "Ebb"]),
    ("F", ["F", "Gb", "Ab", "Bb", "C", "Db", "Eb"]),
    ("F#", ["F#", "G", "A", "B", "C#", "D", "E"]),
    ("Gb", ["Gb", "Abb", "Bbb", "Cb", "Db", "Ebb", "Fb"]),
    ("G", ["G", "Ab", "Bb", "C", "D", "Eb", "F"]),
    ("G#", ["G#", "A", "B", "C#", "D#", "E", "F#"]),
    ("Ab", ["Ab", "Bbb", "Cb", "Db", "Eb", "Fb", "Gb"]),
    ("A", ["A", "Bb", "C", "D", "E", "F", "G"]),
    ("A#", ["A#", "B", "C#", "D#", "E#", "F#", "G#"]),
    ("Bb", ["Bb", "Cb", "Db", "Eb", "F", "Gb", "Ab"]),
    ("B", ["B", "C", "D", "E", "F#", "G", "A"]),
    ("Cb", ["Cb", "Dbb", "Ebb", "Fb", "Gb", "Abb", "Bbb"]),
];

const LYDIAN: &[CatalogEntry] = &[
    ("C", ["C", "D", "E", "F#", "G", "A", "B"]),
    ("C#", ["C#", "D#", "E#", "F##", "G#", "A#", "B#"]),
    ("Db", ["Db", "Eb", "F", "G", "Ab", "Bb", "C"]),
    ("D", ["D", "E", "F#", "G#", "A", "B", "C#"]),
    ("D#", ["D#", "E#", "F##", "G##", "A#", "B#", "C##"]),
    ("Eb", ["Eb", "F", "G", "A", "Bb", "C", "D"]),
    ("E", ["E", "F#", "G#", "A#", "B", "C#", "D#"]),
    ("Fb", ["Fb", "Gb", "Ab", "Bb", "Cb", "Db", "Eb"]),
    ("F", ["F", "G", "A", "B", "C", "D", "E"]),
    ("F#", ["F#", "G#", "A#", "B#", "C#", "D#", "E#"]),
    // Raised fourth (C); older tables spelled it Cb.
    ("Gb", ["Gb", "Ab", "Bb", "C", "Db", "Eb", "F"]),
    ("G", ["G", "A", "B", "C#", "D", "E", "F#"]),
    ("G#", ["G#", "A#", "B#", "C##", "D#", "E#", "F##"]),
    ("Ab", ["Ab", "Bb", "C", "D", "Eb", "F", "G"]),
    ("A", ["A", "B", "C#", "D#", "E", "F#", "G#"]),
    ("A#", ["A#", "B#", "C##", "D##", "E#", "F##", "G##"]),
    ("Bb", ["Bb", "C", "D", "E", "F", "G", "A"]),
    ("B", ["B", "C#", "D#", "E#", "F#", "G#", "A#"]),
    // Raised fourth (F); older tables spelled it Fb.
    ("Cb", ["Cb", "Db", "Eb", "F", "Gb", "Ab", "Bb"]),
];

const MIXOLYDIAN: &[CatalogEntry] = &[
    ("C", ["C", "D", "E", "F", "G", "A", "Bb"]),
    ("C#", ["C#", "D#", "E#", "F#", "G#", "A#", "B"]),
    ("Db", ["Db", "Eb", "F", "Gb", "Ab", "Bb", "Cb"]),
    ("D", ["D", "E", "F#", "G", "A", "B", "C"]),
    ("D#", ["D#", "E#", "F##", "G#", "A#", "B#", "C#"]),
    ("Eb", ["Eb", "F", "G", "Ab", "Bb", "C", "Db"]),
    ("E", ["E", "F#", "G#", "A", "B", "C#", "D"]),
    ("F", ["F", "G", "A", "Bb", "C", "D", "Eb"]),
    ("F#", ["F#", "G#", "A#", "B", "C#", "D#", "E"]),
    ("Gb", ["Gb", "Ab", "Bb", "Cb", "Db", "Eb", "Fb"]),
    ("G", ["G", "A", "B", "C", "D", "E", "F"]),
    ("G#", ["G#", "A#", "B#", "C#", "D#", "E#", "F#"]),
    ("Ab", ["Ab", "Bb", "C", "Db", "Eb", "F", "Gb"]),
    ("A", ["A", "B", "C#", "D", "E", "F#", "G"]),
    ("A#", ["A#", "B#", "C##", "D#", "E#", "F##", "G#"]),
    ("Bb", ["Bb", "C", "D", "Eb", "F", "G", "Ab"]),
    ("B", ["B", "C#", "D#", "E", "F#", "G#", "A"]),
    ("Cb", ["Cb", "Db", "Eb", "Fb", "Gb", "Ab", "Bbb"]),
];

const LOCRIAN: &[CatalogEntry] = &[
    ("C", ["C", "Db", "Eb", "F", "Gb", "Ab", "Bb"]),
    ("C#", ["C#", "D", "E", "F#", "G", "A", "B"]),
    ("Db", ["Db", "Ebb", "Fb", "Gb", "Abb", "Bbb", "Cb"]),
    ("D", ["D", "Eb", "F", "G", "Ab", "Bb", "C"]),
    ("D#", ["D#", "E", "F#", "G#", "A", "B", "C#"]),
    ("Eb", ["Eb", "Fb", "Gb", "Ab", "Bbb", "Cb", "Db"]),
    ("E", ["E", "F", "G", "A", "Bb", "C", "D"]),
    // Lowered fifth (Cbb); older tables spelled it Cb.
    ("Fb", ["Fb", "Gbb", "Abb", "Bbb", "Cbb", "Dbb", "Ebb"]),
    ("F", ["F", "Gb", "Ab", "Bb", "Cb", "Db", "Eb"]),
    ("F#", ["F#", "G", "A", "B", "C", "D", "E"]),
    ("Gb", ["Gb", "Abb", "Bbb", "Cb", "Dbb", "Ebb", "Fb"]),
    ("G", ["G", "Ab", "Bb", "C", "Db", "Eb", "F"]),
    ("G#", ["G#", "A", "B", "C#", "D", "E", "F#"]),
    ("Ab", ["Ab", "Bbb", "Cb", "Db", "Ebb", "Fb", "Gb"]),
    ("A", ["A", "Bb", "C", "D", "Eb", "F", "G"]),
    ("A#", ["A#", "B", "C#", "D#", "E", "F#", "G#"]),
    ("Bb", ["Bb", "Cb", "Db", "Eb", "Fb", "Gb", "Ab"]),
    ("B", ["B", "C", "D", "E", "F", "G", "A"]),
    // Lowered fifth (Gbb); older tables spelled it Gb.
    ("Cb", ["Cb", "Dbb", "Ebb", "Fb", "Gbb", "Abb", "Bbb"]),
];

const HARMONIC_MINOR: &[CatalogEntry] = &[
    ("C", ["C", "D", "Eb", "F", "G", "Ab", "B"]),
    ("C#", ["C#", "D#", "E", "F#", "G#", "A", "B#"]),
    ("Db", ["Db", "Eb", "Fb", "Gb", "Ab", "Bbb", "C"]),
    ("D", ["D", "E", "F", "G", "A", "Bb", "C#"]),
    ("D#", ["D#", "E#", "F#", "G#", "A#", "B", "C##"]),
    ("Eb", ["Eb", "F", "Gb", "Ab", "Bb", "Cb", "D"]),
    ("E", ["E", "F#", "G", "A", "B", "C", "D#"]),
    // Raised seventh (Eb); older tables spelled it Ebb.
    ("Fb", ["Fb", "Gb", "Abb", "Bbb", "Cb", "Dbb", "Eb"]),
    ("F", ["F", "G", "Ab", "Bb", "C", "Db", "E"]),
    ("F#", ["F#", "G#", "A", "B", "C#", "D", "E#"]),
    ("Gb", ["Gb", "Ab", "Bbb", "Cb", "Db", "Ebb", "F"]),
    ("G", ["G", "A", "Bb", "C", "D", "Eb", "F#"]),
    ("G#", ["G#", "A#", "B", "C#", "D#", "E", "F##"]),
    ("Ab", ["Ab", "Bb", "Cb", "Db", "Eb", "Fb", "G"]),
    ("A", ["A", "B", "C", "D", "E", "F", "G#"]),
    ("A#", ["A#", "B#", "C#", "D#", "E#", "F#", "G##"]),
    ("Bb", ["Bb", "C", "Db", "Eb", "F", "Gb", "A"]),
    ("B", ["B", "C#", "D", "E", "F#", "G", "A#"]),
    ("Cb", ["Cb", "Db", "Ebb", "Fb", "Gb", "Abb", "Bb"]),
];
#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::pitch::enharmonic_eq;

    #[test]
    fn test_intervals_span_octave() {
        for scale_type in ScaleType::ALL {
            let total: u32 = scale_type.intervals().iter().map(|&s| s as u32).sum();
            assert_eq!(total, 12, "{} intervals", scale_type);
        }
    }

    #[test]
    fn test_every_row_starts_on_its_tonic() {
        for scale_type in ScaleType::ALL {
            for (key, scale) in catalog_entries(scale_type) {
                assert_eq!(scale.len(), SCALE_LENGTH);
                assert_eq!(scale[0], *key);
                assert!(enharmonic_eq(scale[0], key));
            }
        }
    }

    #[test]
    fn test_lookup_every_key_starts_on_normalized_tonic() {
        let mut misses = Vec::new();
        for scale_type in ScaleType::ALL {
            for (key, _) in catalog_entries(scale_type) {
                match lookup_scale(key, scale_type) {
                    Ok(scale) => {
                        assert_eq!(scale.len(), SCALE_LENGTH);
                        assert!(enharmonic_eq(scale[0], &normalize_note(key)));
                    }
                    Err(e) => {
                        assert!(matches!(e, ChordError::UnknownTonic { .. }), "{}", e);
                        misses.push((scale_type, *key));
                    }
                }
            }
        }
        assert!(misses.contains(&(ScaleType::Major, "Ab")));
        assert!(misses.contains(&(ScaleType::Minor, "Ab")));
    }

    #[test]
    fn test_minor_a_sharp_row() {
        assert_eq!(
            lookup_scale("A#", ScaleType::Minor).unwrap(),
            &["A#", "B#", "C#", "D#", "E#", "F#", "G#"]
        );
    }

    #[test]
    fn test_lookup_scale() {
        assert_eq!(
            lookup_scale("C", ScaleType::Major).unwrap(),
            &["C", "D", "E", "F", "G", "A", "B"]
        );
        assert_eq!(
            lookup_scale("g", ScaleType::Mixolydian).unwrap(),
            &["G", "A", "B", "C", "D", "E", "F"]
        );
    }

    #[test]
    fn test_lookup_redirects_flat_tonic() {
        // "Db" normalizes to "C#", so the sharp row comes back.
        let scale = lookup_scale("Db", ScaleType::Major).unwrap();
        assert_eq!(scale[0], "C#");
        // The flat row is still stored.
        assert_eq!(stored_scale(ScaleType::Major, "Db").unwrap()[0], "Db");
    }

    #[test]
    fn test_lookup_missing_sharp_row() {
        let err = lookup_scale("Ab", ScaleType::Major).unwrap_err();
        assert_eq!(
            err,
            ChordError::UnknownTonic {
                tonic: "G#".to_string(),
                scale_type: "Major".to_string(),
            }
        );
    }

    #[test]
    fn test_lookup_unknown_scale_name() {
        let err = lookup_scale_named("C", "Blues").unwrap_err();
        assert_eq!(err, ChordError::UnknownScaleType("Blues".to_string()));
    }

    #[test]
    fn test_scale_type_from_str() {
        assert_eq!("major".parse::<ScaleType>().unwrap(), ScaleType::Major);
        assert_eq!(
            "harmonic minor".parse::<ScaleType>().unwrap(),
            ScaleType::HarmonicMinor
        );
        assert_eq!(
            "MIXOLYDIAN".parse::<ScaleType>().unwrap(),
            ScaleType::Mixolydian
        );
        assert!("".parse::<ScaleType>().is_err());
    }
}
