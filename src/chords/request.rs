use std::fmt;
use std::str::FromStr;

use crate::chords::builder::{chord_from_scale, complexity_profile};
use crate::chords::inversion::invert;
use crate::chords::types::{ChordRequest, ChordResult};
use crate::error::ChordError;
use crate::theory::pitch::normalize_note;
use crate::theory::scales::{lookup_scale, ScaleType};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Numeral {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
}

impl Numeral {
    pub const ALL: [Numeral; 7] = [
        Numeral::I,
        Numeral::II,
        Numeral::III,
        Numeral::IV,
        Numeral::V,
        Numeral::VI,
        Numeral::VII,
    ];

    /// Zero-based scale degree.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Numeral::I => "I",
            Numeral::II => "II",
            Numeral::III => "III",
            Numeral::IV => "IV",
            Numeral::V => "V",
            Numeral::VI => "VI",
            Numeral::VII => "VII",
        }
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Numeral {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Numeral::ALL
            .into_iter()
            .find(|n| n.as_str() == upper)
            .ok_or_else(|| ChordError::InvalidNumeral(s.to_string()))
    }
}

impl ChordRequest {
    /// Validate the request and build the inverted chord.
    pub fn generate(&self) -> Result<ChordResult, ChordError> {
        let tonic = normalize_note(self.tonic.trim());
        let scale_type: ScaleType = self.scale_type.trim().parse()?;
        let numeral: Numeral = self.numeral.parse()?;
        let profile = complexity_profile(self.complexity)?;
        if self.inversion < 1 {
            return Err(ChordError::InvalidInversion(self.inversion));
        }

        let scale = lookup_scale(&tonic, scale_type)?;
        let chord = invert(
            &chord_from_scale(scale, numeral.index(), profile)?,
            self.inversion,
        );
        log::debug!(
            "{} {} {} complexity {} inversion {}: {:?}",
            tonic,
            scale_type,
            numeral,
            self.complexity,
            self.inversion,
            chord
        );

        Ok(ChordResult {
            tonic,
            scale_type: scale_type.to_string(),
            numeral: numeral.to_string(),
            complexity: self.complexity,
            inversion: self.inversion,
            scale: scale.iter().map(|n| n.to_string()).collect(),
            chord: chord.into_iter().map(String::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(tonic: &str, scale_type: &str, complexity: i64, numeral: &str, inversion: i64) -> ChordRequest {
        ChordRequest {
            tonic: tonic.to_string(),
            scale_type: scale_type.to_string(),
            complexity,
            numeral: numeral.to_string(),
            inversion,
        }
    }

    #[test]
    fn test_numeral_parse() {
        assert_eq!("vii".parse::<Numeral>().unwrap(), Numeral::VII);
        assert_eq!(" iv ".parse::<Numeral>().unwrap().index(), 3);
        assert_eq!(Numeral::I.index(), 0);
        assert!(matches!(
            "VIII".parse::<Numeral>(),
            Err(ChordError::InvalidNumeral(_))
        ));
    }

    #[test]
    fn test_generate_full_cycle_inversion() {
        // Inversion equal to the chord length is root position.
        let result = request("g", "mixolydian", 9, "VII", 5).generate().unwrap();
        assert_eq!(result.chord, vec!["F", "A", "C", "E", "B"]);
        assert_eq!(result.display(), "F A C E B");
        assert_eq!(result.scale, vec!["G", "A", "B", "C", "D", "E", "F"]);
        assert_eq!(result.numeral, "VII");
    }

    #[test]
    fn test_generate_first_inversion() {
        let result = request("C", "Major", 1, "I", 1).generate().unwrap();
        assert_eq!(result.display(), "E G C");
    }

    #[test]
    fn test_generate_harmonic_minor_title_case() {
        let result = request("a", "harmonic minor", 3, "v", 4).generate().unwrap();
        assert_eq!(result.scale_type, "Harmonic Minor");
        // E G# B D
        assert_eq!(result.chord, vec!["E", "G#", "B", "D"]);
    }

    #[test]
    fn test_generate_flat_tonic_uses_sharp_row() {
        let result = request("Eb", "Major", 1, "I", 3).generate().unwrap();
        assert_eq!(result.tonic, "D#");
        assert_eq!(result.chord, vec!["D#", "F##", "A#"]);
    }

    #[test]
    fn test_generate_matches_builder() {
        let result = request("D", "dorian", 10, "ii", 2).generate().unwrap();
        let expected = crate::chords::builder::build_chord_with_inversion(
            ScaleType::Dorian,
            "D",
            1,
            complexity_profile(10).unwrap(),
            2,
        )
        .unwrap();
        assert_eq!(result.chord, expected);
        assert_eq!(result.scale, vec!["D", "E", "F", "G", "A", "B", "C"]);
    }

    #[test]
    fn test_generate_rejects_bad_input() {
        assert!(matches!(
            request("C", "Blues", 1, "I", 1).generate(),
            Err(ChordError::UnknownScaleType(_))
        ));
        assert!(matches!(
            request("C", "Major", 11, "I", 1).generate(),
            Err(ChordError::InvalidComplexity(11))
        ));
        assert!(matches!(
            request("C", "Major", 1, "I", 0).generate(),
            Err(ChordError::InvalidInversion(0))
        ));
        assert!(matches!(
            request("Ab", "Major", 1, "I", 1).generate(),
            Err(ChordError::UnknownTonic { .. })
        ));
    }
}
