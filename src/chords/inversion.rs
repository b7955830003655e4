/// Rotate a chord left by `inversion` positions, wrapping modulo its length.
/// Negative counts rotate right. An empty chord stays empty.
pub fn invert<T: Clone>(chord: &[T], inversion: i64) -> Vec<T> {
    if chord.is_empty() {
        return Vec::new();
    }
    let k = inversion.rem_euclid(chord.len() as i64) as usize;
    let mut rotated = chord.to_vec();
    rotated.rotate_left(k);
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eleventh() -> Vec<&'static str> {
        vec!["C", "E", "G", "B", "F"]
    }

    #[test]
    fn test_second_inversion() {
        assert_eq!(invert(&eleventh(), 2), vec!["G", "B", "F", "C", "E"]);
    }

    #[test]
    fn test_full_cycle_is_identity() {
        let chord = eleventh();
        assert_eq!(invert(&chord, 0), chord);
        assert_eq!(invert(&chord, chord.len() as i64), chord);
        assert_eq!(invert(&chord, 3 * chord.len() as i64), chord);
    }

    #[test]
    fn test_distinct_residues_distinct_rotations() {
        let chord = eleventh();
        let rotations: Vec<Vec<&str>> = (0..chord.len() as i64).map(|k| invert(&chord, k)).collect();
        for i in 0..rotations.len() {
            for j in (i + 1)..rotations.len() {
                assert_ne!(rotations[i], rotations[j]);
            }
        }
    }

    #[test]
    fn test_preserves_duplicates() {
        let chord = vec!["C", "E", "C", "G"];
        let rotated = invert(&chord, 1);
        assert_eq!(rotated, vec!["E", "C", "G", "C"]);
        let mut a = rotated.clone();
        let mut b = chord.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_negative_rotates_right() {
        assert_eq!(invert(&eleventh(), -1), vec!["F", "C", "E", "G", "B"]);
    }

    #[test]
    fn test_empty() {
        let empty: Vec<&str> = Vec::new();
        assert!(invert(&empty, 0).is_empty());
        assert!(invert(&empty, 5).is_empty());
    }
}
