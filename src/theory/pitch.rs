/// Chromatic spellings used as canonical pitch classes, sharps preferred.
pub const CHROMATIC_SCALE: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Enharmonic table applied by [`normalize_note`]. Only single-accidental
/// spellings appear here; double accidentals pass through unchanged.
const ENHARMONICS: [(&str, &str); 14] = [
    ("A#", "A#"),
    ("Bb", "A#"),
    ("B#", "C"),
    ("Cb", "B"),
    ("C#", "C#"),
    ("Db", "C#"),
    ("D#", "D#"),
    ("Eb", "D#"),
    ("E#", "F"),
    ("Fb", "E"),
    ("F#", "F#"),
    ("Gb", "F#"),
    ("G#", "G#"),
    ("Ab", "G#"),
];

pub(crate) fn capitalize(note: &str) -> String {
    let mut chars = note.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalize a spelling ("bb" -> "Bb") and collapse it through the
/// enharmonic table. Unknown tokens come back capitalized but otherwise
/// untouched.
pub fn normalize_note(note: &str) -> String {
    let note = capitalize(note);
    match ENHARMONICS.iter().find(|(from, _)| *from == note) {
        Some((_, to)) => to.to_string(),
        None => note,
    }
}

/// Split a spelling into its letter and net accidental count.
/// `"F##"` -> `('F', 2)`, `"Bbb"` -> `('B', -2)`.
pub fn parse_spelling(note: &str) -> Option<(char, i32)> {
    let mut chars = note.chars();
    let step = chars.next()?.to_ascii_uppercase();
    if !matches!(step, 'A'..='G') {
        return None;
    }
    let mut alter = 0;
    for c in chars {
        match c {
            '#' => alter += 1,
            'b' => alter -= 1,
            _ => return None,
        }
    }
    Some((step, alter))
}

pub fn step_semitones(step: char) -> i32 {
    match step {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => 0,
    }
}

pub fn midi_from_pitch(step: char, alter: i32, octave: i32) -> i32 {
    (octave + 1) * 12 + step_semitones(step) + alter
}

/// Pitch class 0..12 of a spelling with any number of accidentals.
pub fn pitch_class(note: &str) -> Option<u8> {
    let (step, alter) = parse_spelling(&normalize_note(note))?;
    Some((step_semitones(step) + alter).rem_euclid(12) as u8)
}

pub fn canonical_pitch(note: &str) -> Option<&'static str> {
    pitch_class(note).map(|pc| CHROMATIC_SCALE[pc as usize])
}

/// Enharmonic comparison: both spellings are normalized and reduced to their
/// canonical pitch class. Unparseable spellings fall back to comparing the
/// normalized tokens.
pub fn enharmonic_eq(a: &str, b: &str) -> bool {
    match (canonical_pitch(a), canonical_pitch(b)) {
        (Some(x), Some(y)) => x == y,
        _ => normalize_note(a) == normalize_note(b),
    }
}
