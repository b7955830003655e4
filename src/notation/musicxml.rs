use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::ChordError;
use crate::theory::pitch::{midi_from_pitch, parse_spelling};

const BASE_OCTAVE: i32 = 4;

/// A spelled note placed in a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoicedNote {
    pub step: char,
    pub alter: i32,
    pub octave: i32,
}

impl VoicedNote {
    pub fn midi(&self) -> i32 {
        midi_from_pitch(self.step, self.alter, self.octave)
    }
}

/// Stack the chord upward: the first note sits in octave 4 and every later
/// note takes the lowest octave that puts it above the previous one.
pub fn voice_chord<S: AsRef<str>>(chord: &[S]) -> Result<Vec<VoicedNote>, ChordError> {
    let mut voiced: Vec<VoicedNote> = Vec::with_capacity(chord.len());
    for note in chord {
        let note = note.as_ref();
        let (step, alter) =
            parse_spelling(note).ok_or_else(|| ChordError::InvalidNote(note.to_string()))?;
        let mut v = VoicedNote {
            step,
            alter,
            octave: BASE_OCTAVE,
        };
        if let Some(prev) = voiced.last() {
            while v.midi() <= prev.midi() {
                v.octave += 1;
            }
        }
        voiced.push(v);
    }
    Ok(voiced)
}

fn spelling(step: char, alter: i32) -> String {
    let mut s = step.to_string();
    let accidental = if alter > 0 { '#' } else { 'b' };
    for _ in 0..alter.unsigned_abs() {
        s.push(accidental);
    }
    s
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), ChordError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_note(writer: &mut Writer<Vec<u8>>, note: &VoicedNote, in_chord: bool) -> Result<(), ChordError> {
    writer.write_event(Event::Start(BytesStart::new("note")))?;
    if in_chord {
        writer.write_event(Event::Empty(BytesStart::new("chord")))?;
    }
    writer.write_event(Event::Start(BytesStart::new("pitch")))?;
    write_text_element(writer, "step", &note.step.to_string())?;
    if note.alter != 0 {
        write_text_element(writer, "alter", &note.alter.to_string())?;
    }
    write_text_element(writer, "octave", &note.octave.to_string())?;
    writer.write_event(Event::End(BytesEnd::new("pitch")))?;
    write_text_element(writer, "duration", "4")?;
    write_text_element(writer, "type", "whole")?;
    writer.write_event(Event::End(BytesEnd::new("note")))?;
    Ok(())
}

/// Render a chord as a one-measure MusicXML document, one whole-note chord
/// (or a whole rest for an empty chord).
pub fn chord_to_musicxml<S: AsRef<str>>(chord: &[S]) -> Result<String, ChordError> {
    let voiced = voice_chord(chord)?;
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let mut root = BytesStart::new("score-partwise");
    root.push_attribute(("version", "4.0"));
    writer.write_event(Event::Start(root))?;

    writer.write_event(Event::Start(BytesStart::new("part-list")))?;
    let mut score_part = BytesStart::new("score-part");
    score_part.push_attribute(("id", "P1"));
    writer.write_event(Event::Start(score_part))?;
    write_text_element(&mut writer, "part-name", "Chord")?;
    writer.write_event(Event::End(BytesEnd::new("score-part")))?;
    writer.write_event(Event::End(BytesEnd::new("part-list")))?;

    let mut part = BytesStart::new("part");
    part.push_attribute(("id", "P1"));
    writer.write_event(Event::Start(part))?;
    let mut measure = BytesStart::new("measure");
    measure.push_attribute(("number", "1"));
    writer.write_event(Event::Start(measure))?;

    writer.write_event(Event::Start(BytesStart::new("attributes")))?;
    write_text_element(&mut writer, "divisions", "1")?;
    writer.write_event(Event::Start(BytesStart::new("time")))?;
    write_text_element(&mut writer, "beats", "4")?;
    write_text_element(&mut writer, "beat-type", "4")?;
    writer.write_event(Event::End(BytesEnd::new("time")))?;
    writer.write_event(Event::Start(BytesStart::new("clef")))?;
    write_text_element(&mut writer, "sign", "G")?;
    write_text_element(&mut writer, "line", "2")?;
    writer.write_event(Event::End(BytesEnd::new("clef")))?;
    writer.write_event(Event::End(BytesEnd::new("attributes")))?;

    if voiced.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("note")))?;
        writer.write_event(Event::Empty(BytesStart::new("rest")))?;
        write_text_element(&mut writer, "duration", "4")?;
        write_text_element(&mut writer, "type", "whole")?;
        writer.write_event(Event::End(BytesEnd::new("note")))?;
    }
    for (i, note) in voiced.iter().enumerate() {
        write_note(&mut writer, note, i > 0)?;
    }

    writer.write_event(Event::End(BytesEnd::new("measure")))?;
    writer.write_event(Event::End(BytesEnd::new("part")))?;
    writer.write_event(Event::End(BytesEnd::new("score-partwise")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| ChordError::Xml(e.to_string()))
}

/// Read every pitched note of a MusicXML document, grouped into chords by
/// the `<chord/>` marker. Rests are skipped.
pub fn read_chords(xml: &str) -> Result<Vec<Vec<String>>, ChordError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut chords: Vec<Vec<String>> = Vec::new();

    let mut current_tag: Option<&'static str> = None;

    // Note state
    let mut in_note = false;
    let mut note_is_rest = false;
    let mut note_is_chord = false;
    let mut step: Option<char> = None;
    let mut alter: i32 = 0;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"note" => {
                    in_note = true;
                    note_is_rest = false;
                    note_is_chord = false;
                    step = None;
                    alter = 0;
                }
                b"rest" if in_note => note_is_rest = true,
                b"chord" if in_note => note_is_chord = true,
                b"step" => current_tag = Some("step"),
                b"alter" => current_tag = Some("alter"),
                _ => current_tag = None,
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"rest" if in_note => note_is_rest = true,
                b"chord" if in_note => note_is_chord = true,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if let Some(tag) = current_tag.take() {
                    let text = e.unescape()?;
                    match tag {
                        "step" => step = text.trim().chars().next(),
                        "alter" => {
                            if let Ok(v) = text.trim().parse::<i32>() {
                                alter = v;
                            }
                        }
                        _ => {}
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                // An empty <step> or <alter> closes without a text node.
                current_tag = None;
                if e.name().as_ref() == b"note" && in_note {
                    if !note_is_rest {
                        let s = step.ok_or_else(|| ChordError::Xml("Missing pitch step".to_string()))?;
                        let name = spelling(s, alter);
                        match chords.last_mut() {
                            Some(last) if note_is_chord => last.push(name),
                            _ => chords.push(vec![name]),
                        }
                    }
                    in_note = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ChordError::Xml(format!("XML parse error: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(chords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_chord_ascends() {
        let voiced = voice_chord(&["G", "B", "F", "C", "E"]).unwrap();
        let midis: Vec<i32> = voiced.iter().map(|v| v.midi()).collect();
        assert_eq!(midis, vec![67, 71, 77, 84, 88]);
    }

    #[test]
    fn test_voice_chord_repeated_note_moves_up_an_octave() {
        let voiced = voice_chord(&["C", "C"]).unwrap();
        assert_eq!(voiced[0].octave, 4);
        assert_eq!(voiced[1].octave, 5);
    }

    #[test]
    fn test_voice_chord_invalid_note() {
        assert_eq!(
            voice_chord(&["C", "H"]).unwrap_err(),
            ChordError::InvalidNote("H".to_string())
        );
    }

    #[test]
    fn test_chord_to_musicxml() {
        let xml = chord_to_musicxml(&["D#", "F##", "A#"]).unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<score-partwise version=\"4.0\">"));
        assert_eq!(xml.matches("<chord/>").count(), 2);
        assert!(xml.contains("<alter>2</alter>"));
        assert!(xml.contains("<step>F</step>"));
    }

    #[test]
    fn test_empty_chord_renders_rest() {
        let empty: [&str; 0] = [];
        let xml = chord_to_musicxml(&empty).unwrap();
        assert!(xml.contains("<rest/>"));
        assert!(read_chords(&xml).unwrap().is_empty());
    }

    #[test]
    fn test_read_back_rendered_chord() {
        let chord = ["F", "A", "C", "E", "B"];
        let xml = chord_to_musicxml(&chord).unwrap();
        assert_eq!(read_chords(&xml).unwrap(), vec![chord.to_vec()]);
    }

    #[test]
    fn test_read_chords_groups_by_marker() {
        let xml = r#"<?xml version="1.0"?>
<score-partwise>
  <part id="P1">
    <measure number="1">
      <note><pitch><step>C</step><octave>4</octave></pitch><duration>2</duration></note>
      <note><chord/><pitch><step>E</step><alter>-1</alter><octave>4</octave></pitch><duration>2</duration></note>
      <note><rest/><duration>1</duration></note>
      <note><pitch><step>B</step><alter>-2</alter><octave>3</octave></pitch><duration>1</duration></note>
    </measure>
  </part>
</score-partwise>"#;
        let chords = read_chords(xml).unwrap();
        assert_eq!(chords, vec![vec!["C", "Eb"], vec!["Bbb"]]);
    }

    #[test]
    fn test_read_chords_empty_alter() {
        let xml = "<score-partwise><note><pitch><step>C</step><alter></alter>\
                   <octave>4</octave></pitch></note></score-partwise>";
        assert_eq!(read_chords(xml).unwrap(), vec![vec!["C"]]);
    }

    #[test]
    fn test_read_chords_missing_step() {
        let xml = "<score-partwise><note><pitch><octave>4</octave></pitch></note></score-partwise>";
        assert!(matches!(read_chords(xml), Err(ChordError::Xml(_))));
    }
}
