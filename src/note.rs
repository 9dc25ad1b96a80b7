use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{anyhow, bail, Context};
use serde_json::Value;

use crate::error::Error;

/// A key on the keyboard, addressed by octave and by its position within that octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub octave: i32,
    pub note_number: i32,
}

impl Note {
    pub fn new(octave: i32, note_number: i32) -> Self {
        Self {
            octave,
            note_number,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.octave, self.note_number)
    }
}

/// Reads a JSON list of `[octave, noteNumber]` pairs from the given file.
pub fn read_notes(path: &Path) -> Result<Vec<Note>, Error> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut contents = String::new();
    BufReader::new(file)
        .read_to_string(&mut contents)
        .with_context(|| format!("failed to read {}", path.display()))?;

    parse_notes(&contents)
}

/// Parses a JSON list of `[octave, noteNumber]` pairs from text.
pub fn parse_notes(contents: &str) -> Result<Vec<Note>, Error> {
    let value: Value = serde_json::from_str(contents).context("failed to parse JSON")?;
    notes_from_value(&value)
}

/// Renders notes as a comma separated list of `[octave, noteNumber]` pairs.
pub fn render_notes(notes: &[Note]) -> String {
    notes
        .iter()
        .map(Note::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn notes_from_value(value: &Value) -> Result<Vec<Note>, Error> {
    let entries = value
        .as_array()
        .ok_or_else(|| Error::source_read("expected a list of [octave, noteNumber] pairs"))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            note_from_entry(entry)
                .with_context(|| format!("invalid note at index {index}"))
                .map_err(Error::from)
        })
        .collect()
}

/// Only the first two elements are read; anything after them is ignored.
fn note_from_entry(entry: &Value) -> anyhow::Result<Note> {
    let pair = entry
        .as_array()
        .ok_or_else(|| anyhow!("expected a list, found {entry}"))?;
    if pair.len() < 2 {
        bail!("expected at least two elements, found {}", pair.len());
    }

    let octave = integer(&pair[0]).context("octave")?;
    let note_number = integer(&pair[1]).context("note number")?;
    Ok(Note::new(octave, note_number))
}

/// Accepts JSON integers and strings holding a base-10 integer.
fn integer(value: &Value) -> anyhow::Result<i32> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| anyhow!("{number} is not a 32-bit integer")),
        Value::String(text) => text
            .trim()
            .parse()
            .with_context(|| format!("'{text}' is not an integer")),
        other => Err(anyhow!("{other} is not an integer")),
    }
}
