use tracing::debug;

use crate::error::Error;
use crate::note::Note;

pub const KEYBOARD_MIN_OCTAVE: i32 = -3;
pub const KEYBOARD_MAX_OCTAVE: i32 = 5;
pub const NOTES_PER_OCTAVE: u16 = 12;

/// Residual note numbers below this are unplayable in the lowest octave.
const LOWEST_PLAYABLE_NOTE: i64 = 10;
/// Residual note numbers above this are unplayable in the highest octave.
const HIGHEST_PLAYABLE_NOTE: i64 = 1;

/// Which edge of the keyboard a transposed note fell off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Boundary {
    #[strum(serialize = "below minimum")]
    BelowMinimum,
    #[strum(serialize = "above maximum")]
    AboveMaximum,
}

/// Octave layout of a keyboard, used to decide which transposed notes are playable.
///
/// `notes_per_octave` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyboard {
    min_octave: i32,
    max_octave: i32,
    notes_per_octave: u16,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self {
            min_octave: KEYBOARD_MIN_OCTAVE,
            max_octave: KEYBOARD_MAX_OCTAVE,
            notes_per_octave: NOTES_PER_OCTAVE,
        }
    }
}

impl Keyboard {
    pub fn is_below_minimum(&self, octave: i64, note_number: i64) -> bool {
        octave < i64::from(self.min_octave) + 1 && note_number < LOWEST_PLAYABLE_NOTE
    }

    pub fn is_above_maximum(&self, octave: i64, note_number: i64) -> bool {
        octave > i64::from(self.max_octave) - 1 && note_number > HIGHEST_PLAYABLE_NOTE
    }

    /// Checks a working octave and an unfolded note number against both edges, lowest first.
    pub fn boundary_violation(&self, octave: i64, note_number: i64) -> Option<Boundary> {
        if self.is_below_minimum(octave, note_number) {
            Some(Boundary::BelowMinimum)
        } else if self.is_above_maximum(octave, note_number) {
            Some(Boundary::AboveMaximum)
        } else {
            None
        }
    }

    /// Shifts a single note by the given number of semitones.
    ///
    /// A negative note number borrows whole octaves until it is non-negative. A note number
    /// past the end of the octave is folded back into it without carrying into the octave.
    pub fn transpose_note(&self, note: Note, semitones: i32) -> Result<Note, Error> {
        let per_octave = i64::from(self.notes_per_octave);
        let mut note_number = i64::from(note.note_number) + i64::from(semitones);
        let mut octave = i64::from(note.octave);

        if note_number < 0 {
            let borrowed = (-note_number + per_octave - 1) / per_octave;
            note_number += borrowed * per_octave;
            octave -= borrowed;
        }

        if let Some(boundary) = self.boundary_violation(octave, note_number) {
            return Err(Error::OutOfRange {
                boundary,
                octave,
                note_number,
            });
        }

        // Octaves only ever move down, so one that no longer fits is off the low end.
        let folded = (note_number % per_octave) as i32;
        let octave = i32::try_from(octave).map_err(|_| Error::OutOfRange {
            boundary: Boundary::BelowMinimum,
            octave,
            note_number,
        })?;

        Ok(Note::new(octave, folded))
    }

    /// Shifts every note by the same number of semitones.
    ///
    /// The first unplayable note aborts the whole batch and nothing is returned for the rest.
    pub fn transpose(&self, notes: &[Note], semitones: i32) -> Result<Vec<Note>, Error> {
        debug!(notes = notes.len(), semitones, "transposing notes");
        notes
            .iter()
            .map(|&note| self.transpose_note(note, semitones))
            .collect()
    }
}

/// Transposes notes on the default keyboard.
pub fn transpose(notes: &[Note], semitones: i32) -> Result<Vec<Note>, Error> {
    Keyboard::default().transpose(notes, semitones)
}
