use alloc::string::String;

/// Number of letters in the ASCII alphabet
pub const LETTER_COUNT: u8 = 26;

/// Substitution table mapping every letter to the letter a fixed number of
/// positions further down the alphabet, wrapping around at 'Z'
pub struct ShiftedAlphabet {
    targets: [u8; LETTER_COUNT as usize],
}

/// Build the substitution table for a given shift
///
/// The shift is normalized modulo 26 (negative shifts included), so composing
/// a shift with its inverse (26 - shift) yields the identity mapping
pub fn shifted_alphabet(shift: i32) -> ShiftedAlphabet {
    let shift = shift.rem_euclid(LETTER_COUNT as i32) as u8;
    let mut targets = [0u8; LETTER_COUNT as usize];
    for (position, target) in targets.iter_mut().enumerate() {
        *target = (position as u8 + shift) % LETTER_COUNT + b'A';
    }
    ShiftedAlphabet { targets }
}

impl ShiftedAlphabet {
    /// Map a single character, preserving its case class
    ///
    /// Characters outside [A-Za-z] pass through unchanged
    pub fn apply(&self, c: char) -> char {
        if c.is_ascii_uppercase() {
            self.targets[(c as u8 - b'A') as usize] as char
        } else if c.is_ascii_lowercase() {
            self.targets[(c as u8 - b'a') as usize].to_ascii_lowercase() as char
        } else {
            c
        }
    }
}

/// Remove every character outside [A-Za-z], keeping order and case
pub fn strip_non_letters(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}
