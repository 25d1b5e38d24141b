use alloc::string::String;
use alloc::vec::Vec;

use crate::alphabet::{shifted_alphabet, strip_non_letters, ShiftedAlphabet};

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidKey,
}

/// Position of a key letter in the alphabet ('A' = 0, case-insensitive)
///
/// errors: returns Error for non-letter characters
fn letter_position(letter: char) -> Result<i32, Error> {
    if !letter.is_ascii_alphabetic() {
        return Err(Error::InvalidKey);
    }
    Ok((letter.to_ascii_uppercase() as u8 - b'A') as i32)
}

/// Caesar-encrypt a message with a fixed shift
///
/// The key is the letter that 'A' is shifted to. Non-letter characters are
/// stripped before the substitution. Encrypting with the inverse key letter
/// (position 26 - shift mod 26) undoes the transform.
///
/// errors: returns Error for a non-letter shift letter
pub fn caesar(text: &str, shift_letter: char) -> Result<String, Error> {
    let mapping = shifted_alphabet(letter_position(shift_letter)?);
    Ok(strip_non_letters(text)
        .chars()
        .map(|c| mapping.apply(c))
        .collect())
}

/// Vigenere-encrypt a message with a repeating letter key
///
/// Works like Caesar, but position i of the stripped text uses the shift of
/// key letter i mod key length.
///
/// errors: returns Error for an empty key or non-letter key characters
pub fn vigenere(text: &str, key: &str) -> Result<String, Error> {
    if key.is_empty() {
        return Err(Error::InvalidKey);
    }

    let mut mappings: Vec<ShiftedAlphabet> = Vec::with_capacity(key.len());
    for letter in key.chars() {
        mappings.push(shifted_alphabet(letter_position(letter)?));
    }

    Ok(strip_non_letters(text)
        .chars()
        .enumerate()
        .map(|(i, c)| mappings[i % mappings.len()].apply(c))
        .collect())
}

/// Scytale-encrypt a message with a fixed block count
///
/// Distributes the characters round-robin across `block` rows and reads the
/// rows back in order, i.e. concatenates the stride-`block` subsequences for
/// start offsets 0..block. Degenerates to the identity when the block count
/// reaches the text length, since every row then holds at most one character.
///
/// errors: returns Error when block < 1
pub fn scytale(text: &str, block: usize) -> Result<String, Error> {
    if block < 1 {
        return Err(Error::InvalidKey);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut res = String::with_capacity(text.len());
    for start in 0..block {
        res.extend(chars.iter().skip(start).step_by(block));
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_caesar() {
        assert_eq!(caesar("Hallo, Welt!", 'x').unwrap(), "ExiilTbiq");
        assert_eq!(caesar("Hallo, Welt!", 'A').unwrap(), "HalloWelt");
        assert_eq!(caesar("", 'M').unwrap(), "");

        assert_eq!(caesar("text", '!'), Err(Error::InvalidKey));
    }

    #[test]
    fn check_caesar_round_trip() {
        // inverse of 'H' (shift 7) is 'T' (shift 19)
        let plaintext = "DiesIstEinLangweiligerSatz";
        let ciphertext = caesar(plaintext, 'H').unwrap();
        assert_eq!(caesar(&ciphertext, 'T').unwrap(), plaintext);
    }

    #[test]
    fn check_vigenere() {
        assert_eq!(vigenere("Hallo, Welt!", "xaa").unwrap(), "EalioWblt");
        // a single-letter key degenerates to Caesar
        assert_eq!(
            vigenere("Hallo, Welt!", "x").unwrap(),
            caesar("Hallo, Welt!", 'x').unwrap()
        );

        assert_eq!(vigenere("text", ""), Err(Error::InvalidKey));
        assert_eq!(vigenere("text", "a1c"), Err(Error::InvalidKey));
    }

    #[test]
    fn check_vigenere_round_trip() {
        // per-letter inverses: A -> A, V -> F, E -> W
        let plaintext = "AveCaesarMorituriTeSalutant";
        let ciphertext = vigenere(plaintext, "AVE").unwrap();
        assert_eq!(vigenere(&ciphertext, "AFW").unwrap(), plaintext);
    }

    #[test]
    fn check_scytale() {
        assert_eq!(scytale("abcdefgh", 3).unwrap(), "adgbehcf");
        // block >= length keeps the text as-is
        assert_eq!(scytale("abc", 3).unwrap(), "abc");
        assert_eq!(scytale("abc", 17).unwrap(), "abc");

        assert_eq!(scytale("text", 0), Err(Error::InvalidKey));
    }

    #[test]
    fn check_scytale_round_trip() {
        // for lengths divisible by the block, the inverse block is len / block
        let plaintext = "abcdefghijkl";
        let ciphertext = scytale(plaintext, 3).unwrap();
        assert_eq!(scytale(&ciphertext, plaintext.len() / 3).unwrap(), plaintext);
    }
}
