//! Key recovery for the classical ciphers, given ciphertext alone.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use libm::fmax;

use crate::alphabet::{strip_non_letters, LETTER_COUNT};
use crate::cipher;
use crate::coincidence::{index_of_coincidence, Error as CoincidenceError};
use crate::language::{GERMAN_COMMON_WORDS, GERMAN_FREQUENCIES};

/// Default search bound for Vigenere key lengths
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Default search bound for Scytale block counts
pub const DEFAULT_MAX_BLOCK_LENGTH: usize = 100;

/// Fraction of the profile peak a mean IC must exceed to qualify as the key
/// length
const PEAK_THRESHOLD: f64 = 0.95;

/// Number of top-frequency letters paired against the reference table
const PAIRED_LETTERS: usize = 3;

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidParameter,
    Cipher(cipher::Error),
    Coincidence(CoincidenceError),
}

/// Recover the key of a Caesar-encrypted German text
///
/// Ranks the ciphertext letters by descending frequency and pairs the top
/// three against the reference order (E, N, I, ...). Each pair gives a
/// candidate shift as the signed letter-position delta; the most common of
/// the three wins, ties going to the first delta encountered. Decryption
/// applies the inverse shift to the original-case input.
///
/// errors: returns Error when the ciphertext holds fewer than two letters
pub fn solve_caesar(ciphertext: &str) -> Result<(String, char), Error> {
    let cleaned = strip_non_letters(ciphertext).to_ascii_uppercase();
    if cleaned.len() < 2 {
        return Err(Error::Coincidence(CoincidenceError::InsufficientData));
    }

    let mut counts: HashMap<u8, u64> = HashMap::new();
    // letters in ciphertext-encounter order; the stable sort below then
    // breaks equal counts deterministically
    let mut ranked: Vec<u8> = Vec::new();
    for letter in cleaned.bytes() {
        if let Some(count) = counts.get_mut(&letter) {
            *count += 1;
        } else {
            counts.insert(letter, 1);
            ranked.push(letter);
        }
    }
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));

    let mut shifts: Vec<i32> = Vec::with_capacity(PAIRED_LETTERS);
    for (&observed, &(reference, _)) in ranked
        .iter()
        .zip(GERMAN_FREQUENCIES.iter())
        .take(PAIRED_LETTERS)
    {
        shifts.push(observed as i32 - reference as i32);
    }

    // mode of the candidate shifts, first encountered wins ties
    let mut likeliest = shifts[0];
    let mut occurrences = 0;
    for &shift in shifts.iter() {
        let count = shifts.iter().filter(|&&s| s == shift).count();
        if count > occurrences {
            occurrences = count;
            likeliest = shift;
        }
    }

    let letters = LETTER_COUNT as i32;
    let key = (likeliest.rem_euclid(letters) as u8 + b'A') as char;
    let back_shift = ((-likeliest).rem_euclid(letters) as u8 + b'A') as char;
    let decrypted = cipher::caesar(ciphertext, back_shift).map_err(Error::Cipher)?;
    Ok((decrypted, key))
}

/// Mean Index of Coincidence per candidate Vigenere key length
///
/// For every length in 1..max_key_length the uppercased ciphertext is split
/// into that many interleaved columns and the column scores are averaged.
/// The true key length and its multiples stand out, since their columns are
/// single-substitution text. The (length, mean IC) pairs are returned in
/// full so callers can chart the profile.
///
/// errors: returns Error when max_key_length < 2, or when a column is too
/// short to score
pub fn coincidence_profile(
    ciphertext: &str,
    max_key_length: usize,
) -> Result<Vec<(usize, f64)>, Error> {
    if max_key_length < 2 {
        return Err(Error::InvalidParameter);
    }

    let upper = ciphertext.to_ascii_uppercase();
    let chars: Vec<char> = upper.chars().collect();

    let mut profile = Vec::with_capacity(max_key_length - 1);
    for length in 1..max_key_length {
        let mut total = 0.0_f64;
        for start in 0..length {
            let column: String = chars.iter().skip(start).step_by(length).collect();
            total += index_of_coincidence(&column).map_err(Error::Coincidence)?;
        }
        profile.push((length, total / length as f64));
    }
    Ok(profile)
}

/// Recover the keyword of a Vigenere-encrypted German text
///
/// Takes the shortest candidate length whose mean IC exceeds 95% of the
/// profile peak (integer multiples of the true length score just as high,
/// so the shortest qualifying length is the one to pick), runs Caesar
/// recovery on each original-case column, and re-merges the decrypted
/// fragments round-robin. The recovered key is the concatenation of the
/// per-column key letters.
///
/// errors: returns Error when max_key_length < 2, or when a column is too
/// short to analyze
pub fn solve_vigenere(ciphertext: &str, max_key_length: usize) -> Result<(String, String), Error> {
    let profile = coincidence_profile(ciphertext, max_key_length)?;
    let peak = profile.iter().fold(0.0_f64, |acc, &(_, mean)| fmax(acc, mean));
    let key_length = profile
        .iter()
        .find(|&&(_, mean)| mean > peak * PEAK_THRESHOLD)
        .map(|&(length, _)| length)
        .ok_or(Error::Coincidence(CoincidenceError::InsufficientData))?;

    let chars: Vec<char> = ciphertext.chars().collect();
    let mut fragments: Vec<Vec<char>> = Vec::with_capacity(key_length);
    let mut key = String::with_capacity(key_length);
    for start in 0..key_length {
        let column: String = chars.iter().skip(start).step_by(key_length).collect();
        let (fragment, letter) = solve_caesar(&column)?;
        fragments.push(fragment.chars().collect());
        key.push(letter);
    }

    // zip-longest re-merge: position by position, column by column, skipping
    // columns that ran out
    let longest = fragments.iter().map(|f| f.len()).max().unwrap_or(0);
    let mut message = String::with_capacity(chars.len());
    for position in 0..longest {
        for fragment in fragments.iter() {
            if let Some(&c) = fragment.get(position) {
                message.push(c);
            }
        }
    }
    Ok((message, key))
}

/// Recover the block count of a Scytale-encrypted German text
///
/// Brute-forces block counts from 2 up to max_block_length, decrypting each
/// candidate with the derived block (text length / candidate) and counting
/// substring hits from the common-word dictionary. The candidate with the
/// most hits wins, ties going to the smallest block count.
///
/// errors: returns Error when max_block_length < 3, or when the ciphertext
/// is empty
pub fn solve_scytale(
    ciphertext: &str,
    max_block_length: usize,
) -> Result<(String, usize), Error> {
    if max_block_length < 3 {
        return Err(Error::InvalidParameter);
    }
    let length = ciphertext.chars().count();

    let mut best: Option<(usize, usize, String)> = None;
    for candidate in 2..max_block_length {
        let block = length / candidate;
        if block == 0 {
            // every remaining candidate derives an empty block as well
            break;
        }

        let attempt = cipher::scytale(ciphertext, block).map_err(Error::Cipher)?;
        let hits: usize = GERMAN_COMMON_WORDS
            .iter()
            .map(|word| attempt.matches(word).count())
            .sum();

        match best {
            Some((top, _, _)) if top >= hits => {}
            _ => best = Some((hits, candidate, attempt)),
        }
    }

    match best {
        Some((_, candidate, plaintext)) => Ok((plaintext, candidate)),
        None => Err(Error::Coincidence(CoincidenceError::InsufficientData)),
    }
}
