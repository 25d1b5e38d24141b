//! Reference statistics for natural-language plaintext.
//!
//! The solvers assume German plaintext; the partial English table is kept
//! for comparison only.

/// Relative unigram frequencies of German letters, most frequent first
///
/// Frequencies from: https://de.wikipedia.org/wiki/Buchstabenh%C3%A4ufigkeit
pub const GERMAN_FREQUENCIES: [(char, f64); 26] = [
    ('E', 0.1740),
    ('N', 0.0978),
    ('I', 0.0755),
    ('S', 0.0727),
    ('R', 0.0700),
    ('A', 0.0651),
    ('T', 0.0615),
    ('D', 0.0508),
    ('H', 0.0476),
    ('U', 0.0435),
    ('L', 0.0344),
    ('C', 0.0306),
    ('G', 0.0301),
    ('M', 0.0253),
    ('O', 0.0251),
    ('B', 0.0189),
    ('W', 0.0189),
    ('F', 0.0166),
    ('K', 0.0121),
    ('Z', 0.0113),
    ('P', 0.0079),
    ('V', 0.0067),
    ('J', 0.0027),
    ('Y', 0.0004),
    ('X', 0.0003),
    ('Q', 0.0002),
];

/// Unigram frequencies of the six most frequent English letters
pub const ENGLISH_FREQUENCIES: [(char, f64); 6] = [
    ('E', 0.1270),
    ('T', 0.0956),
    ('A', 0.0818),
    ('O', 0.0751),
    ('I', 0.0697),
    ('N', 0.0675),
];

/// Common German words used to score Scytale decryption attempts
///
/// Matched as case-sensitive substrings, so frequent fragments count even
/// when the candidate plaintext carries no word boundaries
pub const GERMAN_COMMON_WORDS: [&str; 101] = [
    "der", "die", "das", "und", "ist", "ich", "nicht", "mit", "ein", "eine", "einen", "einem",
    "dem", "den", "des", "sie", "er", "es", "wir", "ihr", "sich", "auf", "aus", "bei", "nach",
    "von", "zu", "zum", "zur", "im", "am", "an", "als", "auch", "bis", "durch", "gegen", "ohne",
    "um", "unter", "wie", "wenn", "aber", "oder", "doch", "nur", "noch", "schon", "sehr", "dann",
    "denn", "dort", "hier", "man", "kann", "muss", "soll", "will", "wird", "wurde", "werden",
    "haben", "hat", "hatte", "sind", "war", "waren", "sein", "seine", "ihre", "jetzt", "immer",
    "wieder", "mehr", "vor", "ueber", "zwischen", "alle", "alles", "etwas", "nichts", "gut", "so",
    "da", "wo", "was", "wer", "Der", "Die", "Das", "Und", "Ich", "Es", "Sie", "Wir", "Ein", "Mit",
    "Nach", "Schon", "Text", "Zeit",
];
