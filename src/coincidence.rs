use hashbrown::HashMap;

#[derive(Debug, PartialEq)]
pub enum Error {
    InsufficientData,
}

/// Index of Coincidence of a string
///
/// Sums f(f - 1) over the character counts f, divides by n(n - 1) and scales
/// by the number of distinct characters. Natural-language text under a single
/// substitution alphabet keeps its skewed letter distribution and scores
/// noticeably higher than polyalphabetic or random text.
///
/// errors: returns Error for strings shorter than two characters, where the
/// statistic is undefined
pub fn index_of_coincidence(s: &str) -> Result<f64, Error> {
    let mut frequency: HashMap<char, u64> = HashMap::new();
    let mut length = 0u64;
    for c in s.chars() {
        if let Some(count) = frequency.get_mut(&c) {
            *count += 1;
        } else {
            frequency.insert(c, 1);
        }
        length += 1;
    }

    if length <= 1 {
        return Err(Error::InsufficientData);
    }

    let colliding: u64 = frequency.values().map(|&f| f * (f - 1)).sum();
    Ok(colliding as f64 / (length * (length - 1)) as f64 * frequency.len() as f64)
}
