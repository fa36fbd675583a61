use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::constants::{
    CONSONANT_FREQUENCIES, FALLBACK_WORDS, LETTERS_PER_ROUND, MAX_VOWELS, MIN_VOWELS,
    MIN_WORD_LEN, VOWEL_FREQUENCIES,
};
use crate::game::errors::{GameError, WordRejection};

/// Word list for the letters round, kept in file order.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Dictionary {
    /// Builds a dictionary, lowercasing and trimming each word. Blank entries
    /// and repeats are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && dictionary.index.insert(word.clone()) {
                dictionary.words.push(word);
            }
        }
        dictionary
    }

    /// Reads a JSON array of words (`.json` files, or text starting with
    /// `[`), otherwise one word per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a JSON file is not an
    /// array of strings.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = fs::read_to_string(path).map_err(|source| GameError::DictionaryIo {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            || text.trim_start().starts_with('[');
        let dictionary = if is_json {
            let words: Vec<String> =
                serde_json::from_str(&text).map_err(|source| GameError::DictionaryJson {
                    path: path.to_path_buf(),
                    source,
                })?;
            Self::from_words(words)
        } else {
            Self::from_words(text.lines())
        };
        info!("Loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    /// Small built-in list used when no dictionary file is available
    pub fn fallback() -> Self {
        Self::from_words(FALLBACK_WORDS)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_lowercase())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn weighted_letter<R: Rng + ?Sized>(rng: &mut R, frequencies: &[(char, u32)]) -> char {
    let total: u32 = frequencies.iter().map(|&(_, w)| w).sum();
    let mut roll = rng.random_range(0..total.max(1));
    for &(letter, weight) in frequencies {
        if roll < weight {
            return letter;
        }
        roll -= weight;
    }
    frequencies.last().map_or('A', |&(letter, _)| letter)
}

/// Deals the nine letters of a round with `vowels` vowels.
///
/// # Errors
///
/// Returns an error if `vowels` is outside `3..=5`.
pub fn generate_letters<R: Rng + ?Sized>(rng: &mut R, vowels: usize) -> Result<Vec<char>, GameError> {
    if !(MIN_VOWELS..=MAX_VOWELS).contains(&vowels) {
        return Err(GameError::InvalidVowelCount {
            got: vowels,
            min: MIN_VOWELS,
            max: MAX_VOWELS,
        });
    }

    let mut letters = Vec::with_capacity(LETTERS_PER_ROUND);
    for _ in 0..vowels {
        letters.push(weighted_letter(rng, &VOWEL_FREQUENCIES));
    }
    for _ in vowels..LETTERS_PER_ROUND {
        letters.push(weighted_letter(rng, &CONSONANT_FREQUENCIES));
    }
    letters.shuffle(rng);
    debug!("Dealt letters {:?}", letters);
    Ok(letters)
}

/// Consumes the letters of `word` from `letters`, returning the first letter
/// that is missing.
fn missing_letter(word: &str, letters: &[char]) -> Option<char> {
    let mut remaining: Vec<char> = letters.iter().flat_map(|c| c.to_uppercase()).collect();
    for ch in word.chars().flat_map(char::to_uppercase) {
        match remaining.iter().position(|&c| c == ch) {
            Some(idx) => {
                remaining.swap_remove(idx);
            }
            None => return Some(ch),
        }
    }
    None
}

/// Checks a letters-round answer and returns its points (one per letter).
///
/// # Errors
///
/// Returns the first rule the word breaks, checked in this order: empty,
/// too short, uses unavailable letters, unknown word.
pub fn validate_word(
    word: &str,
    letters: &[char],
    dictionary: &Dictionary,
) -> Result<u32, WordRejection> {
    let word = word.trim();
    if word.is_empty() {
        return Err(WordRejection::Empty);
    }

    let len = word.chars().count();
    if len < MIN_WORD_LEN {
        return Err(WordRejection::TooShort { min: MIN_WORD_LEN });
    }

    if let Some(ch) = missing_letter(word, letters) {
        return Err(WordRejection::UnavailableLetter(ch));
    }

    if !dictionary.contains(word) {
        return Err(WordRejection::NotInDictionary(word.to_lowercase()));
    }

    Ok(u32::try_from(len).unwrap_or(u32::MAX))
}

/// Longest dictionary word that can be spelled from `letters`. Among equally
/// long words the one listed first wins.
pub fn find_best_word<'a>(letters: &[char], dictionary: &'a Dictionary) -> Option<&'a str> {
    let mut best: Option<&str> = None;
    let mut best_len = MIN_WORD_LEN - 1;

    for word in dictionary.words() {
        let len = word.chars().count();
        if len <= best_len {
            continue;
        }
        if missing_letter(word, letters).is_none() {
            best = Some(word.as_str());
            best_len = len;
        }
    }

    best
}
