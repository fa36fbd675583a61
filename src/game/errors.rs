use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Requested {requested} {pool} numbers but only {available} exist")]
    TooManyNumbers {
        pool: &'static str,
        requested: usize,
        available: usize,
    },
    #[error("A round needs at least one number")]
    EmptyRound,
    #[error("Vowel count must be between {min} and {max}, got {got}")]
    InvalidVowelCount { got: usize, min: usize, max: usize },
    #[error("Failed to read dictionary {path}: {source}")]
    DictionaryIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Dictionary {path} is not a JSON array of words: {source}")]
    DictionaryJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a letters-round answer scores nothing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WordRejection {
    #[error("No word was given")]
    Empty,
    #[error("Words must have at least {min} letters")]
    TooShort { min: usize },
    #[error("Letter '{0}' is not available")]
    UnavailableLetter(char),
    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),
}
