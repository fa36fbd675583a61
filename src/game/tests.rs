use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::constants::{LARGE_NUMBERS, MAX_TARGET, MIN_TARGET, SMALL_NUMBERS};
use crate::game::{
    Dictionary, GameError, WordRejection, find_best_word, generate_letters,
    generate_numbers_round, score_numbers_round, validate_word,
};

fn sorted(mut numbers: Vec<u64>) -> Vec<u64> {
    numbers.sort_unstable();
    numbers
}

#[test]
fn test_default_numbers_round() {
    let mut rng = StdRng::seed_from_u64(7);
    let round = generate_numbers_round(&mut rng, 2, 4);
    assert!(round.is_ok());
    if let Ok(round) = round {
        assert_eq!(round.numbers.len(), 6);
        let large = round
            .numbers
            .iter()
            .filter(|n| LARGE_NUMBERS.contains(*n))
            .count();
        assert_eq!(large, 2);
        assert!(round.numbers.iter().all(|n| LARGE_NUMBERS.contains(n) || *n <= 10));
        assert!((MIN_TARGET..=MAX_TARGET).contains(&round.target));
    }
}

#[test]
fn test_draws_without_replacement() {
    let mut rng = StdRng::seed_from_u64(11);
    let round = generate_numbers_round(&mut rng, 4, 20);
    assert!(round.is_ok());
    if let Ok(round) = round {
        let mut expected: Vec<u64> = LARGE_NUMBERS.to_vec();
        expected.extend(SMALL_NUMBERS);
        assert_eq!(sorted(round.numbers), sorted(expected));
    }
}

#[test]
fn test_seeded_rounds_repeat() {
    let a = generate_numbers_round(&mut StdRng::seed_from_u64(3), 1, 5);
    let b = generate_numbers_round(&mut StdRng::seed_from_u64(3), 1, 5);
    assert!(a.is_ok());
    assert_eq!(a.ok(), b.ok());
}

#[test]
fn test_round_size_errors() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        generate_numbers_round(&mut rng, 5, 1),
        Err(GameError::TooManyNumbers {
            pool: "large",
            requested: 5,
            available: 4
        })
    ));
    assert!(matches!(
        generate_numbers_round(&mut rng, 0, 21),
        Err(GameError::TooManyNumbers { pool: "small", .. })
    ));
    assert!(matches!(
        generate_numbers_round(&mut rng, 0, 0),
        Err(GameError::EmptyRound)
    ));
}

#[test]
fn test_huge_counts_report_pool_size() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        generate_numbers_round(&mut rng, usize::MAX, 1),
        Err(GameError::TooManyNumbers {
            pool: "large",
            requested: usize::MAX,
            available: 4
        })
    ));
    assert!(matches!(
        generate_numbers_round(&mut rng, 1, usize::MAX),
        Err(GameError::TooManyNumbers { pool: "small", .. })
    ));
}

#[test]
fn test_score_numbers_round() {
    assert_eq!(score_numbers_round(None, 500), 0);
    assert_eq!(score_numbers_round(Some(500), 500), 10);
    assert_eq!(score_numbers_round(Some(505), 500), 7);
    assert_eq!(score_numbers_round(Some(490), 500), 7);
    assert_eq!(score_numbers_round(Some(511), 500), 0);
    assert_eq!(score_numbers_round(Some(0), 500), 0);
}

#[test]
fn test_generate_letters() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let letters = generate_letters(&mut rng, 4);
        assert!(letters.is_ok());
        if let Ok(letters) = letters {
            assert_eq!(letters.len(), 9);
            let vowels = letters.iter().filter(|c| "AEIOU".contains(**c)).count();
            assert_eq!(vowels, 4);
            assert!(letters.iter().all(|c| !"KWX".contains(*c)));
        }
    }
}

#[test]
fn test_generate_letters_vowel_bounds() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(generate_letters(&mut rng, 3).is_ok());
    assert!(generate_letters(&mut rng, 5).is_ok());
    assert!(matches!(
        generate_letters(&mut rng, 2),
        Err(GameError::InvalidVowelCount { got: 2, .. })
    ));
    assert!(matches!(
        generate_letters(&mut rng, 6),
        Err(GameError::InvalidVowelCount { got: 6, .. })
    ));
}

fn letters() -> Vec<char> {
    "PERROSATL".chars().collect()
}

fn dictionary() -> Dictionary {
    Dictionary::from_words(["plato", "Perro", " perros ", "torres", "sol", "", "perro"])
}

#[test]
fn test_dictionary_normalizes() {
    let dict = dictionary();
    assert_eq!(dict.len(), 5);
    assert_eq!(dict.words().first().map(String::as_str), Some("plato"));
    assert!(dict.contains("PERROS"));
    assert!(!dict.contains("gato"));
    assert!(!Dictionary::fallback().is_empty());
    assert!(Dictionary::fallback().contains("tierra"));
}

#[test]
fn test_dictionary_load() {
    let path = std::env::temp_dir().join(format!("cifras-dict-{}.txt", std::process::id()));
    let written = std::fs::write(&path, "Casa\n\nperro\r\n  libro  \n");
    assert!(written.is_ok());

    let dict = Dictionary::load(&path);
    let _ = std::fs::remove_file(&path);
    assert!(dict.is_ok());
    if let Ok(dict) = dict {
        assert_eq!(dict.words(), ["casa", "perro", "libro"]);
    }
}

#[test]
fn test_dictionary_load_json_array() {
    let path = std::env::temp_dir().join(format!("cifras-dict-{}.json", std::process::id()));
    let written = std::fs::write(&path, r#"["Casa", " perro ", "", "árbol", "casa"]"#);
    assert!(written.is_ok());

    let dict = Dictionary::load(&path);
    let _ = std::fs::remove_file(&path);
    assert!(dict.is_ok());
    if let Ok(dict) = dict {
        assert_eq!(dict.words(), ["casa", "perro", "árbol"]);
    }
}

#[test]
fn test_dictionary_load_json_without_extension() {
    let path = std::env::temp_dir().join(format!("cifras-dict-{}.words", std::process::id()));
    let written = std::fs::write(&path, "\n  [\"libro\", \"fuego\"]\n");
    assert!(written.is_ok());

    let dict = Dictionary::load(&path);
    let _ = std::fs::remove_file(&path);
    assert!(dict.is_ok());
    if let Ok(dict) = dict {
        assert_eq!(dict.words(), ["libro", "fuego"]);
    }
}

#[test]
fn test_dictionary_load_malformed_json() {
    let path = std::env::temp_dir().join(format!("cifras-bad-{}.json", std::process::id()));
    let written = std::fs::write(&path, r#"["casa", 3"#);
    assert!(written.is_ok());

    let dict = Dictionary::load(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(dict, Err(GameError::DictionaryJson { .. })));
}

#[test]
fn test_dictionary_load_missing_file() {
    let path = std::env::temp_dir().join("cifras-no-such-dictionary.txt");
    assert!(matches!(
        Dictionary::load(&path),
        Err(GameError::DictionaryIo { .. })
    ));
}

#[test]
fn test_validate_word() {
    let dict = dictionary();
    let letters = letters();

    assert_eq!(validate_word("perros", &letters, &dict), Ok(6));
    assert_eq!(validate_word(" Perro ", &letters, &dict), Ok(5));
    assert_eq!(validate_word("plato", &letters, &dict), Ok(5));
    assert_eq!(validate_word("   ", &letters, &dict), Err(WordRejection::Empty));
    assert_eq!(
        validate_word("sol", &letters, &dict),
        Err(WordRejection::TooShort { min: 5 })
    );
    assert_eq!(
        validate_word("perrrro", &letters, &dict),
        Err(WordRejection::UnavailableLetter('R'))
    );
    assert_eq!(
        validate_word("salto", &letters, &dict),
        Err(WordRejection::NotInDictionary("salto".to_string()))
    );
}

#[test]
fn test_find_best_word() {
    let dict = dictionary();
    assert_eq!(find_best_word(&letters(), &dict), Some("perros"));

    let no_s: Vec<char> = "PERROATLX".chars().collect();
    assert_eq!(find_best_word(&no_s, &dict), Some("plato"));

    let nothing: Vec<char> = "AAAAAAAAA".chars().collect();
    assert_eq!(find_best_word(&nothing, &dict), None);
}
