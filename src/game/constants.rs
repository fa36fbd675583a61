// Number pools and letter tables for a round. Each small number appears twice.
pub const SMALL_NUMBERS: [u64; 20] = [1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10];
pub const LARGE_NUMBERS: [u64; 4] = [25, 50, 75, 100];
pub const DEFAULT_LARGE_COUNT: usize = 2;
pub const DEFAULT_SMALL_COUNT: usize = 4;
pub const MIN_TARGET: i64 = 100;
pub const MAX_TARGET: i64 = 999;

pub const EXACT_POINTS: u32 = 10;
pub const CLOSE_POINTS: u32 = 7;
pub const CLOSE_DISTANCE: u64 = 10;

pub const LETTERS_PER_ROUND: usize = 9;
pub const MIN_VOWELS: usize = 3;
pub const MAX_VOWELS: usize = 5;
pub const DEFAULT_VOWELS: usize = 4;
pub const MIN_WORD_LEN: usize = 5;

// Spanish letter weights
pub const VOWEL_FREQUENCIES: [(char, u32); 5] =
    [('A', 12), ('E', 14), ('I', 6), ('O', 9), ('U', 4)];
pub const CONSONANT_FREQUENCIES: [(char, u32); 21] = [
    ('B', 2),
    ('C', 4),
    ('D', 5),
    ('F', 1),
    ('G', 2),
    ('H', 1),
    ('J', 1),
    ('K', 0),
    ('L', 5),
    ('M', 3),
    ('N', 7),
    ('P', 3),
    ('Q', 1),
    ('R', 7),
    ('S', 8),
    ('T', 5),
    ('V', 1),
    ('W', 0),
    ('X', 0),
    ('Y', 1),
    ('Z', 1),
];

pub const FALLBACK_WORDS: [&str; 10] = [
    "casa", "perro", "gato", "mesa", "silla", "libro", "agua", "fuego", "tierra", "viento",
];
