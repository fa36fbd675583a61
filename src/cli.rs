use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use cifras::game::constants::{DEFAULT_LARGE_COUNT, DEFAULT_SMALL_COUNT, DEFAULT_VOWELS};
use cifras::game::{
    Dictionary, find_best_word, generate_letters, generate_numbers_round, score_numbers_round,
    validate_word,
};
use cifras::{ExpressionSolver, Puzzle, SolverConfig, parse_number_pool, parse_target};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Cifras - Solve countdown-style numbers rounds
#[derive(Parser, Debug)]
#[command(name = "cifras")]
#[command(about = "Find an arithmetic expression over a pool of numbers that reaches a target")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a pool of numbers, e.g. `solve 25,50,75,100,3,6 952`
    Solve {
        /// Comma or space separated non-negative integers
        numbers: String,

        /// Target value
        #[arg(allow_negative_numbers = true)]
        target: String,

        /// Stop searching after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Score a player's result against the target
        #[arg(long, allow_negative_numbers = true)]
        attempt: Option<i64>,
    },
    /// Deal a random numbers round and solve it
    Round {
        #[arg(long, default_value_t = DEFAULT_LARGE_COUNT)]
        large: usize,

        #[arg(long, default_value_t = DEFAULT_SMALL_COUNT)]
        small: usize,

        /// Seed for a reproducible round
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Deal several rounds and solve them in parallel
    Batch {
        #[arg(long, default_value_t = 10)]
        rounds: usize,

        #[arg(long, default_value_t = DEFAULT_LARGE_COUNT)]
        large: usize,

        #[arg(long, default_value_t = DEFAULT_SMALL_COUNT)]
        small: usize,

        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal a letters round, check a word and show the longest one possible
    Letters {
        #[arg(long, default_value_t = DEFAULT_VOWELS)]
        vowels: usize,

        #[arg(long)]
        seed: Option<u64>,

        /// Word list: a JSON array of words or one word per line
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// Word to validate against the dealt letters
        #[arg(long)]
        word: Option<String>,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn solver_with_timeout(timeout_ms: Option<u64>) -> ExpressionSolver {
    match timeout_ms {
        Some(ms) => ExpressionSolver::new(SolverConfig::with_timeout(Duration::from_millis(ms))),
        None => ExpressionSolver::default(),
    }
}

fn format_numbers(numbers: &[u64]) -> String {
    numbers
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_solution(solver: &ExpressionSolver, puzzle: &Puzzle) {
    match solver.solve(&puzzle.numbers, puzzle.target) {
        Some(solution) => println!("{}", solution.describe(puzzle.target)),
        None => {
            warn!("No numbers to solve with");
            println!("No solution found.");
        }
    }
}

fn run_solve(numbers: &str, target: &str, timeout_ms: Option<u64>, attempt: Option<i64>) -> Result<()> {
    let numbers = parse_number_pool(numbers).context("Invalid number pool")?;
    let target = parse_target(target).context("Invalid target")?;
    let puzzle = Puzzle { numbers, target };

    info!(
        "Searching for {} using numbers {}",
        target,
        format_numbers(&puzzle.numbers)
    );
    let solver = solver_with_timeout(timeout_ms);
    if let Some(deadline) = solver.config().deadline {
        info!("Search limited to {:?}", deadline);
    }
    print_solution(&solver, &puzzle);

    if let Some(attempt) = attempt {
        println!("Points: {}", score_numbers_round(Some(attempt), target));
    }
    Ok(())
}

fn run_round(large: usize, small: usize, seed: Option<u64>, timeout_ms: Option<u64>) -> Result<()> {
    let mut rng = rng_from_seed(seed);
    let puzzle = generate_numbers_round(&mut rng, large, small).context("Cannot deal round")?;

    println!("Numbers: {}", format_numbers(&puzzle.numbers));
    println!("Target: {}", puzzle.target);
    print_solution(&solver_with_timeout(timeout_ms), &puzzle);
    Ok(())
}

fn run_batch(rounds: usize, large: usize, small: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = rng_from_seed(seed);
    let puzzles = (0..rounds)
        .map(|_| generate_numbers_round(&mut rng, large, small))
        .collect::<Result<Vec<_>, _>>()
        .context("Cannot deal rounds")?;

    let solver = ExpressionSolver::default();
    let solutions = solver.solve_batch(&puzzles);

    let mut exact = 0;
    for (puzzle, solution) in puzzles.iter().zip(&solutions) {
        let line = match solution {
            Some(solution) => {
                if solution.is_exact(puzzle.target) {
                    exact += 1;
                }
                solution.describe(puzzle.target)
            }
            None => "No solution found.".to_string(),
        };
        println!("[{}] -> {}: {}", format_numbers(&puzzle.numbers), puzzle.target, line);
    }
    println!("Exact: {}/{}", exact, puzzles.len());
    Ok(())
}

fn run_letters(
    vowels: usize,
    seed: Option<u64>,
    dictionary: Option<PathBuf>,
    word: Option<String>,
) -> Result<()> {
    let mut rng = rng_from_seed(seed);
    let letters = generate_letters(&mut rng, vowels).context("Cannot deal letters")?;

    let dictionary = match dictionary {
        Some(path) => Dictionary::load(&path).unwrap_or_else(|e| {
            warn!("{}; using the built-in word list", e);
            Dictionary::fallback()
        }),
        None => {
            info!("No dictionary given; using the built-in word list");
            Dictionary::fallback()
        }
    };

    let shown: Vec<String> = letters.iter().map(char::to_string).collect();
    println!("Letters: {}", shown.join(" "));

    if let Some(word) = word {
        match validate_word(&word, &letters, &dictionary) {
            Ok(points) => println!("Valid word: {} points", points),
            Err(reason) => println!("Rejected: {}", reason),
        }
    }

    match find_best_word(&letters, &dictionary) {
        Some(best) => println!("Best word: {}", best),
        None => println!("Best word: none"),
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level);

    match args.command {
        Command::Solve {
            numbers,
            target,
            timeout_ms,
            attempt,
        } => run_solve(&numbers, &target, timeout_ms, attempt),
        Command::Round {
            large,
            small,
            seed,
            timeout_ms,
        } => run_round(large, small, seed, timeout_ms),
        Command::Batch {
            rounds,
            large,
            small,
            seed,
        } => run_batch(rounds, large, small, seed),
        Command::Letters {
            vowels,
            seed,
            dictionary,
            word,
        } => run_letters(vowels, seed, dictionary, word),
    }
}
