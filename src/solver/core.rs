use std::collections::HashSet;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Operator, Value};
use crate::solver::config::SolverConfig;
use crate::solver::types::{Node, Puzzle, SearchOutcome, SearchStats, Solution};

/// Operand order and operator for each candidate of a pair `(a, b)`.
/// `false` keeps `a` on the left, `true` swaps the operands.
const CANDIDATES: [(Operator, bool); 6] = [
    (Operator::Add, false),
    (Operator::Sub, false),
    (Operator::Sub, true),
    (Operator::Mul, false),
    (Operator::Div, false),
    (Operator::Div, true),
];

/// State of one solve call. Dropped when the call returns.
struct Search {
    target: Value,
    best: Option<Node>,
    seen: HashSet<Vec<Value>>,
    deadline: Option<Instant>,
    stats: SearchStats,
}

impl Search {
    fn new(target: Value, deadline: Option<Instant>) -> Self {
        Self {
            target,
            best: None,
            seen: HashSet::new(),
            deadline,
            stats: SearchStats::default(),
        }
    }

    /// Records `node` if it beats the best so far. Equal distances never
    /// replace the incumbent. Returns true on an exact match.
    fn consider(&mut self, node: &Node) -> bool {
        if node.value == self.target {
            self.best = Some(node.clone());
            return true;
        }

        let improves = match &self.best {
            None => true,
            Some(best) => node.value.abs_diff(self.target) < best.value.abs_diff(self.target),
        };
        if improves {
            self.best = Some(node.clone());
        }
        false
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    fn run(&mut self, nodes: Vec<Node>) -> SearchOutcome {
        for node in &nodes {
            if self.consider(node) {
                return SearchOutcome::Found;
            }
        }

        if nodes.len() < 2 {
            return SearchOutcome::NotFound;
        }

        // Checked after the leaves so an expired search still reports the
        // closest input number.
        if self.expired() {
            return SearchOutcome::TimedOut;
        }

        let mut key: Vec<Value> = nodes.iter().map(|n| n.value).collect();
        key.sort_unstable();
        if !self.seen.insert(key) {
            self.stats.memo_hits += 1;
            return SearchOutcome::NotFound;
        }
        self.stats.states_expanded += 1;

        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let (Some(a), Some(b)) = (nodes.get(i), nodes.get(j)) else {
                    continue;
                };

                let rest: Vec<Node> = nodes
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, n)| n.clone())
                    .collect();

                for (op, swapped) in CANDIDATES {
                    let candidate = if swapped {
                        Node::combine(b, op, a)
                    } else {
                        Node::combine(a, op, b)
                    };
                    let Some(candidate) = candidate else {
                        self.stats.candidates_rejected += 1;
                        continue;
                    };

                    let mut next = rest.clone();
                    next.push(candidate);
                    match self.run(next) {
                        SearchOutcome::NotFound => {}
                        stop => return stop,
                    }
                }
            }
        }

        SearchOutcome::NotFound
    }
}

/// Exhaustive countdown-numbers solver
#[derive(Debug, Clone, Default)]
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds an expression over a sub-multiset of `numbers` equal to
    /// `target`, or the closest value reachable. `None` only for an empty
    /// pool.
    pub fn solve(&self, numbers: &[u64], target: i64) -> Option<Solution> {
        self.solve_with_stats(numbers, target).0
    }

    /// Same as [`ExpressionSolver::solve`], also reporting how much of the
    /// search space was visited.
    pub fn solve_with_stats(&self, numbers: &[u64], target: i64) -> (Option<Solution>, SearchStats) {
        if numbers.is_empty() {
            debug!("Empty number pool, nothing to solve");
            return (None, SearchStats::default());
        }

        info!("Solving for {} with numbers {:?}", target, numbers);

        let deadline = self.config.deadline.map(|budget| Instant::now() + budget);
        let mut search = Search::new(Value::from(target), deadline);
        let start: Vec<Node> = numbers.iter().copied().map(Node::leaf).collect();

        let outcome = search.run(start);
        search.stats.outcome = outcome;

        match outcome {
            SearchOutcome::Found => info!("Exact match found"),
            SearchOutcome::NotFound => info!("No exact match, returning closest value"),
            SearchOutcome::TimedOut => info!("Deadline reached, returning best so far"),
        }
        debug!(
            "Expanded {} states ({} memo hits, {} candidates rejected)",
            search.stats.states_expanded, search.stats.memo_hits, search.stats.candidates_rejected
        );

        (search.best.map(Solution::from), search.stats)
    }

    /// Solves independent rounds in parallel. Results keep the input order.
    pub fn solve_batch(&self, puzzles: &[Puzzle]) -> Vec<Option<Solution>> {
        info!("Solving a batch of {} rounds", puzzles.len());
        puzzles
            .par_iter()
            .map(|puzzle| self.solve(&puzzle.numbers, puzzle.target))
            .collect()
    }
}
