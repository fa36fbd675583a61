use crate::expression::{Operator, Value};

/// A value reached during the search together with how it was derived.
///
/// `rendering` is built once when the node is created and never touched
/// again; it always evaluates to `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub value: Value,
    pub rendering: String,
}

impl Node {
    pub fn leaf(number: u64) -> Self {
        Self {
            value: Value::from(number),
            rendering: number.to_string(),
        }
    }

    /// Combines two nodes, or `None` when the house rules forbid it
    /// (zero or inexact division, overflow).
    pub fn combine(left: &Node, op: Operator, right: &Node) -> Option<Self> {
        let value = op.apply(left.value, right.value).ok()?;
        Some(Self {
            value,
            rendering: format!("({} {} {})", left.rendering, op, right.rendering),
        })
    }
}

/// A round to solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub numbers: Vec<u64>,
    pub target: i64,
}

/// Best result of a solve call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub rendering: String,
    pub value: Value,
}

impl Solution {
    pub fn distance(&self, target: i64) -> u128 {
        self.value.abs_diff(Value::from(target))
    }

    pub fn is_exact(&self, target: i64) -> bool {
        self.distance(target) == 0
    }

    /// Line shown to the player at the end of a round
    pub fn describe(&self, target: i64) -> String {
        if self.is_exact(target) {
            self.rendering.clone()
        } else {
            format!("{} = {} (close)", self.rendering, self.value)
        }
    }
}

impl From<Node> for Solution {
    fn from(node: Node) -> Self {
        Self {
            rendering: node.rendering,
            value: node.value,
        }
    }
}

/// Result of one recursive search step, propagated to every caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// An exact match was recorded; stop everything.
    Found,
    NotFound,
    /// The configured deadline passed; stop everything.
    TimedOut,
}

/// How much of the search space one solve call visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub states_expanded: usize,
    pub memo_hits: usize,
    pub candidates_rejected: usize,
    pub outcome: SearchOutcome,
}

impl Default for SearchStats {
    fn default() -> Self {
        Self {
            states_expanded: 0,
            memo_hits: 0,
            candidates_rejected: 0,
            outcome: SearchOutcome::NotFound,
        }
    }
}
