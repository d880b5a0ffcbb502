use std::time::Duration;

use crate::board::Gameboard;
use crate::error::Error;
use crate::moves::Move;

pub mod dfs;

pub use dfs::DfsSolver;

#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Depth beyond which a branch is abandoned. 55 covers every deal seen
    /// in practice while keeping hopeless branches bounded.
    pub max_depth: u8,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self { max_depth: 55 }
    }
}

/// Per-invocation accounting, observability only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Moves executed during the search.
    pub nodes: u64,
    /// Positions skipped because their signature had been seen before.
    pub dedup_hits: u64,
    pub elapsed: Duration,
}

/// Search result: the ordered move list transforming the input board into a
/// solved one, or an empty list when no solution was found within the depth
/// bound. An empty list is ambiguous with "already solved" at the root;
/// callers that care check `Gameboard::solved` on the input first.
#[derive(Debug, Clone)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub stats: SearchStats,
}

/// A solving strategy. Implementations are stateless across calls; all
/// per-search state lives in a per-invocation context.
pub trait Solver {
    /// Searches for a solution, mutating `board` in place. On success the
    /// board is left in its solved state; on failure it is restored to the
    /// input position. Refuses boards that fail composition validation.
    fn solve(&self, board: &mut Gameboard) -> Result<Solution, Error>;
}
