use std::hash::BuildHasherDefault;
use std::time::Instant;

use hashbrown::HashSet as HbHashSet;
use indicatif::ProgressBar;

use crate::board::Gameboard;
use crate::error::Error;
use crate::moves::{field_slot_moves, wildcard_slot_moves, Move};

use super::{SearchLimits, SearchStats, Solution, Solver};

type FastHasher = BuildHasherDefault<ahash::AHasher>;
type FastSet = HbHashSet<String, FastHasher>;

// Throttle: progress updates every 8192 executed moves.
const REPORT_MASK: u64 = 0x1FFF;

/// Depth-first backtracking solver. Field moves are tried before wildcard
/// moves at every depth; positions are deduplicated by canonical signature
/// across the whole search.
///
/// Known limitation, kept deliberately: the visited set is global to the
/// invocation, not scoped per path. A position discarded the first time it
/// is reached can prune a line that would have solved the board from a
/// different ancestor, so "no solution" is relative to this search order.
#[derive(Clone, Default)]
pub struct DfsSolver {
    limits: SearchLimits,
    progress: Option<ProgressBar>,
}

impl DfsSolver {
    #[inline]
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            progress: None,
        }
    }

    /// Attach a spinner that receives throttled node-rate updates.
    #[inline]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    fn dfs(&self, board: &mut Gameboard, ctx: &mut SearchCtx, depth: u8) -> Option<Vec<Move>> {
        if depth > self.limits.max_depth {
            return None;
        }
        let moves = field_slot_moves(board);
        if let Some(path) = self.try_moves(board, ctx, depth, moves) {
            return Some(path);
        }
        let moves = wildcard_slot_moves(board);
        self.try_moves(board, ctx, depth, moves)
    }

    fn try_moves(
        &self,
        board: &mut Gameboard,
        ctx: &mut SearchCtx,
        depth: u8,
        moves: Vec<Move>,
    ) -> Option<Vec<Move>> {
        for mv in moves {
            let mut applied = Applied::new(board, mv);
            ctx.nodes += 1;
            ctx.tick();

            let signature = applied.board().signature();
            if !ctx.visited.insert(signature) {
                // seen anywhere in this search, not merely on this path
                ctx.dedup_hits += 1;
                continue;
            }
            if applied.board().solved() {
                applied.commit();
                return Some(vec![mv]);
            }
            if let Some(mut path) = self.dfs(applied.board_mut(), ctx, depth + 1) {
                applied.commit();
                path.insert(0, mv);
                return Some(path);
            }
            // guard drop undoes the move
        }
        None
    }
}

impl Solver for DfsSolver {
    fn solve(&self, board: &mut Gameboard) -> Result<Solution, Error> {
        board.validate()?;

        let mut ctx = SearchCtx::new(self.progress.clone());
        let moves = self.dfs(board, &mut ctx, 0).unwrap_or_default();

        let stats = SearchStats {
            nodes: ctx.nodes,
            dedup_hits: ctx.dedup_hits,
            elapsed: ctx.started.elapsed(),
        };
        Ok(Solution { moves, stats })
    }
}

/// Per-invocation search state; a fresh one is built for every solve call so
/// the solver itself stays reentrant.
struct SearchCtx {
    visited: FastSet,
    nodes: u64,
    dedup_hits: u64,
    started: Instant,
    progress: Option<ProgressBar>,
}

impl SearchCtx {
    fn new(progress: Option<ProgressBar>) -> Self {
        Self {
            visited: FastSet::default(),
            nodes: 0,
            dedup_hits: 0,
            started: Instant::now(),
            progress,
        }
    }

    #[inline]
    fn tick(&mut self) {
        if self.nodes & REPORT_MASK != 0 {
            return;
        }
        if let Some(pb) = &self.progress {
            let elapsed = self.started.elapsed().as_secs_f64().max(1e-6);
            pb.set_position(self.nodes);
            pb.set_message(format!("{:.0}/s", self.nodes as f64 / elapsed));
        }
    }
}

/// Scoped apply: executes the move on construction and undoes it when
/// dropped, unless the move was committed into the solution path. Keeps the
/// strict execute/undo pairing intact on every exit path of the recursion.
struct Applied<'a> {
    board: &'a mut Gameboard,
    mv: Move,
    committed: bool,
}

impl<'a> Applied<'a> {
    fn new(board: &'a mut Gameboard, mv: Move) -> Self {
        board.execute(&mv);
        Self {
            board,
            mv,
            committed: false,
        }
    }

    #[inline]
    fn board(&self) -> &Gameboard {
        self.board
    }

    #[inline]
    fn board_mut(&mut self) -> &mut Gameboard {
        self.board
    }

    /// Keep the move applied; the board now carries it as part of the path.
    #[inline]
    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for Applied<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.board.undo(&self.mv);
        }
    }
}
