#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod cards;
pub mod slots;
pub mod board;
pub mod moves;
pub mod deal;
pub mod error;

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{is_field_slot_done, Gameboard};
pub use crate::cards::{Card, Suit};
pub use crate::deal::{deal, full_deck};
pub use crate::error::Error;
pub use crate::moves::{
    field_slot_moves, legal_moves, pretty_format_solution, wildcard_slot_moves, Move, SlotRef,
};
pub use crate::slots::{FieldSlot, WildcardSlot};
pub use crate::solver::{DfsSolver, SearchLimits, SearchStats, Solution, Solver};
