use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::board::{is_field_slot_done, Gameboard, FIELD_SLOT_COUNT};
use crate::cards::Card;

/// Either a field slot index (0..=8) or the wildcard slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRef {
    Wildcard,
    Field(u8),
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // -1 is the wildcard marker in the external move format
            SlotRef::Wildcard => f.write_str("-1"),
            SlotRef::Field(idx) => write!(f, "{idx}"),
        }
    }
}

impl Serialize for SlotRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SlotRef::Wildcard => serializer.serialize_i8(-1),
            SlotRef::Field(idx) => serializer.serialize_i8(*idx as i8),
        }
    }
}

impl<'de> Deserialize<'de> for SlotRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match i8::deserialize(deserializer)? {
            -1 => Ok(SlotRef::Wildcard),
            idx @ 0..=8 => Ok(SlotRef::Field(idx as u8)),
            other => Err(D::Error::custom(format!("slot index {other} out of range"))),
        }
    }
}

/// One relocation of a contiguous trailing group, order preserved.
///
/// `before_idx` is the index of the bottom moved card in the source at
/// execute time; `after_idx` is the index of the destination's prior top
/// (-1 for an empty destination). Both are positional metadata for the
/// external move player and carry no search-correctness weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub before: SlotRef,
    pub after: SlotRef,
    pub num_cards: u8,
    pub before_idx: i8,
    pub after_idx: i8,
}

/// Comma-joined `(<before> -> <after>)` rendering, -1 marking the wildcard.
pub fn pretty_format_solution(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| format!("({} -> {})", m.before, m.after))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A trailing run qualifies for relocation iff it is all face cards of one
/// suit, or all numeric cards strictly descending by 1 with alternating
/// color. A single card trivially qualifies either way.
fn is_movable_group(cards: &[Card]) -> bool {
    debug_assert!(!cards.is_empty());
    if cards[0].is_face() {
        let suit = cards[0].suit;
        return cards.iter().all(|c| c.is_face() && c.suit == suit);
    }
    if cards.iter().any(Card::is_face) {
        return false;
    }
    cards
        .windows(2)
        .all(|w| w[0].value == w[1].value + 1 && w[0].is_red() != w[1].is_red())
}

/// Placement rule: empty target, or face-on-face of the same suit, or
/// numeric-on-numeric with target top one higher and opposite in color.
fn can_place(bottom: Card, top: Option<Card>) -> bool {
    match top {
        None => true,
        Some(t) => {
            if bottom.is_face() && t.is_face() {
                bottom.suit == t.suit
            } else if !bottom.is_face() && !t.is_face() {
                t.value == bottom.value + 1 && t.is_red() != bottom.is_red()
            } else {
                false
            }
        }
    }
}

/// All legal moves, field-to-field first then wildcard moves, in slot-index
/// order as scanned. The search relies on this ordering as its heuristic.
pub fn legal_moves(board: &Gameboard) -> Vec<Move> {
    let mut moves = field_slot_moves(board);
    moves.extend(wildcard_slot_moves(board));
    moves
}

/// Field-to-field moves. For each (source, target) pair only the maximal
/// qualifying trailing group is considered; sub-moves are never emitted,
/// even when the maximal move is suppressed as degenerate. Sources already
/// in a terminal configuration are skipped.
pub fn field_slot_moves(board: &Gameboard) -> Vec<Move> {
    let mut moves = Vec::new();
    for before in 0..FIELD_SLOT_COUNT {
        let src = board.field_slot(before).cards();
        if is_field_slot_done(src) {
            continue;
        }
        for after in 0..FIELD_SLOT_COUNT {
            if after == before {
                continue;
            }
            let target_top = board.field_slot(after).top();
            for size in (1..=src.len()).rev() {
                let group = &src[src.len() - size..];
                if !is_movable_group(group) || !can_place(group[0], target_top) {
                    continue;
                }
                // Relabeling an empty slot with a whole stack makes no progress.
                if size == src.len() && target_top.is_none() {
                    break;
                }
                // Cutting a numeric run where the card under the cut matches
                // the target top just shuffles an identical frontier around.
                if !group[0].is_face() && size < src.len() {
                    if let Some(t) = target_top {
                        if src[src.len() - size - 1].value == t.value {
                            break;
                        }
                    }
                }
                moves.push(Move {
                    before: SlotRef::Field(before as u8),
                    after: SlotRef::Field(after as u8),
                    num_cards: size as u8,
                    before_idx: (src.len() - size) as i8,
                    after_idx: board.field_slot(after).len() as i8 - 1,
                });
                break;
            }
        }
    }
    moves
}

/// Wildcard-slot moves. With a card parked, every slot accepting it is a
/// destination. With the slot free, the only generated parks are for "stuck"
/// top cards, i.e. ones that could not legally sit on the card beneath them.
pub fn wildcard_slot_moves(board: &Gameboard) -> Vec<Move> {
    let mut moves = Vec::new();
    if let Some(card) = board.wildcard_slot().peek() {
        for after in 0..FIELD_SLOT_COUNT {
            if can_place(card, board.field_slot(after).top()) {
                moves.push(Move {
                    before: SlotRef::Wildcard,
                    after: SlotRef::Field(after as u8),
                    num_cards: 1,
                    before_idx: 0,
                    after_idx: board.field_slot(after).len() as i8 - 1,
                });
            }
        }
    } else {
        for before in 0..FIELD_SLOT_COUNT {
            let cards = board.field_slot(before).cards();
            if cards.len() < 2 {
                continue;
            }
            let last = cards[cards.len() - 1];
            let prev = cards[cards.len() - 2];
            if !can_place(last, Some(prev)) {
                moves.push(Move {
                    before: SlotRef::Field(before as u8),
                    after: SlotRef::Wildcard,
                    num_cards: 1,
                    before_idx: cards.len() as i8 - 1,
                    after_idx: 0,
                });
            }
        }
    }
    moves
}
