use std::fmt;
use std::str::FromStr;

use crate::cards::{Card, Suit};
use crate::error::Error;
use crate::moves::{Move, SlotRef};
use crate::slots::{FieldSlot, WildcardSlot};

pub const FIELD_SLOT_COUNT: usize = 9;
pub const DECK_SIZE: usize = 36;

/// Terminal-state rule for one field slot: empty, a full 4-card face group of
/// one suit, or the full numeric run `[10,9,8,7,6]` with strictly alternating
/// color starting from either color.
pub fn is_field_slot_done(cards: &[Card]) -> bool {
    if cards.is_empty() {
        return true;
    }
    if cards.iter().all(Card::is_face) {
        return cards.len() == 4 && cards.iter().all(|c| c.suit == cards[0].suit);
    }
    if cards.iter().any(Card::is_face) {
        // mix of face and numeric is never terminal
        return false;
    }
    let values: Vec<u8> = cards.iter().map(|c| c.value).collect();
    if values != [10, 9, 8, 7, 6] {
        return false;
    }
    let reds: Vec<bool> = cards.iter().map(Card::is_red).collect();
    reds == [true, false, true, false, true] || reds == [false, true, false, true, false]
}

/// The whole playing field: nine ordered stacks plus the single-card
/// wildcard slot. Mutated in place by `execute`/`undo` pairs during a solve
/// and discarded afterwards.
#[derive(Debug, Clone)]
pub struct Gameboard {
    wildcard_slot: WildcardSlot,
    field_slots: [FieldSlot; FIELD_SLOT_COUNT],
}

impl Gameboard {
    #[inline]
    pub fn new(wildcard_slot: WildcardSlot, field_slots: [FieldSlot; FIELD_SLOT_COUNT]) -> Self {
        Self {
            wildcard_slot,
            field_slots,
        }
    }

    #[inline]
    pub fn wildcard_slot(&self) -> &WildcardSlot {
        &self.wildcard_slot
    }

    #[inline]
    pub fn field_slot(&self, idx: usize) -> &FieldSlot {
        &self.field_slots[idx]
    }

    #[inline]
    pub fn field_slots(&self) -> &[FieldSlot; FIELD_SLOT_COUNT] {
        &self.field_slots
    }

    /// Recompute and check the full composition invariant: 36 cards total,
    /// 4 face cards per suit, and for every value in 6..=10 exactly 4 copies
    /// split 2 red / 2 black. Moves only relocate cards, so a board that
    /// validates once stays valid for the whole solve.
    pub fn validate(&self) -> Result<(), Error> {
        let mut cards: Vec<Card> = Vec::with_capacity(DECK_SIZE);
        if let Some(c) = self.wildcard_slot.peek() {
            cards.push(c);
        }
        for slot in &self.field_slots {
            cards.extend_from_slice(slot.cards());
        }

        if cards.len() != DECK_SIZE {
            return Err(Error::Composition(format!(
                "expected {DECK_SIZE} cards on the board, found {}",
                cards.len()
            )));
        }
        for suit in Suit::all() {
            let faces = cards
                .iter()
                .filter(|c| c.is_face() && c.suit == suit)
                .count();
            if faces != 4 {
                return Err(Error::Composition(format!(
                    "expected 4 {suit:?} face cards, found {faces}"
                )));
            }
        }
        for value in 6u8..=10 {
            let copies: Vec<&Card> = cards.iter().filter(|c| c.value == value).collect();
            if copies.len() != 4 {
                return Err(Error::Composition(format!(
                    "expected 4 cards of value {value}, found {}",
                    copies.len()
                )));
            }
            let red = copies.iter().filter(|c| c.is_red()).count();
            if red != 2 {
                return Err(Error::Composition(format!(
                    "expected 2 red and 2 black cards of value {value}, found {red} red"
                )));
            }
        }
        Ok(())
    }

    /// Apply a move in place. Moves are only ever produced by the generator,
    /// so a move inconsistent with current slot sizes is a programming error
    /// and panics rather than returning a recoverable result.
    pub fn execute(&mut self, mv: &Move) {
        match (mv.before, mv.after) {
            (SlotRef::Field(b), SlotRef::Wildcard) => {
                assert_eq!(mv.num_cards, 1, "wildcard moves carry exactly one card");
                let mut cards = self.field_slots[b as usize].take(1);
                let card = cards.pop().expect("take(1) yields one card");
                assert!(self.wildcard_slot.push(card), "wildcard slot occupied");
            }
            (SlotRef::Wildcard, SlotRef::Field(a)) => {
                let card = self.wildcard_slot.pop().expect("wildcard slot empty");
                self.field_slots[a as usize].push(card);
            }
            (SlotRef::Field(b), SlotRef::Field(a)) => {
                let group = self.field_slots[b as usize].take(mv.num_cards as usize);
                self.field_slots[a as usize].extend(group);
            }
            (SlotRef::Wildcard, SlotRef::Wildcard) => {
                unreachable!("wildcard-to-wildcard is never generated")
            }
        }
    }

    /// Exact structural inverse of [`Gameboard::execute`] for the same move
    /// value. Must pair with the most recent un-undone execute; the caller
    /// keeps strict LIFO discipline.
    pub fn undo(&mut self, mv: &Move) {
        match (mv.before, mv.after) {
            (SlotRef::Field(b), SlotRef::Wildcard) => {
                let card = self.wildcard_slot.pop().expect("undo: wildcard slot empty");
                self.field_slots[b as usize].push(card);
            }
            (SlotRef::Wildcard, SlotRef::Field(a)) => {
                let mut cards = self.field_slots[a as usize].take(1);
                let card = cards.pop().expect("take(1) yields one card");
                assert!(
                    self.wildcard_slot.push(card),
                    "undo: wildcard slot occupied"
                );
            }
            (SlotRef::Field(b), SlotRef::Field(a)) => {
                let group = self.field_slots[a as usize].take(mv.num_cards as usize);
                self.field_slots[b as usize].extend(group);
            }
            (SlotRef::Wildcard, SlotRef::Wildcard) => {
                unreachable!("wildcard-to-wildcard is never generated")
            }
        }
    }

    /// Wildcard slot empty and every field slot terminal.
    pub fn solved(&self) -> bool {
        !self.wildcard_slot.has_card()
            && self
                .field_slots
                .iter()
                .all(|slot| is_field_slot_done(slot.cards()))
    }

    /// Canonical state string; doubles as the equality/hash surrogate and
    /// the visited-set signature during search.
    #[inline]
    pub fn signature(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Gameboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.wildcard_slot.peek() {
            Some(card) => write!(f, "{card}")?,
            None => f.write_str("_")?,
        }
        for slot in &self.field_slots {
            f.write_str("|")?;
            for (i, card) in slot.cards().iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{card}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Gameboard {
    type Err = Error;

    /// Accepts the canonical pipe/comma form, or a bare run of card tokens
    /// (no pipes at all) which is regrouped as an empty wildcard plus nine
    /// slots of four.
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        if s.contains('|') {
            parse_delimited(s)
        } else {
            parse_bare(s)
        }
    }
}

fn parse_delimited(s: &str) -> Result<Gameboard, Error> {
    let segments: Vec<&str> = s.split('|').collect();
    if segments.len() != FIELD_SLOT_COUNT + 1 {
        return Err(Error::Parse(format!(
            "expected {} pipe-delimited segments (wildcard + {FIELD_SLOT_COUNT} slots), found {}",
            FIELD_SLOT_COUNT + 1,
            segments.len()
        )));
    }

    let wildcard = match segments[0].trim() {
        "" | "_" => WildcardSlot::new(),
        token => WildcardSlot::with_card(token.parse()?),
    };

    let mut field_slots: [FieldSlot; FIELD_SLOT_COUNT] = Default::default();
    for (i, segment) in segments[1..].iter().enumerate() {
        field_slots[i] = FieldSlot::from_cards(parse_segment(segment)?);
    }
    Ok(Gameboard::new(wildcard, field_slots))
}

fn parse_segment(segment: &str) -> Result<Vec<Card>, Error> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Ok(Vec::new());
    }
    if segment.contains(',') {
        segment.split(',').map(|token| token.parse()).collect()
    } else {
        scan_tokens(segment)
    }
}

fn parse_bare(s: &str) -> Result<Gameboard, Error> {
    let cards = scan_tokens(s)?;
    if cards.len() != DECK_SIZE {
        return Err(Error::Parse(format!(
            "expected {DECK_SIZE} card tokens in undelimited board, found {}",
            cards.len()
        )));
    }
    let mut field_slots: [FieldSlot; FIELD_SLOT_COUNT] = Default::default();
    for (i, chunk) in cards.chunks(4).enumerate() {
        field_slots[i] = FieldSlot::from_cards(chunk.to_vec());
    }
    Ok(Gameboard::new(WildcardSlot::new(), field_slots))
}

/// Extract consecutive `<1-2 digits><letter>` card tokens, ignoring
/// whitespace between them.
fn scan_tokens(s: &str) -> Result<Vec<Card>, Error> {
    let chars: Vec<char> = s.chars().collect();
    let mut cards = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_whitespace() {
            i += 1;
            continue;
        }
        let mut digits = String::new();
        while i < chars.len() && chars[i].is_ascii_digit() && digits.len() < 2 {
            digits.push(chars[i]);
            i += 1;
        }
        if digits.is_empty() {
            return Err(Error::Parse(format!(
                "expected a card token, found '{}'",
                chars[i]
            )));
        }
        if i >= chars.len() || !chars[i].is_ascii_alphabetic() {
            return Err(Error::Parse(format!(
                "card token '{digits}' is missing its suit letter"
            )));
        }
        let suit = Suit::from_letter(chars[i])
            .ok_or_else(|| Error::Parse(format!("unknown suit letter '{}'", chars[i])))?;
        let value: u8 = digits
            .parse()
            .map_err(|_| Error::Parse(format!("non-integer card value '{digits}'")))?;
        cards.push(Card::new(value, suit));
        i += 1;
    }
    Ok(cards)
}
