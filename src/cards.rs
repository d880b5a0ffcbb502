use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Spade,
    Club,
}

impl Suit {
    #[inline]
    pub fn all() -> [Suit; 4] {
        [Suit::Heart, Suit::Diamond, Suit::Spade, Suit::Club]
    }

    /// Canonical single-letter form used in card tokens.
    #[inline]
    pub fn letter(self) -> char {
        match self {
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Spade => 'S',
            Suit::Club => 'C',
        }
    }

    /// Case-insensitive inverse of [`Suit::letter`].
    #[inline]
    pub fn from_letter(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'H' => Some(Suit::Heart),
            'D' => Some(Suit::Diamond),
            'S' => Some(Suit::Spade),
            'C' => Some(Suit::Club),
            _ => None,
        }
    }

    #[inline]
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Heart | Suit::Diamond)
    }

    #[inline]
    pub fn is_black(self) -> bool {
        !self.is_red()
    }
}

/// A single card. `value == 0` is a face card (suit-only identity, no rank
/// order); values `6..=10` are the numeric rank cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub value: u8,
    pub suit: Suit,
}

impl Card {
    #[inline]
    pub const fn new(value: u8, suit: Suit) -> Self {
        Self { value, suit }
    }

    #[inline]
    pub fn is_face(&self) -> bool {
        self.value < 6 || self.value > 10
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.suit.is_black()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = Error;

    /// Parses a `<value><suitLetter>` token such as `10H` or `0c`.
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let letter = s
            .chars()
            .last()
            .ok_or_else(|| Error::Parse("empty card token".to_string()))?;
        let suit = Suit::from_letter(letter)
            .ok_or_else(|| Error::Parse(format!("unknown suit letter '{letter}' in token '{s}'")))?;
        let value_str = &s[..s.len() - letter.len_utf8()];
        let value: u8 = value_str
            .parse()
            .map_err(|_| Error::Parse(format!("non-integer card value in token '{s}'")))?;
        Ok(Card::new(value, suit))
    }
}
