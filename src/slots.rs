use crate::cards::Card;

/// Auxiliary holding area with capacity for exactly one card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WildcardSlot {
    card: Option<Card>,
}

impl WildcardSlot {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_card(card: Card) -> Self {
        Self { card: Some(card) }
    }

    /// Read without removing.
    #[inline]
    pub fn peek(&self) -> Option<Card> {
        self.card
    }

    /// Remove and return the held card, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<Card> {
        self.card.take()
    }

    /// Place a card. Returns false (and leaves the slot unchanged) when the
    /// slot is already occupied.
    #[inline]
    pub fn push(&mut self, card: Card) -> bool {
        if self.card.is_some() {
            return false;
        }
        self.card = Some(card);
        true
    }

    #[inline]
    pub fn has_card(&self) -> bool {
        self.card.is_some()
    }
}

/// An ordered stack of cards, bottom to top. Only the top end mutates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSlot {
    cards: Vec<Card>,
}

impl FieldSlot {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[inline]
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append a group to the top, preserving its internal order.
    #[inline]
    pub fn extend(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    /// Remove the trailing `count` cards as a group, in original relative
    /// order. Panics when `count` exceeds the slot size; see `Gameboard`
    /// contract notes.
    #[inline]
    pub fn take(&mut self, count: usize) -> Vec<Card> {
        assert!(
            count <= self.cards.len(),
            "cannot take {count} cards from a slot of {}",
            self.cards.len()
        );
        self.cards.split_off(self.cards.len() - count)
    }

    #[inline]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
