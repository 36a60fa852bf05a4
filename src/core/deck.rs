use crate::core::card::{Card, NUM_SUITS, NUM_VALUES, Suit, Value};
use crate::core::card_iter::CardIter;
use crate::core::hand::HAND_SIZE;
use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use rand::Rng;
use rand::seq::SliceRandom;

/// Number of cards in a standard deck.
pub const NUM_CARDS: usize = NUM_VALUES * NUM_SUITS;

/// `Deck` is an ordered deck of cards that allows easy
/// indexing into the cards.
///
/// A new deck is always in the same order: by value from two up
/// to ace, and within a value by suit. So `deck[i]` is the card
/// whose `u8` index is `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// Create the ordered 52 card deck
    ///
    /// ```
    /// use five_card_odds::core::{Card, Deck, Suit, Value};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(52, deck.len());
    /// assert_eq!(Card::new(Value::Two, Suit::Heart), deck[0]);
    /// assert_eq!(Card::new(Value::Ace, Suit::Club), deck[51]);
    /// ```
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(NUM_CARDS);
        for v in Value::values() {
            for s in Suit::suits() {
                cards.push(Card::new(v, s));
            }
        }
        Self { cards }
    }

    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Does the deck hold no cards at all ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Randomly shuffle the deck.
    /// This will ensure the there's no order to the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Every five card hand that can be drawn from this deck,
    /// each one exactly once.
    ///
    /// ```
    /// use five_card_odds::core::Deck;
    ///
    /// let deck = Deck::new();
    /// let mut hands = deck.enumerate_hands();
    /// assert_eq!(Some([deck[0], deck[1], deck[2], deck[3], deck[4]]), hands.next());
    /// ```
    pub fn enumerate_hands(&self) -> CardIter<'_, HAND_SIZE> {
        CardIter::new(&self.cards)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Deck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeTo<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFrom<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
