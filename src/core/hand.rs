use std::fmt;
use std::ops::Index;

use super::{Card, PokerError, Suit, Value};

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// Exactly five distinct cards.
///
/// The only ways to build one check the size and that no card is
/// repeated, so every `Hand` can be ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Create a hand from a slice of cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use five_card_odds::core::{Card, Hand, Suit, Value};
    ///
    /// let cards = [
    ///     Card::new(Value::Two, Suit::Heart),
    ///     Card::new(Value::Three, Suit::Diamond),
    ///     Card::new(Value::Four, Suit::Spade),
    ///     Card::new(Value::Five, Suit::Club),
    ///     Card::new(Value::Six, Suit::Heart),
    /// ];
    /// let hand = Hand::new_with_cards(&cards).unwrap();
    /// assert_eq!(cards[4], hand[4]);
    ///
    /// assert!(Hand::new_with_cards(&cards[..4]).is_err());
    /// ```
    pub fn new_with_cards(cards: &[Card]) -> Result<Self, PokerError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| PokerError::InvalidHandSize(cards.len()))?;
        check_distinct(&cards)?;
        Ok(Self { cards })
    }

    /// Parse a hand from the two character card form,
    /// for example `"AhKhQhJhTh"`.
    ///
    /// ```
    /// use five_card_odds::core::Hand;
    ///
    /// assert!(Hand::new_from_str("2h3d4s5c6h").is_ok());
    /// assert!(Hand::new_from_str("2h2h4s5c6h").is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerError> {
        let mut chars = hand_string.chars().filter(|c| !c.is_whitespace());
        let mut cards: Vec<Card> = Vec::with_capacity(HAND_SIZE);

        // Keep looping until we explicitly break
        while let Some(vc) = chars.next() {
            let v = Value::from_char(vc).ok_or(PokerError::UnexpectedValueChar)?;
            let s = chars
                .next()
                .ok_or(PokerError::TooFewChars)
                .and_then(|sc| Suit::from_char(sc).ok_or(PokerError::UnexpectedSuitChar))?;

            if cards.len() == HAND_SIZE {
                return Err(PokerError::UnparsedCharsRemaining);
            }
            cards.push(Card::new(v, s));
        }

        Self::new_with_cards(&cards)
    }

    /// Wrap five cards that are already known to be distinct.
    ///
    /// The enumerator uses this for deck combinations where the
    /// strictly increasing indexes rule out repeats.
    pub(crate) fn from_distinct(cards: [Card; HAND_SIZE]) -> Self {
        debug_assert!(check_distinct(&cards).is_ok());
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

/// Error on the first card that shows up twice in `cards`.
pub(crate) fn check_distinct(cards: &[Card]) -> Result<(), PokerError> {
    let mut seen: u64 = 0;
    for card in cards {
        let bit = 1u64 << u8::from(*card);
        if seen & bit != 0 {
            return Err(PokerError::DuplicateCardInHand(*card));
        }
        seen |= bit;
    }
    Ok(())
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
