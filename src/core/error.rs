use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// five card odds library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug)]
pub enum PokerError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Five card hands must have exactly 5 cards, found {0}")]
    InvalidHandSize(usize),
    #[error("Card already added to hand {0}")]
    DuplicateCardInHand(Card),
    #[error("Can't compute probabilities when no hands were enumerated")]
    EmptyEnumeration,
    #[error("Player count must be between 1 and 10, got {0}")]
    InvalidPlayerCount(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PokerError {
    /// Is this error a violation of the five distinct cards contract
    /// that every classified hand has to meet ?
    pub fn is_invalid_hand(&self) -> bool {
        matches!(
            self,
            PokerError::InvalidHandSize(_) | PokerError::DuplicateCardInHand(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_invalid_hand_kind() {
        assert!(PokerError::InvalidHandSize(4).is_invalid_hand());
        assert!(
            PokerError::DuplicateCardInHand(Card::new(Value::Ace, Suit::Heart)).is_invalid_hand()
        );
        assert!(!PokerError::EmptyEnumeration.is_invalid_hand());
        assert!(!PokerError::InvalidPlayerCount(11).is_invalid_hand());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            "Card already added to hand Ah",
            PokerError::DuplicateCardInHand(Card::new(Value::Ace, Suit::Heart)).to_string()
        );
        assert_eq!(
            "Five card hands must have exactly 5 cards, found 6",
            PokerError::InvalidHandSize(6).to_string()
        );
    }
}
