//! This is the core module. It has the cards, the deck,
//! five card hands and the code to rank them.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, NUM_SUITS, NUM_VALUES, Suit, Value};

/// All the errors.
mod error;
pub use self::error::PokerError;

/// Five distinct cards.
mod hand;
pub use self::hand::{HAND_SIZE, Hand};
pub(crate) use self::hand::check_distinct;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::{CardIter, choose};

/// Deck is the normal ordered 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::{Deck, NUM_CARDS};

/// 5 Card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Category, NUM_CATEGORIES, RANK_BASE, Rank, Rankable, classify};
pub(crate) use self::rank::rank_cards;
