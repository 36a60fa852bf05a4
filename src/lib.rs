//! Five card odds is a library for five card poker hands.
//! It ranks any five card hand, counts every hand that can be
//! dealt from a 52 card deck, turns those counts into the
//! probability of each hand, and plays out simple showdowns.
//!
//! ```
//! use five_card_odds::core::{Category, Hand, Rankable};
//!
//! let hand = Hand::new_from_str("AhAdAsAcKh").unwrap();
//! let rank = hand.rank();
//! assert_eq!(Category::FourOfAKind, rank.category);
//! assert_eq!(12, rank.value);
//! ```

/// Cards, decks, hands and ranking. Everything else builds
/// on this.
pub mod core;
/// Counting every five card hand and the probability reports.
pub mod odds;
/// Showdowns between simulated players.
pub mod game;
