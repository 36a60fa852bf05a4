use std::fmt;

use crate::core::card::{Card, NUM_SUITS, NUM_VALUES, Value};
use crate::core::error::PokerError;
use crate::core::hand::{HAND_SIZE, Hand};

/// All the different possible hand categories, weakest first.
///
/// The derived ordering is the ordering of hand strength so
/// any hand in a higher category beats any hand in a lower one.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// The lowest rank.
    /// No matches
    Bust = 0,
    /// One Card matches another.
    Pair,
    /// Two diffent pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten to Ace all of the same suit.
    RoyalFlush,
}

/// Number of hand categories.
pub const NUM_CATEGORIES: usize = 10;

const CATEGORIES: [Category; NUM_CATEGORIES] = [
    Category::Bust,
    Category::Pair,
    Category::TwoPair,
    Category::ThreeOfAKind,
    Category::Straight,
    Category::Flush,
    Category::FullHouse,
    Category::FourOfAKind,
    Category::StraightFlush,
    Category::RoyalFlush,
];

impl Category {
    /// Every category from weakest to strongest.
    pub fn categories() -> [Category; NUM_CATEGORIES] {
        CATEGORIES
    }

    /// Position of this category in `Category::categories()`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Bust => "Bust",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category plus the tie break value used to order hands
/// inside the same category.
///
/// Fields are compared in declaration order, so comparing two
/// `Rank`s compares categories first and only looks at `value`
/// when the categories match.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rank {
    pub category: Category,
    pub value: u32,
}

impl Rank {
    pub fn new(category: Category, value: u32) -> Self {
        Self { category, value }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.value)
    }
}

/// Base of the positional tie break values. One digit per rank
/// keeps the folded value ordered the same way as the ranks.
pub const RANK_BASE: u32 = NUM_VALUES as u32;

/// The only straight where the ace plays low.
const WHEEL: u16 = 1 << (Value::Ace as u16)
    | 1 << (Value::Two as u16)
    | 1 << (Value::Three as u16)
    | 1 << (Value::Four as u16)
    | 1 << (Value::Five as u16);

/// Can this turn into a hand rank?
pub trait Rankable {
    /// Rank the cards. It doesn't do any caching so it's left up to the user
    /// to understand that duplicate work will be done if this is called more
    /// than once.
    fn rank(&self) -> Rank;
}

impl Rankable for Hand {
    fn rank(&self) -> Rank {
        rank_cards(self.cards())
    }
}

/// Classify five cards.
///
/// ```
/// use five_card_odds::core::{Card, Category, classify};
///
/// let cards: Vec<Card> = ["Th", "Jh", "Qh", "Kh", "Ah"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(Category::RoyalFlush, classify(&cards).unwrap().category);
///
/// assert!(classify(&cards[..4]).is_err());
/// ```
pub fn classify(cards: &[Card]) -> Result<Rank, PokerError> {
    Hand::new_with_cards(cards).map(|hand| hand.rank())
}

/// Rank five cards that are already known to be distinct.
pub(crate) fn rank_cards(cards: &[Card; HAND_SIZE]) -> Rank {
    let mut value_counts = [0u8; NUM_VALUES];
    let mut suit_counts = [0u8; NUM_SUITS];
    for c in cards {
        value_counts[c.value as usize] += 1;
        suit_counts[c.suit as usize] += 1;
    }

    let mut rank = match straight_high(&value_counts) {
        Some(high) => Rank::new(Category::Straight, high),
        None => rank_sets(&value_counts),
    };

    if suit_counts.iter().any(|&count| count as usize == HAND_SIZE) {
        rank.category = match rank.category {
            Category::Straight if rank.value == Value::Ace as u32 => Category::RoyalFlush,
            Category::Straight => Category::StraightFlush,
            _ => Category::Flush,
        };
    }

    if matches!(rank.category, Category::Bust | Category::Flush) {
        rank.value = fold_high_cards(&value_counts);
    }
    rank
}

/// Scan the values from two up to ace looking for five present
/// values in a row.
///
/// Returns the index of the highest card of the straight. Once a
/// run has started any gap ends the scan. Runs don't wrap around
/// from the ace, except for the wheel which is a five high
/// straight.
fn straight_high(value_counts: &[u8; NUM_VALUES]) -> Option<u32> {
    let mut run = 0;
    for (idx, &count) in value_counts.iter().enumerate() {
        if count > 0 {
            run += 1;
            if run == HAND_SIZE {
                return Some(idx as u32);
            }
        } else if run > 0 {
            break;
        }
    }

    let value_set = value_counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .fold(0u16, |set, (idx, _)| set | 1 << idx);
    if value_set == WHEEL {
        Some(Value::Five as u32)
    } else {
        None
    }
}

/// Classify by how many times each value shows up.
fn rank_sets(value_counts: &[u8; NUM_VALUES]) -> Rank {
    let mut four = None;
    let mut three = None;
    // Scanned low to high so the second pair found is the higher one.
    let mut pairs: [Option<u32>; 2] = [None, None];

    for (idx, &count) in value_counts.iter().enumerate() {
        let idx = idx as u32;
        match count {
            4 => four = Some(idx),
            3 => three = Some(idx),
            2 if pairs[0].is_none() => pairs[0] = Some(idx),
            2 => pairs[1] = Some(idx),
            _ => {}
        }
    }

    match (four, three, pairs) {
        (Some(quad), _, _) => Rank::new(Category::FourOfAKind, quad),
        (None, Some(trips), [Some(pair), None]) => {
            Rank::new(Category::FullHouse, trips * RANK_BASE + pair)
        }
        (None, Some(trips), _) => Rank::new(Category::ThreeOfAKind, trips),
        (None, None, [Some(low), Some(high)]) => {
            Rank::new(Category::TwoPair, high * RANK_BASE + low)
        }
        (None, None, [Some(pair), None]) => Rank::new(Category::Pair, pair),
        _ => Rank::new(Category::Bust, 0),
    }
}

/// Fold every card's value into one number with the highest
/// card in the most significant digit.
fn fold_high_cards(value_counts: &[u8; NUM_VALUES]) -> u32 {
    let mut value = 0;
    for (idx, &count) in value_counts.iter().enumerate().rev() {
        for _ in 0..count {
            value = value * RANK_BASE + idx as u32;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;
    use crate::core::deck::Deck;

    fn rank_of(s: &str) -> Rank {
        Hand::new_from_str(s).unwrap().rank()
    }

    fn fold(values: &[Value]) -> u32 {
        values
            .iter()
            .fold(0, |acc, v| acc * RANK_BASE + *v as u32)
    }

    #[test]
    fn test_cmp() {
        assert!(Rank::new(Category::Bust, 0) < Rank::new(Category::StraightFlush, 0));
        assert!(Rank::new(Category::Bust, 0) < Rank::new(Category::FourOfAKind, 0));
        assert!(Rank::new(Category::Bust, 100_000) < Rank::new(Category::Pair, 0));
    }

    #[test]
    fn test_cmp_high() {
        assert!(Rank::new(Category::Bust, 0) < Rank::new(Category::Bust, 100));
    }

    #[test]
    fn test_category_order() {
        let cats = Category::categories();
        for (idx, pair) in cats.windows(2).enumerate() {
            assert!(pair[0] < pair[1]);
            assert_eq!(idx, pair[0].index());
        }
        assert_eq!(NUM_CATEGORIES - 1, Category::RoyalFlush.index());
    }

    #[test]
    fn test_straight() {
        let rank = rank_of("2h3d4s5c6h");
        assert_eq!(Rank::new(Category::Straight, Value::Six as u32), rank);
    }

    #[test]
    fn test_royal_flush() {
        assert_eq!(
            Rank::new(Category::RoyalFlush, Value::Ace as u32),
            rank_of("ThJhQhKhAh")
        );
    }

    #[test]
    fn test_straight_flush() {
        assert_eq!(
            Rank::new(Category::StraightFlush, Value::King as u32),
            rank_of("9sTsJsQsKs")
        );
    }

    #[test]
    fn test_broadway_straight() {
        assert_eq!(
            Rank::new(Category::Straight, Value::Ace as u32),
            rank_of("AdKhQhJhTh")
        );
    }

    #[test]
    fn test_wheel() {
        assert_eq!(
            Rank::new(Category::Straight, Value::Five as u32),
            rank_of("Ad2c3s4h5s")
        );
        assert_eq!(
            Rank::new(Category::StraightFlush, Value::Five as u32),
            rank_of("Ac2c3c4c5c")
        );
        // The wheel is the lowest straight.
        assert!(rank_of("Ad2c3s4h5s") < rank_of("2h3d4s5c6h"));
    }

    #[test]
    fn test_no_wrap_around() {
        let rank = rank_of("QhKdAs2c3h");
        assert_eq!(Category::Bust, rank.category);
    }

    #[test]
    fn test_interrupted_run() {
        // Four in a row then a gap is never a straight.
        assert_eq!(Category::Bust, rank_of("2h3d4s5c7h").category);
        assert_eq!(Category::Bust, rank_of("2h4d5s6c7h").category);
        // A pair on top of a run of four.
        assert_eq!(Category::Pair, rank_of("2h3d4s5c5h").category);
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!(
            Rank::new(Category::FourOfAKind, 12),
            rank_of("AhAdAsAcKh")
        );
    }

    #[test]
    fn test_full_house() {
        let rank = rank_of("2h2d3s3c3h");
        assert_eq!(Category::FullHouse, rank.category);
        assert_eq!(Value::Three as u32 * RANK_BASE + Value::Two as u32, rank.value);
        // Trips decide before the pair.
        assert!(rank_of("3h3d2s2c2h") < rank);
        assert!(rank_of("2h2d3s3c3h") < rank_of("4h4d3s3c3d"));
    }

    #[test]
    fn test_three_of_a_kind() {
        assert_eq!(
            Rank::new(Category::ThreeOfAKind, Value::Two as u32),
            rank_of("2c2s2h5s6d")
        );
    }

    #[test]
    fn test_two_pair() {
        let rank = rank_of("AdAc9d9cTs");
        assert_eq!(
            Rank::new(
                Category::TwoPair,
                Value::Ace as u32 * RANK_BASE + Value::Nine as u32
            ),
            rank
        );
        // The order the pairs show up in doesn't matter.
        assert_eq!(rank, rank_of("9d9cTsAdAc"));
        // Highest pair first.
        assert!(rank_of("KdKc9d9cTs") < rank_of("AdAc2d2cTs"));
    }

    #[test]
    fn test_one_pair() {
        assert_eq!(
            Rank::new(Category::Pair, Value::Ace as u32),
            rank_of("AdAc9d8cTs")
        );
    }

    #[test]
    fn test_bust() {
        let rank = rank_of("2h4d6s8cTh");
        assert_eq!(Category::Bust, rank.category);
        assert_eq!(
            fold(&[Value::Ten, Value::Eight, Value::Six, Value::Four, Value::Two]),
            rank.value
        );
    }

    #[test]
    fn test_bust_order_uses_every_card() {
        // Ace high with low kickers beats king high with high kickers.
        assert!(rank_of("Ah2d3s4c6h") > rank_of("KhQdJs9c8h"));
        assert!(rank_of("Ah9d3s4c6h") > rank_of("Ah8d7s5c4h"));
    }

    #[test]
    fn test_flush() {
        let rank = rank_of("Ad8d9dTd5d");
        assert_eq!(Category::Flush, rank.category);
        assert_eq!(
            fold(&[Value::Ace, Value::Ten, Value::Nine, Value::Eight, Value::Five]),
            rank.value
        );
    }

    #[test]
    fn test_idempotent() {
        let hand = Hand::new_from_str("KsKd7h7c2s").unwrap();
        assert_eq!(hand.rank(), hand.rank());
    }

    #[test]
    fn test_permutation_invariant() {
        let cards = [
            Card::new(Value::Jack, Suit::Club),
            Card::new(Value::Jack, Suit::Heart),
            Card::new(Value::Four, Suit::Spade),
            Card::new(Value::Four, Suit::Diamond),
            Card::new(Value::Jack, Suit::Spade),
        ];
        let expected = classify(&cards).unwrap();
        let mut perm = cards;
        for i in 0..HAND_SIZE {
            for j in 0..HAND_SIZE {
                perm.swap(i, j);
                assert_eq!(expected, classify(&perm).unwrap());
            }
        }
    }

    #[test]
    fn test_every_hand_ignores_card_order() {
        let deck = Deck::new();
        for cards in deck.enumerate_hands() {
            let rank = rank_cards(&cards);
            assert_eq!(rank, rank_cards(&cards));

            let mut reversed = cards;
            reversed.reverse();
            assert_eq!(rank, rank_cards(&reversed));

            let mut rotated = cards;
            rotated.rotate_left(2);
            assert_eq!(rank, classify(&rotated).unwrap());
        }
    }

    #[test]
    fn test_classify_rejects_bad_hands() {
        let cards: Vec<Card> = (0..6).map(Card::from).collect();
        assert!(classify(&cards).unwrap_err().is_invalid_hand());
        assert!(classify(&cards[..4]).unwrap_err().is_invalid_hand());
        let dup = [cards[0], cards[1], cards[2], cards[3], cards[0]];
        assert!(classify(&dup).unwrap_err().is_invalid_hand());
    }
}
