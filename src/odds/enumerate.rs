use rayon::prelude::*;
use tracing::{Level, event, trace_span};

use super::CategoryCounts;
use crate::core::{Card, CardIter, HAND_SIZE, PokerError, check_distinct, rank_cards};

/// Rank every five card hand that can be made from `deck` and count
/// the categories.
///
/// Each unordered hand is ranked exactly once, so a full deck gives
/// `choose(52, 5)` hands. A deck holding the same card twice is
/// rejected with `DuplicateCardInHand` before anything is ranked.
///
/// ```
/// use five_card_odds::core::{Category, Deck};
/// use five_card_odds::odds::enumerate;
///
/// let deck = Deck::new();
/// // Just the tens up to the aces.
/// let counts = enumerate(&deck[32..]).unwrap();
/// assert_eq!(4, counts[Category::RoyalFlush]);
///
/// assert!(enumerate(&[deck[0], deck[0]]).is_err());
/// ```
pub fn enumerate(deck: &[Card]) -> Result<CategoryCounts, PokerError> {
    let span = trace_span!("enumerate", cards = deck.len());
    let _enter = span.enter();
    check_distinct(deck)?;

    let mut counts = CategoryCounts::new();
    for cards in CardIter::<HAND_SIZE>::new(deck) {
        counts.record(rank_cards(&cards).category);
    }

    event!(
        Level::INFO,
        hands = counts.total(),
        "Finished enumerating five card hands"
    );
    Ok(counts)
}

/// Same counts as [`enumerate`] with the work spread over the rayon
/// thread pool.
///
/// The hands are split up by the first card chosen. Every partition
/// counts into its own `CategoryCounts` and they are summed at the end.
pub fn enumerate_parallel(deck: &[Card]) -> Result<CategoryCounts, PokerError> {
    let span = trace_span!("enumerate_parallel", cards = deck.len());
    let _enter = span.enter();
    check_distinct(deck)?;

    let partitions = (deck.len() + 1).saturating_sub(HAND_SIZE);
    let counts = (0..partitions)
        .into_par_iter()
        .map(|first| count_partition(deck, first))
        .reduce(CategoryCounts::new, |a, b| a + b);

    event!(
        Level::INFO,
        hands = counts.total(),
        partitions,
        "Finished enumerating five card hands"
    );
    Ok(counts)
}

/// Count the hands whose lowest deck offset is `first`.
///
/// The partitions for `first` in `0..=deck.len() - 5` cover every
/// hand exactly once.
pub fn enumerate_partition(deck: &[Card], first: usize) -> Result<CategoryCounts, PokerError> {
    check_distinct(deck)?;
    Ok(count_partition(deck, first))
}

// `deck` has already been checked for repeats.
fn count_partition(deck: &[Card], first: usize) -> CategoryCounts {
    let mut counts = CategoryCounts::new();
    let Some(&lead) = deck.get(first) else {
        return counts;
    };

    for rest in CardIter::<{ HAND_SIZE - 1 }>::new(&deck[first + 1..]) {
        let cards = [lead, rest[0], rest[1], rest[2], rest[3]];
        counts.record(rank_cards(&cards).category);
    }

    event!(
        Level::TRACE,
        first,
        hands = counts.total(),
        "Finished partition"
    );
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Deck, choose};

    /// The well known number of five card hands in each category.
    const FIVE_CARD_DISTRIBUTION: [(Category, u64); 10] = [
        (Category::Bust, 1_302_540),
        (Category::Pair, 1_098_240),
        (Category::TwoPair, 123_552),
        (Category::ThreeOfAKind, 54_912),
        (Category::Straight, 10_200),
        (Category::Flush, 5_108),
        (Category::FullHouse, 3_744),
        (Category::FourOfAKind, 624),
        (Category::StraightFlush, 36),
        (Category::RoyalFlush, 4),
    ];

    fn assert_distribution(counts: &CategoryCounts) {
        assert_eq!(2_598_960, counts.total());
        for (category, expected) in FIVE_CARD_DISTRIBUTION {
            assert_eq!(expected, counts[category], "{}", category);
        }
    }

    #[test_log::test]
    fn test_full_deck() {
        let deck = Deck::new();
        assert_distribution(&enumerate(&deck[..]).unwrap());
    }

    #[test_log::test]
    fn test_full_deck_parallel() {
        let deck = Deck::new();
        let parallel = enumerate_parallel(&deck[..]).unwrap();
        assert_distribution(&parallel);
    }

    #[test]
    fn test_deterministic() {
        let deck = Deck::new();
        let serial = enumerate(&deck[..20]).unwrap();
        assert_eq!(serial, enumerate(&deck[..20]).unwrap());
        assert_eq!(serial, enumerate_parallel(&deck[..20]).unwrap());
    }

    #[test]
    fn test_partitions_cover_every_hand() {
        let deck = Deck::new();
        let cards = &deck[..16];
        let total: u64 = (0..=cards.len() - HAND_SIZE)
            .map(|first| enumerate_partition(cards, first).unwrap().total())
            .sum();
        assert_eq!(choose(16, 5).unwrap(), total);
        // The first partition has every hand holding the first card.
        assert_eq!(choose(15, 4).unwrap(), enumerate_partition(cards, 0).unwrap().total());
        // Past the end there's nothing to count.
        assert_eq!(0, enumerate_partition(cards, 12).unwrap().total());
        assert_eq!(0, enumerate_partition(cards, 40).unwrap().total());
    }

    #[test]
    fn test_small_decks() {
        let deck = Deck::new();
        assert_eq!(0, enumerate(&deck[..4]).unwrap().total());
        assert_eq!(0, enumerate_parallel(&deck[..4]).unwrap().total());
        assert_eq!(0, enumerate_parallel(&[]).unwrap().total());

        let one = enumerate(&deck[..5]).unwrap();
        assert_eq!(1, one.total());
        // 2h 2d 2s 2c 3h
        assert_eq!(1, one[Category::FourOfAKind]);
    }

    #[test]
    fn test_single_suit() {
        let deck = Deck::new();
        let hearts: Vec<Card> = deck.iter().step_by(4).cloned().collect();
        let counts = enumerate(&hearts).unwrap();

        assert_eq!(choose(13, 5).unwrap(), counts.total());
        assert_eq!(1, counts[Category::RoyalFlush]);
        assert_eq!(9, counts[Category::StraightFlush]);
        assert_eq!(choose(13, 5).unwrap() - 10, counts[Category::Flush]);
    }

    #[test]
    fn test_repeated_card_rejected() {
        let deck = Deck::new();
        // Ah Ah Ad As Ac can never be dealt, it must not count as anything.
        let aces = &deck[48..];
        let cards = [aces[0], aces[0], aces[1], aces[2], aces[3]];

        for result in [
            enumerate(&cards),
            enumerate_parallel(&cards),
            enumerate_partition(&cards, 0),
        ] {
            assert!(matches!(
                result,
                Err(PokerError::DuplicateCardInHand(c)) if c == aces[0]
            ));
        }
    }

    #[test]
    fn test_repeat_anywhere_in_deck_rejected() {
        let deck = Deck::new();
        let mut cards: Vec<Card> = deck.iter().cloned().collect();
        cards.push(deck[17]);
        let err = enumerate_parallel(&cards).unwrap_err();
        assert!(err.is_invalid_hand());
        assert!(enumerate(&cards).unwrap_err().is_invalid_hand());
    }
}
