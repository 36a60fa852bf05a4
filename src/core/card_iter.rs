use crate::core::card::Card;

/// Iterator over every `K` card combination of a slice of cards.
///
/// The offsets are kept strictly increasing, so each unordered set of
/// cards comes out exactly once, in lexicographic order of the
/// offsets. Nothing is allocated per combination.
#[derive(Debug, Clone)]
pub struct CardIter<'a, const K: usize> {
    // All the possible cards that can be dealt
    possible_cards: &'a [Card],

    // Set of current offsets being used to create card sets.
    idx: [usize; K],

    // Has the first combination been handed out yet.
    started: bool,

    // Set once every combination has been produced.
    done: bool,
}

impl<'a, const K: usize> CardIter<'a, K> {
    /// Create a new iterator over the `K` card combinations of `possible_cards`.
    ///
    /// ```
    /// use five_card_odds::core::{Card, CardIter};
    ///
    /// let cards: Vec<Card> = (0..4).map(Card::from).collect();
    /// assert_eq!(6, CardIter::<2>::new(&cards).count());
    /// ```
    pub fn new(possible_cards: &'a [Card]) -> Self {
        let mut idx = [0; K];
        for (i, slot) in idx.iter_mut().enumerate() {
            *slot = i;
        }
        Self {
            possible_cards,
            idx,
            started: false,
            done: K == 0 || possible_cards.len() < K,
        }
    }

    /// Move the offsets to the next combination. Returns false once
    /// the last one has been passed.
    fn advance(&mut self) -> bool {
        let n = self.possible_cards.len();
        // Find the right most offset that still has room to move.
        let mut level = K;
        while level > 0 {
            level -= 1;
            // Each level needs enough cards after it to fill out the rest of the hand.
            if self.idx[level] < n - K + level {
                self.idx[level] += 1;
                for next in level + 1..K {
                    self.idx[next] = self.idx[next - 1] + 1;
                }
                return true;
            }
        }
        false
    }

    fn current(&self) -> [Card; K] {
        self.idx.map(|i| self.possible_cards[i])
    }
}

impl<const K: usize> Iterator for CardIter<'_, K> {
    type Item = [Card; K];

    fn next(&mut self) -> Option<[Card; K]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.current())
    }
}

/// Number of ways to choose `k` items out of `n`, or `None` when
/// that doesn't fit in a `u64`.
///
/// ```
/// use five_card_odds::core::choose;
///
/// assert_eq!(Some(2_598_960), choose(52, 5));
/// assert_eq!(Some(0), choose(4, 5));
/// assert_eq!(None, choose(u64::MAX, 2));
/// ```
pub fn choose(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    // Each partial product is itself a binomial coefficient, so the
    // division is exact. Widening keeps the multiply from overflowing
    // until the result itself no longer fits.
    (0..k).try_fold(1u64, |acc, i| {
        let next = u128::from(acc) * u128::from(n - i) / u128::from(i + 1);
        u64::try_from(next).ok()
    })
}
