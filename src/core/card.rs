use std::fmt;
use std::str::FromStr;

use super::PokerError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Number of distinct values in a deck.
pub const NUM_VALUES: usize = 13;

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; NUM_VALUES] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a rank index in `0..13` and convert it to a value.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a valid rank index.
    pub fn from_u8(v: u8) -> Value {
        VALUES[usize::from(v)]
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub fn values() -> [Value; NUM_VALUES] {
        VALUES
    }

    /// Parse the single character form of a value.
    ///
    /// ```
    /// use five_card_odds::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('x'));
    /// ```
    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Suit {
    /// Hearts
    Heart = 0,
    /// Diamonds
    Diamond = 1,
    /// Spades
    Spade = 2,
    /// Clubs
    Club = 3,
}

/// Number of distinct suits in a deck.
pub const NUM_SUITS: usize = 4;

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; NUM_SUITS] = [Suit::Heart, Suit::Diamond, Suit::Spade, Suit::Club];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; NUM_SUITS] {
        SUITS
    }

    /// Take a suit index in `0..4` and convert it to a suit.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not a valid suit index.
    pub fn from_u8(s: u8) -> Suit {
        SUITS[usize::from(s)]
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s.to_ascii_lowercase() {
            'h' => Some(Suit::Heart),
            'd' => Some(Suit::Diamond),
            's' => Some(Suit::Spade),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Spade => 's',
            Suit::Club => 'c',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Cards convert to their index in the ordered deck,
/// `value * 4 + suit`.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.value as u8 * NUM_SUITS as u8 + card.suit as u8
    }
}

/// The inverse of the deck index. Indexes at or above 52
/// are not cards and will panic.
impl From<u8> for Card {
    fn from(idx: u8) -> Self {
        Self {
            value: Value::from_u8(idx / NUM_SUITS as u8),
            suit: Suit::from_u8(idx % NUM_SUITS as u8),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Parse the two character form of a card, value then suit.
///
/// ```
/// use five_card_odds::core::{Card, Suit, Value};
///
/// let card: Card = "Td".parse().unwrap();
/// assert_eq!(Card::new(Value::Ten, Suit::Diamond), card);
/// ```
impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let value = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .and_then(|c| Value::from_char(c).ok_or(PokerError::UnexpectedValueChar))?;
        let suit = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .and_then(|c| Suit::from_char(c).ok_or(PokerError::UnexpectedSuitChar))?;
        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        Ok(Self { value, suit })
    }
}
