//! Five card showdowns between simulated players.
//!
//! Every game shuffles the deck, deals each player five cards
//! straight off the top, ranks the hands and then announces
//! whoever holds the best one. Nothing is drawn or bet.

use std::cmp::Ordering;
use std::fmt;
use std::io::Write;

use rand::Rng;
use tracing::{Level, event, trace_span};

use crate::core::{Category, Deck, HAND_SIZE, Hand, NUM_CARDS, PokerError, Rank, Rankable};

mod player_bit_set;
pub use self::player_bit_set::{ActivePlayerBitSetIter, PlayerBitSet};

/// Fewest players a game can have.
pub const MIN_PLAYERS: usize = 1;
/// Most players that can be dealt five cards from one deck.
pub const MAX_PLAYERS: usize = NUM_CARDS / HAND_SIZE;

/// A table of players that can play game after game.
#[derive(Debug)]
pub struct Game {
    num_players: usize,
    deck: Deck,
    games_played: usize,
}

impl Game {
    pub fn new(num_players: usize) -> Result<Self, PokerError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(PokerError::InvalidPlayerCount(num_players));
        }
        Ok(Self {
            num_players,
            deck: Deck::new(),
            games_played: 0,
        })
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    pub fn games_played(&self) -> usize {
        self.games_played
    }

    /// Shuffle a fresh ordered deck, deal five cards to each player
    /// and find the winners.
    ///
    /// Player `p` gets the cards at `5 * p..5 * p + 5` of the
    /// shuffled deck so no two hands share a card.
    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Showdown {
        self.deck = Deck::new();
        self.deck.shuffle(rng);
        self.games_played += 1;

        let hands: Vec<Hand> = self.deck[..self.num_players * HAND_SIZE]
            .chunks_exact(HAND_SIZE)
            .map(|chunk| {
                let mut cards = [chunk[0]; HAND_SIZE];
                cards.copy_from_slice(chunk);
                Hand::from_distinct(cards)
            })
            .collect();
        let ranks: Vec<Rank> = hands.iter().map(|h| h.rank()).collect();
        let (winners, best) = find_winners(&ranks);

        Showdown {
            game_number: self.games_played,
            hands,
            ranks,
            winners,
            best,
        }
    }
}

/// Every player holding the best rank, along with that rank.
///
/// Hands compare by category first and by tie break value second.
/// Players that match on both share the win.
pub fn find_winners(ranks: &[Rank]) -> (PlayerBitSet, Rank) {
    ranks.iter().enumerate().fold(
        (PlayerBitSet::default(), Rank::new(Category::Bust, 0)),
        |(mut found, max_rank), (idx, rank)| match rank.cmp(&max_rank) {
            // Shares the best rank seen so far.
            Ordering::Equal => {
                found.enable(idx);
                (found, *rank)
            }
            // A new best, everyone before it has lost.
            Ordering::Greater => {
                found = PlayerBitSet::default();
                found.enable(idx);
                (found, *rank)
            }
            Ordering::Less => (found, max_rank),
        },
    )
}

/// The result of one game.
#[derive(Debug, Clone)]
pub struct Showdown {
    pub game_number: usize,
    pub hands: Vec<Hand>,
    pub ranks: Vec<Rank>,
    pub winners: PlayerBitSet,
    pub best: Rank,
}

impl fmt::Display for Showdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GAME {}", self.game_number)?;
        for (idx, (hand, rank)) in self.hands.iter().zip(&self.ranks).enumerate() {
            write!(f, "\nPlayer {}'s hand: {} ({})", idx + 1, hand, rank.category)?;
        }

        let announce = if self.winners.count() == 1 {
            "winner is"
        } else {
            "winners are"
        };
        write!(f, "\nThe {} ", announce)?;
        for (n, idx) in self.winners.ones().enumerate() {
            if n > 0 {
                write!(f, " and ")?;
            }
            write!(f, "player {}", idx + 1)?;
        }
        write!(f, "!")
    }
}

/// Tally of a run of games.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationSummary {
    pub games: usize,
    /// Games won by each player. A shared win counts for everyone in it.
    pub wins: Vec<usize>,
    pub ties: usize,
}

/// Play `games` games with `num_players` players and write what
/// happened in each one to `out`.
pub fn simulate<R: Rng + ?Sized, W: Write>(
    num_players: usize,
    games: usize,
    rng: &mut R,
    out: &mut W,
) -> Result<SimulationSummary, PokerError> {
    let mut game = Game::new(num_players)?;
    let span = trace_span!("simulate", num_players, games);
    let _enter = span.enter();

    let mut summary = SimulationSummary {
        games: 0,
        wins: vec![0; num_players],
        ties: 0,
    };
    for _ in 0..games {
        let showdown = game.play(rng);
        event!(
            Level::DEBUG,
            game = showdown.game_number,
            best = %showdown.best,
            winners = showdown.winners.count(),
            "Game finished"
        );

        writeln!(out, "{}", showdown)?;
        writeln!(out)?;

        summary.games += 1;
        if showdown.winners.count() > 1 {
            summary.ties += 1;
        }
        for idx in showdown.winners.ones() {
            summary.wins[idx] += 1;
        }
    }
    out.flush()?;

    event!(Level::INFO, games = summary.games, ties = summary.ties, "Simulation finished");
    Ok(summary)
}
