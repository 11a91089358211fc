//! Agents: pluggable move deciders (scripted, heuristic bots, humans at a terminal).
//!
//! The round loop that drives a game holds one `Box<dyn MoveDecider>` per player
//! and never needs to know which concrete decider it is talking to. Every decider
//! only ever picks from the options the engine enumerated for it.

use crate::cards::Card;
use crate::hand::{Hand, HandError};
use crate::moves::{HandType, Move, MoveError};
use core::cmp::Ordering;

mod heuristic;
mod interactive;

pub use heuristic::{Heuristic, HeuristicProfile};
pub use interactive::Interactive;

/// Kinds of deciders attached to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeciderKind {
    Human,
    Bot,
    Scripted,
}

/// What a decider wants to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Play the option at this index.
    Play(usize),
    Pass,
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DecideError {
    #[error("no option to play and passing is not allowed")]
    NoChoice,
    #[error("asked for {wanted} card(s) but only {held} are held")]
    NotEnoughCards { wanted: usize, held: usize },
    #[error("input failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Everything a decider may look at when it is asked to move.
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    pub hand: &'a Hand,
    /// Legal moves as returned by [`crate::moves::valid_moves`].
    pub options: &'a [Move],
    /// Move currently on the table; `None` when leading.
    pub previous: Option<&'a Move>,
    pub can_pass: bool,
}

impl<'a> Turn<'a> {
    pub fn new(hand: &'a Hand, options: &'a [Move]) -> Self {
        Self { hand, options, previous: None, can_pass: false }
    }

    pub fn following(mut self, previous: &'a Move) -> Self {
        self.previous = Some(previous);
        self.can_pass = true;
        self
    }

    pub fn with_pass(mut self, can_pass: bool) -> Self {
        self.can_pass = can_pass;
        self
    }

    /// The pass-or-fail answer when there is nothing to play.
    fn forced(&self) -> Result<Decision, DecideError> {
        if self.can_pass {
            Ok(Decision::Pass)
        } else {
            Err(DecideError::NoChoice)
        }
    }
}

/// A capability that picks one of the enumerated moves, or passes.
pub trait MoveDecider {
    /// Choose an option from `turn.options` or pass (only when `turn.can_pass`).
    fn decide(&mut self, turn: &Turn<'_>) -> Result<Decision, DecideError>;

    /// Choose `count` distinct cards from `hand` to give away in a trade.
    fn choose_cards(&mut self, hand: &Hand, count: usize) -> Result<Vec<Card>, DecideError>;

    fn kind(&self) -> DeciderKind {
        DeciderKind::Scripted
    }
}

/// Always plays the first option; gives away the lowest cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl MoveDecider for FirstChoice {
    fn decide(&mut self, turn: &Turn<'_>) -> Result<Decision, DecideError> {
        if turn.options.is_empty() {
            return turn.forced();
        }
        Ok(Decision::Play(0))
    }

    fn choose_cards(&mut self, hand: &Hand, count: usize) -> Result<Vec<Card>, DecideError> {
        ensure_enough(hand, count)?;
        Ok(hand.sorted().into_iter().take(count).collect())
    }
}

pub(crate) fn ensure_enough(hand: &Hand, count: usize) -> Result<(), DecideError> {
    if count > hand.len() {
        return Err(DecideError::NotEnoughCards { wanted: count, held: hand.len() });
    }
    Ok(())
}

/// Distinct hand types of an option list, in list order.
fn type_profile(moves: &[Move]) -> Vec<HandType> {
    let mut kinds: Vec<HandType> = Vec::new();
    for m in moves {
        if kinds.last() != Some(&m.hand_type()) {
            kinds.push(m.hand_type());
        }
    }
    kinds
}

/// Compare two free-choice option lists (strongest type first, as returned by
/// [`crate::moves::valid_moves`]) by their hand-type sequences. The first
/// differing type decides; with a common prefix, more distinct types win.
///
/// ```
/// use president_rs::agents::option_profile_cmp;
/// use president_rs::hand::Hand;
/// use president_rs::moves::MoveQuery;
/// use std::cmp::Ordering;
///
/// let pair: Hand = "3d 3c".parse().unwrap();
/// let split: Hand = "3d 9c".parse().unwrap();
/// let a = pair.valid_moves(&MoveQuery::new()).unwrap();
/// let b = split.valid_moves(&MoveQuery::new()).unwrap();
/// assert_eq!(option_profile_cmp(&a, &b), Ordering::Greater);
/// ```
pub fn option_profile_cmp(a: &[Move], b: &[Move]) -> Ordering {
    type_profile(a).cmp(&type_profile(b))
}
