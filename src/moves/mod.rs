pub(crate) mod analysis;
pub(crate) mod combinations;
pub(crate) mod compare;
pub(crate) mod detector;
pub(crate) mod enumerate;
pub(crate) mod run_lengths;
pub(crate) mod straight_info;

use crate::cards::{parse_cards, Card};
use crate::hand::HandError;
use core::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub use combinations::{binomial, Combinations};
pub use compare::compare_moves;
pub use enumerate::{valid_moves, MoveQuery, SelectionMode};

/// Largest number of cards a single move can hold.
pub const MAX_MOVE_SIZE: usize = 5;

/// Move category from weakest to strongest.
///
/// `Empty` and `Scattered` are not playable; every other type beats every type
/// listed before it regardless of card values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum HandType {
    Empty = 0,
    Scattered = 1,
    OneCard = 2,
    Pair = 3,
    ThreeOfAKind = 4,
    FourOfAKind = 5,
    Straight = 6,
    Flush = 7,
    FullHouse = 8,
    FourOfAKindPlusOne = 9,
    StraightFlush = 10,
}

impl HandType {
    pub const ALL: [HandType; 11] = [
        HandType::Empty,
        HandType::Scattered,
        HandType::OneCard,
        HandType::Pair,
        HandType::ThreeOfAKind,
        HandType::FourOfAKind,
        HandType::Straight,
        HandType::Flush,
        HandType::FullHouse,
        HandType::FourOfAKindPlusOne,
        HandType::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Whether a move of this type can be played or compared.
    pub const fn is_playable(self) -> bool {
        !matches!(self, HandType::Empty | HandType::Scattered)
    }

    pub const fn label(self) -> &'static str {
        match self {
            HandType::Empty => "Empty",
            HandType::Scattered => "Scattered",
            HandType::OneCard => "One Card",
            HandType::Pair => "Pair",
            HandType::ThreeOfAKind => "Three of a Kind",
            HandType::FourOfAKind => "Four of a Kind",
            HandType::Straight => "Straight",
            HandType::Flush => "Flush",
            HandType::FullHouse => "Full House",
            HandType::FourOfAKindPlusOne => "Four of a Kind Plus One",
            HandType::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("cannot compare a {left} move with a {right} move")]
    InvalidComparison { left: HandType, right: HandType },
    #[error("invalid move: {0}")]
    Hand(#[from] HandError),
}

/// Classify cards into a hand type. Card order does not matter.
///
/// ```
/// use president_rs::cards::parse_cards;
/// use president_rs::moves::{classify, HandType};
///
/// let cards = parse_cards("4d 9s 4c 9d 4h").unwrap();
/// assert_eq!(classify(&cards), HandType::FullHouse);
/// ```
pub fn classify(cards: &[Card]) -> HandType {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    classify_sorted(&sorted)
}

/// `cards` must be sorted ascending.
pub(crate) fn classify_sorted(cards: &[Card]) -> HandType {
    match cards {
        [] => HandType::Empty,
        [first, rest @ ..] if cards.len() < MAX_MOVE_SIZE => {
            if rest.iter().all(|c| c.rank() == first.rank()) {
                match cards.len() {
                    1 => HandType::OneCard,
                    2 => HandType::Pair,
                    3 => HandType::ThreeOfAKind,
                    _ => HandType::FourOfAKind,
                }
            } else {
                HandType::Scattered
            }
        }
        [a, b, c, d, e] => {
            let analysis = analysis::MoveAnalysis::new(&[*a, *b, *c, *d, *e]);
            detector::detect_five(&analysis)
        }
        _ => HandType::Scattered,
    }
}

/// A set of cards tagged with its hand type, classified once at construction.
///
/// Cards are kept sorted ascending, so two moves are equal exactly when they
/// hold the same cards.
///
/// ```
/// use president_rs::moves::{HandType, Move};
///
/// let straight: Move = "3d 4c 5h 6s 7d".parse().unwrap();
/// let pair: Move = "2d 2s".parse().unwrap();
/// assert_eq!(straight.hand_type(), HandType::Straight);
/// assert!(straight.beats(&pair).unwrap());
/// assert!(pair.beats(&"Ad As".parse().unwrap()).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    cards: Vec<Card>,
    hand_type: HandType,
}

impl Move {
    /// Build a move from distinct cards in any order.
    pub fn new(cards: Vec<Card>) -> Result<Self, MoveError> {
        let mut cards = cards;
        cards.sort_unstable();
        if let Some(w) = cards.windows(2).find(|w| w[0] == w[1]) {
            return Err(HandError::DuplicateCard(w[0]).into());
        }
        Ok(Self::from_sorted(cards))
    }

    /// `cards` must be sorted ascending and distinct.
    pub(crate) fn from_sorted(cards: Vec<Card>) -> Self {
        let hand_type = classify_sorted(&cards);
        Self { cards, hand_type }
    }

    pub fn single(card: Card) -> Self {
        Self::from_sorted(vec![card])
    }

    pub fn hand_type(&self) -> HandType {
        self.hand_type
    }

    /// Cards sorted ascending.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.binary_search(&card).is_ok()
    }

    pub fn highest(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Order two moves; see [`compare_moves`].
    pub fn compare(&self, other: &Move) -> Result<Ordering, MoveError> {
        compare_moves(self, other)
    }

    /// Whether this move may be played on top of `previous`.
    pub fn beats(&self, previous: &Move) -> Result<bool, MoveError> {
        Ok(compare_moves(self, previous)? == Ordering::Greater)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        write!(f, "({})", self.hand_type)
    }
}

impl FromStr for Move {
    type Err = MoveError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Move::new(cards)
    }
}
