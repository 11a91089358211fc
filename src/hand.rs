use crate::cards::{parse_cards, Card};
use crate::moves::{valid_moves, Move, MoveError, MoveQuery};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("card {0} is not in the hand")]
    CardNotInHand(Card),
    #[error("card {0} is already in the hand")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Anything that can be flattened into a list of cards: a single card, a hand,
/// a move, or any (nested) slice or vector of those.
pub trait CardSource {
    fn collect_cards(&self, out: &mut Vec<Card>);

    fn to_card_vec(&self) -> Vec<Card> {
        let mut out = Vec::new();
        self.collect_cards(&mut out);
        out
    }
}

impl CardSource for Card {
    fn collect_cards(&self, out: &mut Vec<Card>) {
        out.push(*self);
    }
}

impl<T: CardSource> CardSource for [T] {
    fn collect_cards(&self, out: &mut Vec<Card>) {
        for item in self {
            item.collect_cards(out);
        }
    }
}

impl<T: CardSource, const N: usize> CardSource for [T; N] {
    fn collect_cards(&self, out: &mut Vec<Card>) {
        self.as_slice().collect_cards(out);
    }
}

impl<T: CardSource> CardSource for Vec<T> {
    fn collect_cards(&self, out: &mut Vec<Card>) {
        self.as_slice().collect_cards(out);
    }
}

impl<T: CardSource + ?Sized> CardSource for &T {
    fn collect_cards(&self, out: &mut Vec<Card>) {
        (**self).collect_cards(out);
    }
}

impl CardSource for Hand {
    fn collect_cards(&self, out: &mut Vec<Card>) {
        out.extend_from_slice(&self.cards);
    }
}

impl CardSource for Move {
    fn collect_cards(&self, out: &mut Vec<Card>) {
        out.extend_from_slice(self.cards());
    }
}

/// The cards one player currently holds. Never contains the same card twice.
///
/// ```
/// use president_rs::hand::Hand;
///
/// let hand: Hand = "3d 3c 4h".parse().unwrap();
/// let rest = hand.subtract(&"3c".parse::<Hand>().unwrap()).unwrap();
/// assert_eq!(rest.len(), 2);
/// assert_eq!(hand.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Build a hand from cards, rejecting duplicates.
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        let mut hand = Hand::new();
        hand.extend(cards)?;
        Ok(hand)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Cards sorted in game order, lowest first.
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort_unstable();
        cards
    }

    pub fn sort(&mut self) {
        self.cards.sort_unstable();
    }

    pub fn lowest(&self) -> Option<Card> {
        self.cards.iter().copied().min()
    }

    pub fn highest(&self) -> Option<Card> {
        self.cards.iter().copied().max()
    }

    /// Append a card (deal or trade receipt).
    pub fn push(&mut self, card: Card) -> Result<(), HandError> {
        if self.contains(card) {
            return Err(HandError::DuplicateCard(card));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Append several cards; nothing is added if any of them is a duplicate.
    pub fn extend<I>(&mut self, cards: I) -> Result<(), HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut next = self.cards.clone();
        for card in cards {
            if next.contains(&card) {
                return Err(HandError::DuplicateCard(card));
            }
            next.push(card);
        }
        self.cards = next;
        Ok(())
    }

    /// Remove one matching card per card in `other`, returning a new hand.
    /// `self` is left untouched.
    pub fn subtract<S: CardSource + ?Sized>(&self, other: &S) -> Result<Hand, HandError> {
        let mut cards = self.cards.clone();
        for card in other.to_card_vec() {
            let pos =
                cards.iter().position(|c| *c == card).ok_or(HandError::CardNotInHand(card))?;
            cards.remove(pos);
        }
        Ok(Hand { cards })
    }

    /// Like [`Hand::subtract`], but mutates this hand. On error the hand is unchanged.
    pub fn subtract_in_place<S: CardSource + ?Sized>(
        &mut self,
        other: &S,
    ) -> Result<&mut Self, HandError> {
        *self = self.subtract(other)?;
        Ok(self)
    }

    /// Move `cards` from this hand into `to`. Both hands are unchanged on error.
    pub fn give<S: CardSource + ?Sized>(
        &mut self,
        to: &mut Hand,
        cards: &S,
    ) -> Result<(), HandError> {
        let moved = cards.to_card_vec();
        let remaining = self.subtract(&moved)?;
        to.extend(moved.iter().copied())?;
        self.cards = remaining.cards;
        log::debug!("gave {} card(s), {} left", moved.len(), self.len());
        Ok(())
    }

    /// Every legal move from this hand under `query`. See [`crate::moves::valid_moves`].
    pub fn valid_moves(&self, query: &MoveQuery) -> Result<Vec<Move>, MoveError> {
        valid_moves(self.as_slice(), query)
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_new(cards)
    }
}
