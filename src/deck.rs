use crate::cards::{Card, Rank, Suit};
use crate::hand::{CardSource, Hand, HandError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::OnceLock;

static FULL_DECK: OnceLock<[Card; 52]> = OnceLock::new();

/// The 52 cards of a standard deck in game order (3d first, 2s last).
/// Built on first use and never mutated.
///
/// ```
/// use president_rs::cards::Card;
/// use president_rs::deck::full_deck;
///
/// assert_eq!(full_deck().len(), 52);
/// assert_eq!(full_deck()[0], Card::LOWEST);
/// assert_eq!(full_deck()[51], Card::HIGHEST);
/// ```
pub fn full_deck() -> &'static [Card; 52] {
    FULL_DECK.get_or_init(|| {
        let mut cards = [Card::LOWEST; 52];
        for (i, rank) in Rank::ALL.iter().enumerate() {
            for (j, suit) in Suit::ALL.iter().enumerate() {
                cards[i * 4 + j] = Card::new(*rank, *suit);
            }
        }
        cards
    })
}

/// The cards of `deck` not present in any of `used` (hands, moves, single cards or
/// nested collections of them).
///
/// ```
/// use president_rs::cards::Card;
/// use president_rs::deck::{cards_remaining, full_deck};
/// use president_rs::hand::Hand;
///
/// let played: Hand = "3d 3c".parse().unwrap();
/// let left = cards_remaining(full_deck(), &[played]).unwrap();
/// assert_eq!(left.len(), 50);
/// assert!(!left.contains(Card::LOWEST));
/// ```
pub fn cards_remaining<S>(deck: &[Card], used: &S) -> Result<Hand, HandError>
where
    S: CardSource + ?Sized,
{
    Hand::try_new(deck.to_vec())?.subtract(used)
}

/// Lowest card in `cards`, if any.
pub fn lowest(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().min()
}

/// Highest card in `cards`, if any.
pub fn highest(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().max()
}

/// The lowest card that was dealt to a player, i.e. the lowest card not left in
/// `remainder`. Walks the deck upward from 3d.
pub fn lowest_unseen(remainder: &[Card]) -> Option<Card> {
    let mut card = Some(Card::LOWEST);
    while let Some(c) = card {
        if !remainder.contains(&c) {
            return Some(c);
        }
        card = c.next();
    }
    None
}

/// Which hand leads the first round: the one holding the lowest dealt card.
/// Returns the hand's index and that card.
pub fn find_leader(hands: &[Hand], remainder: &[Card]) -> Option<(usize, Card)> {
    let card = lowest_unseen(remainder)?;
    hands.iter().position(|h| h.contains(card)).map(|seat| (seat, card))
}

/// Result of dealing a deck out to players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: Vec<Hand>,
    /// Cards that could not be shared out evenly.
    pub remainder: Hand,
}

impl Deal {
    /// See [`find_leader`].
    pub fn leader(&self) -> Option<(usize, Card)> {
        find_leader(&self.hands, self.remainder.as_slice())
    }
}

/// A standard 52-card deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use president_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self { cards: full_deck().to_vec() }
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

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal the deck round-robin until only `len % players` cards are left;
    /// those become the remainder. Dealing to zero players deals nothing.
    ///
    /// ```
    /// use president_rs::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(1);
    /// let deal = deck.deal(5).unwrap();
    /// assert!(deal.hands.iter().all(|h| h.len() == 10));
    /// assert_eq!(deal.remainder.len(), 2);
    /// ```
    pub fn deal(&mut self, players: usize) -> Result<Deal, HandError> {
        let mut hands = vec![Hand::new(); players];
        if players > 0 {
            let leftover = self.cards.len() % players;
            let mut seat = 0;
            while self.cards.len() > leftover {
                let Some(card) = self.draw() else { break };
                hands[seat].push(card)?;
                seat = (seat + 1) % players;
            }
        }
        let remainder = Hand::try_new(std::mem::take(&mut self.cards))?;
        log::debug!("dealt {} hand(s), {} card(s) left over", hands.len(), remainder.len());
        Ok(Deal { hands, remainder })
    }
}
