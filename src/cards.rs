use std::fmt;
use std::str::FromStr;

/// Card ranks in game order: Three (low) up to King, then Ace, then Two (high).
///
/// The discriminant is the remapped rank value: printed faces 3..=13 keep their
/// value, Ace becomes 14 and Two becomes 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
    Two = 15,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Remapped ranking value (3..=15).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Printed face value (Ace = 1, Two = 2, ..., King = 13).
    pub const fn face(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            other => other as u8,
        }
    }

    /// Build a rank from its printed face value.
    pub const fn from_face(face: u8) -> Result<Rank, CardError> {
        let rank = match face {
            1 => Rank::Ace,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => return Err(CardError::FaceOutOfRange(face)),
        };
        Ok(rank)
    }

    /// The next rank up, or `None` for Two.
    pub fn next(self) -> Option<Rank> {
        let idx = (self.value() - Rank::Three.value()) as usize;
        Rank::ALL.get(idx + 1).copied()
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Two => '2',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "10" {
            return Ok(Rank::Ten);
        }
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c),
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

/// Four suits, only ever used as a tiebreak: D < C < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Diamonds = 0,
    Clubs = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Result<Suit, CardError> {
        match index {
            0 => Ok(Suit::Diamonds),
            1 => Ok(Suit::Clubs),
            2 => Ok(Suit::Hearts),
            3 => Ok(Suit::Spades),
            _ => Err(CardError::SuitOutOfRange(index)),
        }
    }

    pub fn next(self) -> Option<Suit> {
        Suit::ALL.get(self.index() as usize + 1).copied()
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "diamonds" => Ok(Suit::Diamonds),
            "clubs" => Ok(Suit::Clubs),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'd' | '\u{2666}' => Ok(Suit::Diamonds),
            'c' | '\u{2663}' => Ok(Suit::Clubs),
            'h' | '\u{2665}' => Ok(Suit::Hearts),
            's' | '\u{2660}' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// Rejected card construction.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("face value {0} is outside 1..=13")]
    FaceOutOfRange(u8),
    #[error("suit index {0} is outside 0..=3")]
    SuitOutOfRange(u8),
}

/// A playing card: rank + suit. Ordered by rank value first, then suit.
///
/// ```
/// use president_rs::cards::{Card, Rank, Suit};
///
/// let two = Card::new(Rank::Two, Suit::Diamonds);
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// assert!(two > ace);
/// assert_eq!(two.to_string(), "2d");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// The lowest card in the game, 3 of diamonds.
    pub const LOWEST: Card = Card::new(Rank::Three, Suit::Diamonds);
    /// The highest card in the game, 2 of spades.
    pub const HIGHEST: Card = Card::new(Rank::Two, Suit::Spades);

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from a printed face value (1..=13) and suit index (0..=3).
    ///
    /// ```
    /// use president_rs::cards::{Card, CardError, Rank, Suit};
    ///
    /// assert_eq!(Card::try_from_face(1, 3), Ok(Card::new(Rank::Ace, Suit::Spades)));
    /// assert_eq!(Card::try_from_face(14, 0), Err(CardError::FaceOutOfRange(14)));
    /// ```
    pub const fn try_from_face(face: u8, suit: u8) -> Result<Self, CardError> {
        let rank = match Rank::from_face(face) {
            Ok(r) => r,
            Err(e) => return Err(e),
        };
        match Suit::from_index(suit) {
            Ok(suit) => Ok(Card::new(rank, suit)),
            Err(e) => Err(e),
        }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Remapped rank value (3..=15).
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// The card immediately above this one in the 52-card order, or `None` past 2s.
    pub fn next(self) -> Option<Card> {
        match self.suit.next() {
            Some(suit) => Some(Card::new(self.rank, suit)),
            None => self.rank.next().map(|r| Card::new(r, Suit::Diamonds)),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // rank is everything before the last char, suit is the last char
        let Some((split, suit_ch)) = t.char_indices().last() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        if split == 0 {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(&t[..split])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use president_rs::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("3d, 10c As").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Three, Suit::Diamonds));
/// assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Clubs));
/// assert_eq!(cards[2], Card::new(Rank::Ace, Suit::Spades));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Two.to_string(), "2");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert!(Rank::from_str("1").is_err());
        assert!(Rank::from_str("11").is_err());
    }

    #[test]
    fn rank_face_and_value_remap() {
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::Two.value(), 15);
        assert_eq!(Rank::Ace.face(), 1);
        assert_eq!(Rank::Two.face(), 2);
        assert_eq!(Rank::King.face(), 13);
        for face in 1..=13 {
            assert_eq!(Rank::from_face(face).unwrap().face(), face);
        }
        assert_eq!(Rank::from_face(0), Err(CardError::FaceOutOfRange(0)));
    }

    #[test]
    fn suit_display_and_from_str() {
        assert_eq!(Suit::Spades.to_string(), "s");
        assert_eq!(Suit::from_str("d").unwrap(), Suit::Diamonds);
        assert_eq!(Suit::from_str("Hearts").unwrap(), Suit::Hearts);
        assert_eq!(Suit::from_str("\u{2663}").unwrap(), Suit::Clubs);
        assert!(Suit::from_str("x").is_err());
        assert_eq!(Suit::from_index(4), Err(CardError::SuitOutOfRange(4)));
    }

    #[test]
    fn card_display_and_from_str() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(a.to_string(), "As");
        assert_eq!(Card::from_str("As").unwrap(), a);
        assert_eq!(Card::from_str("10d").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(Card::from_str("2h").unwrap(), Card::new(Rank::Two, Suit::Hearts));
        assert!(Card::from_str("s").is_err());
        assert!(Card::from_str("").is_err());
    }

    #[test]
    fn ordering_is_value_then_suit() {
        let two_d = Card::new(Rank::Two, Suit::Diamonds);
        let ace_s = Card::new(Rank::Ace, Suit::Spades);
        let three_s = Card::new(Rank::Three, Suit::Spades);
        let three_h = Card::new(Rank::Three, Suit::Hearts);
        assert!(two_d > ace_s);
        assert!(ace_s > three_s);
        assert!(three_s > three_h);
    }

    #[test]
    fn next_walks_the_full_order() {
        let mut card = Card::LOWEST;
        let mut seen = 1;
        while let Some(n) = card.next() {
            assert!(n > card);
            card = n;
            seen += 1;
        }
        assert_eq!(card, Card::HIGHEST);
        assert_eq!(seen, 52);
        assert_eq!(
            Card::new(Rank::King, Suit::Spades).next(),
            Some(Card::new(Rank::Ace, Suit::Diamonds))
        );
    }
}
