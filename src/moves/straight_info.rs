use crate::cards::Card;

/// Whether five cards form a straight under the house rules.
///
/// A straight is five consecutive faces starting anywhere from Ace (A-2-3-4-5)
/// up to Ten (10-J-Q-K-A). The Ace may follow the King, but a run may not start
/// on J, Q or K, so J-Q-K-A-2, Q-K-A-2-3 and K-A-2-3-4 are not straights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    /// Face value (1..=10) of the card the run starts on.
    pub start_face: Option<u8>,
}

impl StraightInfo {
    /// Input can be in any order.
    pub fn detect(cards: &[Card; 5]) -> Self {
        let mut faces = cards.map(|c| c.rank().face());
        faces.sort_unstable();

        if faces.windows(2).all(|w| w[1] == w[0] + 1) {
            // highest possible start is 9 here (9..=K), never J/Q/K
            return StraightInfo { is_straight: true, start_face: Some(faces[0]) };
        }

        // Ace continues after King
        if faces == [1, 10, 11, 12, 13] {
            return StraightInfo { is_straight: true, start_face: Some(10) };
        }

        StraightInfo { is_straight: false, start_face: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn five(s: &str) -> [Card; 5] {
        let cards = parse_cards(s).unwrap();
        [cards[0], cards[1], cards[2], cards[3], cards[4]]
    }

    #[test]
    fn low_run() {
        let info = StraightInfo::detect(&five("3d 4c 5h 6s 7d"));
        assert!(info.is_straight);
        assert_eq!(info.start_face, Some(3));
    }

    #[test]
    fn ace_and_two_start_low() {
        assert_eq!(StraightInfo::detect(&five("Ad 2c 3h 4s 5d")).start_face, Some(1));
        assert_eq!(StraightInfo::detect(&five("2c 3h 4s 5d 6d")).start_face, Some(2));
    }

    #[test]
    fn ace_follows_king() {
        let info = StraightInfo::detect(&five("Td Jc Qh Ks Ad"));
        assert!(info.is_straight);
        assert_eq!(info.start_face, Some(10));
    }

    #[test]
    fn runs_starting_on_face_cards_are_rejected() {
        assert!(!StraightInfo::detect(&five("Jd Qc Kh As 2d")).is_straight);
        assert!(!StraightInfo::detect(&five("Qd Kc Ah 2s 3d")).is_straight);
        assert!(!StraightInfo::detect(&five("Kd Ac 2h 3s 4d")).is_straight);
    }

    #[test]
    fn gaps_and_pairs_are_not_straights() {
        assert!(!StraightInfo::detect(&five("3d 4c 5h 6s 8d")).is_straight);
        assert!(!StraightInfo::detect(&five("3d 3c 4h 5s 6d")).is_straight);
    }

    #[test]
    fn unsorted_input() {
        assert!(StraightInfo::detect(&five("9d Kc Th Js Qd")).is_straight);
    }
}
