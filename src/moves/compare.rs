use super::run_lengths::major_card;
use super::{HandType, Move, MoveError};
use crate::cards::{Card, Rank};
use core::cmp::Ordering;

/// Order two playable moves.
///
/// A higher hand type always wins. Within a type:
/// - one card / pair / three / four of a kind: the rank, then the suit of the
///   lowest-suited card;
/// - full house / four of a kind plus one: the top card of the triple or quad;
/// - straight / straight flush: the highest card's rank; when both top out on a 2,
///   the second-highest rank decides unless those share a face, then the 2s' suits;
///   otherwise the highest card's suit;
/// - flush: ranks from highest to lowest, then the lowest card's suit.
///
/// Comparing an empty or scattered move is an error.
///
/// ```
/// use president_rs::moves::{compare_moves, Move};
/// use std::cmp::Ordering;
///
/// let flush: Move = "3h 8h Th Qh 2h".parse().unwrap();
/// let pair: Move = "2d 2s".parse().unwrap();
/// assert_eq!(compare_moves(&flush, &pair).unwrap(), Ordering::Greater);
/// ```
pub fn compare_moves(a: &Move, b: &Move) -> Result<Ordering, MoveError> {
    if !a.hand_type().is_playable() || !b.hand_type().is_playable() {
        return Err(MoveError::InvalidComparison { left: a.hand_type(), right: b.hand_type() });
    }
    Ok(compare_playable(a, b))
}

/// Same rules as [`compare_moves`] without the playability check.
pub(crate) fn compare_playable(a: &Move, b: &Move) -> Ordering {
    if a.hand_type() != b.hand_type() {
        return a.hand_type().cmp(&b.hand_type());
    }
    let (x, y) = (a.cards(), b.cards());
    match a.hand_type() {
        HandType::OneCard | HandType::Pair | HandType::ThreeOfAKind | HandType::FourOfAKind => {
            x.first().cmp(&y.first())
        }
        HandType::FullHouse => major_card(x, 3).cmp(&major_card(y, 3)),
        HandType::FourOfAKindPlusOne => major_card(x, 4).cmp(&major_card(y, 4)),
        HandType::Straight | HandType::StraightFlush => compare_straights(x, y),
        HandType::Flush | HandType::Empty | HandType::Scattered => compare_high_to_low(x, y),
    }
}

fn compare_straights(x: &[Card], y: &[Card]) -> Ordering {
    let (Some(&hx), Some(&hy)) = (x.last(), y.last()) else {
        return x.len().cmp(&y.len());
    };
    if hx.rank() != hy.rank() {
        return hx.rank().cmp(&hy.rank());
    }
    if hx.rank() == Rank::Two && x.len() > 1 && y.len() > 1 {
        let (nx, ny) = (x[x.len() - 2], y[y.len() - 2]);
        if nx.rank().face() != ny.rank().face() {
            return nx.rank().cmp(&ny.rank());
        }
    }
    hx.suit().cmp(&hy.suit())
}

fn compare_high_to_low(x: &[Card], y: &[Card]) -> Ordering {
    for (cx, cy) in x.iter().rev().zip(y.iter().rev()) {
        let ord = cx.rank().cmp(&cy.rank());
        if ord != Ordering::Equal {
            return ord;
        }
    }
    match (x.first(), y.first()) {
        (Some(lx), Some(ly)) => lx.suit().cmp(&ly.suit()),
        _ => x.len().cmp(&y.len()),
    }
}

/// Total order used for sorting: the move rules, then the cards themselves so that
/// distinct moves never compare equal.
pub(crate) fn sort_order(a: &Move, b: &Move) -> Ordering {
    compare_playable(a, b).then_with(|| a.cards().cmp(b.cards()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(s: &str) -> Move {
        s.parse().expect("valid move")
    }

    fn cmp(a: &str, b: &str) -> Ordering {
        compare_moves(&mv(a), &mv(b)).unwrap()
    }

    #[test]
    fn higher_type_wins_regardless_of_values() {
        assert_eq!(cmp("3d 4d 5d 6d 7d", "2d 2c 2h 2s Ad"), Ordering::Greater);
        assert_eq!(cmp("3d 3c 3h 3s 4d", "Ad Ac Ah 2s 2d"), Ordering::Greater);
        assert_eq!(cmp("3d 3c 3h 4s 4d", "4h 8h Th Qh 2h"), Ordering::Greater);
        assert_eq!(cmp("3d 5d 7d 9d Jd", "Td Jc Qh Ks Ad"), Ordering::Greater);
        assert_eq!(cmp("3d 4c 5h 6s 7d", "2d 2c 2h 2s"), Ordering::Greater);
        assert_eq!(cmp("3d 3c 3h 3s", "2d 2c 2h"), Ordering::Greater);
        assert_eq!(cmp("3d 3c", "2s"), Ordering::Greater);
    }

    #[test]
    fn same_value_singles_and_pairs_use_suit() {
        assert_eq!(cmp("3h", "3c"), Ordering::Greater);
        assert_eq!(cmp("3d", "3h"), Ordering::Less);
        assert_eq!(cmp("9d 9s", "9c 9h"), Ordering::Less);
        assert_eq!(cmp("9c 9h", "9d 9s"), Ordering::Greater);
        assert_eq!(cmp("9d 9h", "9d 9s"), Ordering::Equal);
        assert_eq!(cmp("Kd Kc Kh", "Kc Kh Ks"), Ordering::Less);
        assert_eq!(cmp("2d", "As"), Ordering::Greater);
    }

    #[test]
    fn full_house_compares_the_triple_only() {
        assert_eq!(cmp("4d 4c 4h 2s 2d", "5d 5c 5h 3s 3d"), Ordering::Less);
        assert_eq!(cmp("Kd Kc Kh 3s 3d", "Qd Qc Qh As Ad"), Ordering::Greater);
        assert_eq!(cmp("3d 3c 3h 3s Kd", "4d 4c 4h 4s 5d"), Ordering::Less);
    }

    #[test]
    fn straights_compare_highest_card() {
        assert_eq!(cmp("4d 5c 6h 7s 8d", "3d 4c 5h 6s 7h"), Ordering::Greater);
        assert_eq!(cmp("3d 4c 5h 6s 7h", "3c 4h 5s 6d 7d"), Ordering::Greater);
        assert_eq!(cmp("Td Jc Qh Ks Ad", "9d Tc Jh Qs Kd"), Ordering::Greater);
    }

    #[test]
    fn straights_topped_by_a_two() {
        // A-2-3-4-5 vs 2-3-4-5-6: both top out on a 2, the Ace outranks the 6
        assert_eq!(cmp("Ad 2c 3h 4s 5d", "2d 3c 4h 5s 6d"), Ordering::Greater);
        // same shape: the 2s' suits decide
        assert_eq!(cmp("Ad 2s 3h 4s 5d", "Ac 2h 3d 4c 5c"), Ordering::Greater);
        // any 2-topped straight beats an Ace-topped one
        assert_eq!(cmp("2d 3c 4h 5s 6d", "Td Jc Qh Ks As"), Ordering::Greater);
    }

    #[test]
    fn flushes_compare_high_to_low() {
        assert_eq!(cmp("3h 8h Th Qh 2h", "4d 8d Td Qd Ad"), Ordering::Greater);
        assert_eq!(cmp("3h 8h Th Qh Ah", "4d 8d Td Qd Ad"), Ordering::Less);
        assert_eq!(cmp("3s 8s Ts Qs As", "3h 8h Th Qh Ah"), Ordering::Greater);
    }

    #[test]
    fn unplayable_moves_cannot_be_compared() {
        let err = compare_moves(&mv("3d 4c"), &mv("5h")).unwrap_err();
        assert_eq!(
            err,
            MoveError::InvalidComparison { left: HandType::Scattered, right: HandType::OneCard }
        );
        assert!(compare_moves(&mv("5h"), &mv("")).is_err());
    }

    #[test]
    fn sort_order_separates_equal_strength_moves() {
        let a = mv("3d 4d 5d 6d 7s");
        let b = mv("3c 4d 5d 6d 7s");
        assert_eq!(compare_playable(&a, &b), Ordering::Equal);
        assert_ne!(sort_order(&a, &b), Ordering::Equal);
        assert_eq!(sort_order(&a, &b), sort_order(&b, &a).reverse());
    }
}
