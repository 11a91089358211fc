use president_rs::cards::{parse_cards, Card, Rank, Suit};
use president_rs::moves::{classify, HandType, Move};

fn kind(s: &str) -> HandType {
    classify(&parse_cards(s).unwrap())
}

#[test]
fn category_same_rank_groups() {
    assert_eq!(kind("3d"), HandType::OneCard);
    assert_eq!(kind("9c 9s"), HandType::Pair);
    assert_eq!(kind("3d 3c 3h"), HandType::ThreeOfAKind);
    assert_eq!(kind("2d 2c 2h 2s"), HandType::FourOfAKind);
    assert_eq!(kind("3d 4d"), HandType::Scattered);
    assert_eq!(kind("Kd Kc Ks Ad"), HandType::Scattered);
}

#[test]
fn category_straight_flush() {
    let xs = [
        Card::new(Rank::Three, Suit::Diamonds),
        Card::new(Rank::Four, Suit::Diamonds),
        Card::new(Rank::Five, Suit::Diamonds),
        Card::new(Rank::Six, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Diamonds),
    ];
    assert_eq!(classify(&xs), HandType::StraightFlush);
}

#[test]
fn category_full_house() {
    assert_eq!(kind("4d 4c 4h 9s 9d"), HandType::FullHouse);
    assert_eq!(kind("2d 2c Ah As 2s"), HandType::FullHouse);
}

#[test]
fn category_four_of_a_kind_plus_one() {
    let xs = [
        Card::new(Rank::Two, Suit::Diamonds),
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Two, Suit::Spades),
        Card::new(Rank::Nine, Suit::Diamonds),
    ];
    assert_eq!(classify(&xs), HandType::FourOfAKindPlusOne);
}

#[test]
fn category_flush_and_straight() {
    assert_eq!(kind("3h 8h Th Qh 2h"), HandType::Flush);
    assert_eq!(kind("3d 4c 5h 6s 7d"), HandType::Straight);
    assert_eq!(kind("Td Jc Qh Ks Ad"), HandType::Straight);
    assert_eq!(kind("Ad 2c 3h 4s 5d"), HandType::Straight);
    assert_eq!(kind("2d 3c 4h 5s 6d"), HandType::Straight);
}

#[test]
fn straights_may_not_start_on_a_face_card() {
    assert_eq!(kind("Jd Qc Kh As 2d"), HandType::Scattered);
    assert_eq!(kind("Qd Kc Ah 2s 3d"), HandType::Scattered);
    assert_eq!(kind("Kd Ac 2h 3s 4d"), HandType::Scattered);
    assert_eq!(kind("Jh Qh Kh Ah 2h"), HandType::Flush);
}

#[test]
fn category_scattered() {
    assert_eq!(kind("3d 4c 5h 6s 8d"), HandType::Scattered);
    assert_eq!(kind("3d 3c 4h 4s 9d"), HandType::Scattered);
    assert_eq!(kind("3d 3c 3h 4s 5s 6s"), HandType::Scattered);
    assert_eq!(kind(""), HandType::Empty);
}

#[test]
fn classification_ignores_card_order() {
    let samples = ["4d 4c 4h 9s 9d", "Ad 2c 3h 4s 5d", "3h 8h Th Qh 2h", "3d 4c 5h 6s 8d"];
    for s in samples {
        let mut cards = parse_cards(s).unwrap();
        let expected = classify(&cards);
        for _ in 0..cards.len() {
            cards.rotate_left(1);
            assert_eq!(classify(&cards), expected, "{s}");
            cards.swap(0, 3);
            assert_eq!(classify(&cards), expected, "{s}");
        }
    }
}

#[test]
fn moves_carry_their_classification() {
    let m: Move = "9s 9d 4d 4c 4h".parse().unwrap();
    assert_eq!(m.hand_type(), HandType::FullHouse);
    assert_eq!(m.cards()[0], Card::new(Rank::Four, Suit::Diamonds));
    assert_eq!(m.highest(), Some(Card::new(Rank::Nine, Suit::Spades)));
    assert_eq!(HandType::FullHouse.to_string(), "Full House");
}
