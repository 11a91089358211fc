//! president-rs: rules engine for the President shedding card game
//!
//! Goals:
//! - Classify, compare and enumerate legal moves for a 52-card deck where 3 is low and 2 is high
//! - Deterministic results: every enumeration comes back in a stable order
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: what can I play?
//! ```
//! use president_rs::hand::Hand;
//! use president_rs::moves::{HandType, Move, MoveQuery};
//!
//! let hand: Hand = "3d 3c 4h 5s 6d 7c 9h".parse().unwrap();
//!
//! // leading: everything, strongest hand type first
//! let moves = hand.valid_moves(&MoveQuery::new()).unwrap();
//! assert_eq!(moves[0].hand_type(), HandType::Straight);
//!
//! // following a pair of 3s: only bigger pairs, and there are none
//! let table: Move = "3h 3s".parse().unwrap();
//! let moves = hand.valid_moves(&MoveQuery::new().with_previous(table)).unwrap();
//! assert!(moves.is_empty());
//! ```
//!
//! ## Dealing
//! ```
//! use president_rs::deck::Deck;
//!
//! let mut deck = Deck::standard();
//! deck.shuffle_seeded(2024);
//! let deal = deck.deal(4).unwrap();
//! let (leader, card) = deal.leader().unwrap();
//! assert!(deal.hands[leader].contains(card));
//! ```

pub mod agents;
pub mod cards;
pub mod deck;
pub mod hand;
pub mod moves;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
