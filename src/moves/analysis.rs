use super::run_lengths::RunLengths;
use super::straight_info::StraightInfo;
use crate::cards::Card;

/// Pre-computed analysis of a five-card move.
/// Built once and shared by all five-card detectors.
#[derive(Debug, Clone)]
pub struct MoveAnalysis {
    pub sorted_cards: [Card; 5],
    pub runs: RunLengths,
    /// All five cards share a suit.
    pub is_flush: bool,
    pub straight_info: StraightInfo,
}

impl MoveAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_unstable();

        let runs = RunLengths::from_sorted(&sorted_cards);
        let is_flush = sorted_cards.iter().all(|c| c.suit() == sorted_cards[0].suit());
        let straight_info = StraightInfo::detect(&sorted_cards);

        Self { sorted_cards, runs, is_flush, straight_info }
    }

    pub fn histogram_is(&self, expected: &[u8]) -> bool {
        self.runs.histogram() == expected
    }
}
