use super::analysis::MoveAnalysis;
use super::HandType;

/// Strategy pattern: each detector recognizes one five-card hand type.
pub trait FiveCardDetector {
    fn detect(&self, analysis: &MoveAnalysis) -> bool;
    fn hand_type(&self) -> HandType;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: a straight whose cards all share one suit
pub struct StraightFlushDetector;

impl FiveCardDetector for StraightFlushDetector {
    fn detect(&self, analysis: &MoveAnalysis) -> bool {
        analysis.is_flush && analysis.straight_info.is_straight
    }

    fn hand_type(&self) -> HandType {
        HandType::StraightFlush
    }
}

/// Four of a Kind Plus One: four cards of one rank and a single other card
pub struct FourPlusOneDetector;

impl FiveCardDetector for FourPlusOneDetector {
    fn detect(&self, analysis: &MoveAnalysis) -> bool {
        analysis.histogram_is(&[4, 1])
    }

    fn hand_type(&self) -> HandType {
        HandType::FourOfAKindPlusOne
    }
}

/// Full House: three of a kind plus a pair
pub struct FullHouseDetector;

impl FiveCardDetector for FullHouseDetector {
    fn detect(&self, analysis: &MoveAnalysis) -> bool {
        analysis.histogram_is(&[3, 2])
    }

    fn hand_type(&self) -> HandType {
        HandType::FullHouse
    }
}

/// Flush: all five cards of the same suit
pub struct FlushDetector;

impl FiveCardDetector for FlushDetector {
    fn detect(&self, analysis: &MoveAnalysis) -> bool {
        analysis.is_flush
    }

    fn hand_type(&self) -> HandType {
        HandType::Flush
    }
}

/// Straight: five consecutive faces, mixed suits
pub struct StraightDetector;

impl FiveCardDetector for StraightDetector {
    fn detect(&self, analysis: &MoveAnalysis) -> bool {
        analysis.straight_info.is_straight
    }

    fn hand_type(&self) -> HandType {
        HandType::Straight
    }
}

pub const DETECTORS: [&dyn FiveCardDetector; 5] = [
    &StraightFlushDetector,
    &FourPlusOneDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
];

/// Hand type of five cards; `Scattered` when no detector matches.
pub fn detect_five(analysis: &MoveAnalysis) -> HandType {
    DETECTORS
        .iter()
        .find(|d| d.detect(analysis))
        .map_or(HandType::Scattered, |d| d.hand_type())
}
