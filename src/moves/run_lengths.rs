use crate::cards::{Card, Rank};

/// Runs of equal rank in a rank-sorted card slice, in ascending rank order.
///
/// Example: 4d 4c 4h 9d 9s has runs [(Four, 3), (Nine, 2)] and histogram [3, 2].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLengths {
    runs: Vec<(Rank, u8)>,
}

impl RunLengths {
    /// `cards` must already be sorted by rank.
    pub fn from_sorted(cards: &[Card]) -> Self {
        let mut runs: Vec<(Rank, u8)> = Vec::with_capacity(cards.len());
        for card in cards {
            match runs.last_mut() {
                Some((rank, count)) if *rank == card.rank() => *count += 1,
                _ => runs.push((card.rank(), 1)),
            }
        }
        Self { runs }
    }

    /// Run lengths, longest first.
    pub fn histogram(&self) -> Vec<u8> {
        let mut counts: Vec<u8> = self.runs.iter().map(|(_, c)| *c).collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts
    }

    pub fn is_single_run(&self) -> bool {
        self.runs.len() == 1
    }

    /// The rank that occurs exactly `len` times, if any.
    pub fn rank_with_len(&self, len: u8) -> Option<Rank> {
        self.runs.iter().find(|(_, c)| *c == len).map(|(r, _)| *r)
    }
}

/// Split a rank-sorted slice into same-rank groups.
pub fn rank_groups(sorted: &[Card]) -> Vec<&[Card]> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..=sorted.len() {
        if i == sorted.len() || sorted[i].rank() != sorted[start].rank() {
            if i > start {
                groups.push(&sorted[start..i]);
            }
            start = i;
        }
    }
    groups
}

/// The card at which a run first reaches `len` cards, scanning a rank-sorted slice.
/// For a full house with `len = 3` this is the top card of the triple.
pub fn major_card(sorted: &[Card], len: u8) -> Option<Card> {
    let mut run = 0u8;
    let mut prev: Option<Rank> = None;
    for card in sorted {
        run = if prev == Some(card.rank()) { run + 1 } else { 1 };
        prev = Some(card.rank());
        if run == len {
            return Some(*card);
        }
    }
    None
}
