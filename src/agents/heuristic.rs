use crate::cards::Card;
use crate::hand::{CardSource, Hand};
use crate::moves::{Move, MoveQuery};
use core::cmp::Ordering;

use super::{
    ensure_enough, option_profile_cmp, DecideError, DeciderKind, Decision, MoveDecider, Turn,
};

/// Tuning for the [`Heuristic`] bot.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct HeuristicProfile {
    /// Also run the one-ply search when leading. Off by default: the bot then
    /// opens with the first option offered.
    pub greedy_lead: bool,
}

impl HeuristicProfile {
    pub fn with_greedy_lead(mut self, greedy_lead: bool) -> Self {
        self.greedy_lead = greedy_lead;
        self
    }
}

/// Greedy one-ply bot: plays the move that leaves the strongest set of
/// follow-up options, and gives away the cards it misses least.
#[derive(Debug, Clone, Default)]
pub struct Heuristic {
    profile: HeuristicProfile,
}

impl Heuristic {
    pub fn new(profile: HeuristicProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &HeuristicProfile {
        &self.profile
    }
}

/// Free-choice options left in `hand` once `played` is gone.
fn options_after<S>(hand: &Hand, played: &S) -> Result<Vec<Move>, DecideError>
where
    S: CardSource + ?Sized,
{
    let rest = hand.subtract(played)?;
    Ok(rest.valid_moves(&MoveQuery::new())?)
}

impl MoveDecider for Heuristic {
    fn decide(&mut self, turn: &Turn<'_>) -> Result<Decision, DecideError> {
        if turn.options.is_empty() {
            return turn.forced();
        }
        if turn.previous.is_none() && !self.profile.greedy_lead {
            return Ok(Decision::Play(0));
        }

        let mut best = 0;
        let mut best_left = options_after(turn.hand, &turn.options[0])?;
        for (i, option) in turn.options.iter().enumerate().skip(1) {
            let left = options_after(turn.hand, option)?;
            if option_profile_cmp(&left, &best_left) == Ordering::Greater {
                best = i;
                best_left = left;
            }
        }
        log::debug!(
            "heuristic picked option {best} of {}: {}",
            turn.options.len(),
            turn.options[best]
        );
        Ok(Decision::Play(best))
    }

    fn choose_cards(&mut self, hand: &Hand, count: usize) -> Result<Vec<Card>, DecideError> {
        ensure_enough(hand, count)?;
        let mut scored = Vec::with_capacity(hand.len());
        for &card in hand {
            scored.push((card, options_after(hand, &card)?));
        }
        // stable: on equal profiles the card seen first is given first
        scored.sort_by(|(_, a), (_, b)| option_profile_cmp(b, a));
        Ok(scored.into_iter().take(count).map(|(card, _)| card).collect())
    }

    fn kind(&self) -> DeciderKind {
        DeciderKind::Bot
    }
}
