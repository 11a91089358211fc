use super::combinations::Combinations;
use super::compare::{compare_playable, sort_order};
use super::run_lengths::rank_groups;
use super::{HandType, Move, MoveError, MAX_MOVE_SIZE};
use crate::cards::Card;
use core::cmp::Ordering;

/// How many candidates to keep per size (or, for five-card moves, per hand type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum SelectionMode {
    /// Every candidate.
    #[default]
    All,
    /// Only the strongest candidate.
    HighestPerSize,
    /// Only the weakest candidate.
    LowestPerSize,
}

/// Parameters for [`valid_moves`].
///
/// ```
/// use president_rs::moves::{MoveQuery, SelectionMode};
///
/// let query = MoveQuery::new()
///     .with_previous("5h".parse().unwrap())
///     .with_selection(SelectionMode::LowestPerSize);
/// assert_eq!(query.previous().map(|m| m.len()), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveQuery {
    previous: Option<Move>,
    required: Option<Card>,
    selection: SelectionMode,
}

impl MoveQuery {
    /// Free choice: no previous move, no required card, every candidate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates must beat `previous` and match its size.
    pub fn with_previous(mut self, previous: Move) -> Self {
        self.previous = Some(previous);
        self
    }

    /// Candidates must contain `card` (first move of a round).
    /// Ignored when a previous move is set.
    pub fn with_required(mut self, card: Card) -> Self {
        self.required = Some(card);
        self
    }

    pub fn with_selection(mut self, selection: SelectionMode) -> Self {
        self.selection = selection;
        self
    }

    pub fn previous(&self) -> Option<&Move> {
        self.previous.as_ref()
    }

    pub fn required(&self) -> Option<Card> {
        self.required
    }

    pub fn selection(&self) -> SelectionMode {
        self.selection
    }
}

/// Enumerate every legal move that can be made from `cards` under `query`.
///
/// With a previous move the result holds only same-size moves that beat it,
/// weakest first. Without one the result is grouped by hand type, strongest type
/// first, each group weakest first. An empty result means the player must pass.
///
/// Errors only when the previous move itself is empty or scattered.
///
/// ```
/// use president_rs::cards::parse_cards;
/// use president_rs::moves::{valid_moves, HandType, MoveQuery};
///
/// let hand = parse_cards("3d 3c 4d").unwrap();
/// let moves = valid_moves(&hand, &MoveQuery::new()).unwrap();
/// assert_eq!(moves[0].hand_type(), HandType::Pair);
/// assert_eq!(moves.len(), 4);
///
/// let query = MoveQuery::new().with_previous("3h".parse().unwrap());
/// let moves = valid_moves(&hand, &query).unwrap();
/// assert_eq!(moves.len(), 1); // only 4d beats 3h
/// ```
pub fn valid_moves(cards: &[Card], query: &MoveQuery) -> Result<Vec<Move>, MoveError> {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();

    if let Some(previous) = query.previous() {
        if sorted.len() < previous.len() {
            return Ok(Vec::new());
        }
        if sorted.len() == previous.len() {
            let whole = Move::from_sorted(sorted);
            if whole.hand_type().is_playable() && whole.beats(previous)? {
                return Ok(vec![whole]);
            }
            return Ok(Vec::new());
        }
        if !previous.hand_type().is_playable() {
            return Err(MoveError::InvalidComparison {
                left: HandType::Empty,
                right: previous.hand_type(),
            });
        }
    }

    let sizes = match query.previous() {
        Some(previous) => previous.len()..=previous.len(),
        None => 1..=MAX_MOVE_SIZE,
    };

    let mut moves = Vec::new();
    for size in sizes {
        match size {
            1 => select_into(singles(&sorted), query, &mut moves)?,
            2 => select_into(same_rank::<2>(&sorted), query, &mut moves)?,
            3 => select_into(same_rank::<3>(&sorted), query, &mut moves)?,
            4 => select_into(same_rank::<4>(&sorted), query, &mut moves)?,
            5 => select_into(five_card(&sorted), query, &mut moves)?,
            _ => {}
        }
    }

    if query.previous().is_some() {
        moves.sort_by(sort_order);
    } else {
        moves.sort_by(|a, b| b.hand_type().cmp(&a.hand_type()).then_with(|| sort_order(a, b)));
    }

    log::trace!("{} valid move(s) from {} card(s)", moves.len(), cards.len());
    Ok(moves)
}

fn singles(sorted: &[Card]) -> impl Iterator<Item = Move> + '_ {
    sorted.iter().map(|&card| Move::single(card))
}

/// Every `K`-card subset of each same-rank group.
fn same_rank<const K: usize>(sorted: &[Card]) -> impl Iterator<Item = Move> + '_ {
    rank_groups(sorted).into_iter().filter(|group| group.len() >= K).flat_map(|group| {
        Combinations::<K>::new(group.len())
            .map(move |idx| Move::from_sorted(idx.iter().map(|&i| group[i]).collect()))
    })
}

/// Every classified five-card subset; scattered ones are dropped as they are produced.
fn five_card(sorted: &[Card]) -> impl Iterator<Item = Move> + '_ {
    Combinations::<5>::new(sorted.len())
        .map(move |idx| Move::from_sorted(idx.iter().map(|&i| sorted[i]).collect()))
        .filter(|m| m.hand_type() != HandType::Scattered)
}

/// Apply the selection mode, then the previous-move or required-card filter.
fn select_into<I>(candidates: I, query: &MoveQuery, out: &mut Vec<Move>) -> Result<(), MoveError>
where
    I: Iterator<Item = Move>,
{
    let wanted = match query.selection() {
        SelectionMode::All => None,
        SelectionMode::HighestPerSize => Some(Ordering::Greater),
        SelectionMode::LowestPerSize => Some(Ordering::Less),
    };

    let Some(wanted) = wanted else {
        for candidate in candidates {
            if admits(query, &candidate)? {
                out.push(candidate);
            }
        }
        return Ok(());
    };

    // one pick per hand type; sizes 1..=4 only ever produce a single type
    let mut picks: Vec<Move> = Vec::new();
    for candidate in candidates {
        match picks.iter_mut().find(|p| p.hand_type() == candidate.hand_type()) {
            Some(slot) => {
                if compare_playable(&candidate, slot) == wanted {
                    *slot = candidate;
                }
            }
            None => picks.push(candidate),
        }
    }
    for pick in picks {
        if admits(query, &pick)? {
            out.push(pick);
        }
    }
    Ok(())
}

fn admits(query: &MoveQuery, candidate: &Move) -> Result<bool, MoveError> {
    if let Some(previous) = query.previous() {
        return candidate.beats(previous);
    }
    Ok(query.required().map_or(true, |card| candidate.contains(card)))
}
