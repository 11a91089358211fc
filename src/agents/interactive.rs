use crate::cards::Card;
use crate::hand::Hand;
use std::io::{self, BufRead, Write};

use super::{ensure_enough, DecideError, DeciderKind, Decision, MoveDecider, Turn};

/// A human at a terminal. Options are listed 1-based; `0` passes when passing
/// is allowed. Bad input re-prompts; end of input is an error.
///
/// ```
/// use president_rs::agents::{Decision, Interactive, MoveDecider, Turn};
/// use president_rs::hand::Hand;
/// use president_rs::moves::MoveQuery;
///
/// let hand: Hand = "3d 4c".parse().unwrap();
/// let options = hand.valid_moves(&MoveQuery::new()).unwrap();
/// let mut human = Interactive::new("nope\n2\n".as_bytes(), Vec::new());
/// let choice = human.decide(&Turn::new(&hand, &options)).unwrap();
/// assert_eq!(choice, Decision::Play(1));
/// ```
#[derive(Debug)]
pub struct Interactive<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Read numbers until one lands in `lo..=hi`.
    fn read_choice(&mut self, lo: usize, hi: usize) -> Result<usize, DecideError> {
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
            }
            match line.trim().parse::<usize>() {
                Ok(n) if (lo..=hi).contains(&n) => return Ok(n),
                _ => writeln!(self.output, "Please enter a number from {lo} to {hi}.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> MoveDecider for Interactive<R, W> {
    fn decide(&mut self, turn: &Turn<'_>) -> Result<Decision, DecideError> {
        if turn.options.is_empty() {
            return turn.forced();
        }
        writeln!(self.output, "Your hand: {}", turn.hand)?;
        if let Some(previous) = turn.previous {
            writeln!(self.output, "To beat: {previous}")?;
        }
        if turn.can_pass {
            writeln!(self.output, "  0) pass")?;
        }
        for (i, option) in turn.options.iter().enumerate() {
            writeln!(self.output, "  {}) {option}", i + 1)?;
        }
        let lo = if turn.can_pass { 0 } else { 1 };
        match self.read_choice(lo, turn.options.len())? {
            0 => Ok(Decision::Pass),
            n => Ok(Decision::Play(n - 1)),
        }
    }

    fn choose_cards(&mut self, hand: &Hand, count: usize) -> Result<Vec<Card>, DecideError> {
        ensure_enough(hand, count)?;
        let cards = hand.sorted();
        writeln!(self.output, "Choose {count} card(s) to give away:")?;
        for (i, card) in cards.iter().enumerate() {
            writeln!(self.output, "  {}) {card}", i + 1)?;
        }
        let mut chosen: Vec<Card> = Vec::with_capacity(count);
        while chosen.len() < count {
            let card = cards[self.read_choice(1, cards.len())? - 1];
            if chosen.contains(&card) {
                writeln!(self.output, "Cards must be different!")?;
                continue;
            }
            chosen.push(card);
        }
        Ok(chosen)
    }

    fn kind(&self) -> DeciderKind {
        DeciderKind::Human
    }
}
