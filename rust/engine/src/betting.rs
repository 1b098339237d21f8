//! Betting round engine: blind posting, turn rotation, and the single
//! decision point where an externally supplied action is validated and
//! applied. The engine never decides WHAT a seat does, only whether the
//! request is legal and what it degrades to when it is not.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::action::{Action, Decision};
use crate::table::TableState;

/// One of the four betting stages of a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };
        f.write_str(s)
    }
}

/// What actually happened after validation and clamping. A requested raise
/// can come back as any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppliedAction {
    Folded,
    Checked,
    Called { paid: u32 },
    AllIn { paid: u32 },
    Raised { paid: u32, to: u32 },
}

impl AppliedAction {
    pub fn was_raise(&self) -> bool {
        matches!(self, AppliedAction::Raised { .. })
    }
}

impl fmt::Display for AppliedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppliedAction::Folded => write!(f, "FOLD"),
            AppliedAction::Checked => write!(f, "CHECK"),
            AppliedAction::Called { paid } => write!(f, "CALL for {}", paid),
            AppliedAction::AllIn { paid } => write!(f, "ALL-IN for {}", paid),
            AppliedAction::Raised { to, .. } => write!(f, "RAISE to {}", to),
        }
    }
}

/// One betting round as a sans-IO state machine: *awaiting seat N* →
/// `apply` → *round continues* or *round complete*. The caller (the hand
/// orchestrator) supplies each decision; this struct owns legality,
/// rotation, and termination.
#[derive(Debug)]
pub struct BettingRound {
    street: Street,
    to_act: usize,
    /// Seats still owed the right to act. A legal raise re-opens the round
    /// by resetting this to every contesting seat except the raiser; any
    /// other action decrements it. Zero means the round is over.
    remaining: usize,
}

impl BettingRound {
    /// Reset round state on the table and open a new round.
    ///
    /// `start_offset` is the first candidate seat, counted clockwise from
    /// the dealer (1 = seat after the dealer). When `post_blinds` is set the
    /// blinds are posted first (small blind on the next non-bust seat after
    /// the dealer, big blind after that) and action starts after the big
    /// blind instead of at the offset.
    ///
    /// Returns `None` when fewer than two seats can act; blinds already
    /// posted stay in the pot.
    pub fn open(
        table: &mut TableState,
        street: Street,
        start_offset: usize,
        post_blinds: bool,
    ) -> Option<Self> {
        table.begin_round();

        let mut start = (table.dealer() + start_offset) % table.seat_count();
        if post_blinds {
            let sb = table.next_unbusted(table.dealer())?;
            let bb = table.next_unbusted(sb)?;
            let (small, big) = table.blinds();
            let sb_paid = table.contribute(sb, small);
            let bb_paid = table.contribute(bb, big);
            table.set_current_bet(big);
            info!(street = %street, "{} posts small blind {}", table.seat(sb).name(), sb_paid);
            info!(street = %street, "{} posts big blind {}", table.seat(bb).name(), bb_paid);
            start = (bb + 1) % table.seat_count();
        }

        if table.contesting_count() <= 1 {
            return None;
        }

        let to_act = if table.seat(start).can_act() {
            start
        } else {
            table.next_seat_where(start, |s| s.can_act())?
        };

        Some(Self {
            street,
            to_act,
            remaining: table.contesting_count(),
        })
    }

    pub fn street(&self) -> Street {
        self.street
    }

    /// Seat currently awaiting action.
    pub fn actor(&self) -> usize {
        self.to_act
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Apply the acting seat's decision, advance the turn, and update the
    /// termination counter. Returns what was actually applied.
    pub fn apply(&mut self, table: &mut TableState, decision: Decision) -> AppliedAction {
        let seat = self.to_act;
        let applied = apply_action(table, seat, decision);
        info!(
            street = %self.street,
            pot = table.pot(),
            "{} ACTION - {}",
            table.seat(seat).name(),
            applied,
        );

        if applied.was_raise() {
            self.remaining = table
                .contesting()
                .into_iter()
                .filter(|&i| i != seat)
                .count();
        } else {
            self.remaining = self.remaining.saturating_sub(1);
        }

        // A fold can leave a single live seat; the hand is decided right
        // there, whatever the counter still owes.
        if table.in_hand().len() <= 1 {
            self.remaining = 0;
        }

        if self.remaining > 0 {
            match table.next_seat_where(seat, |s| s.can_act()) {
                Some(next) => self.to_act = next,
                // nobody left who can act; the round is over regardless of
                // what the counter still owes
                None => self.remaining = 0,
            }
        }
        applied
    }
}

/// Validate and apply one action for `seat` against the table. Illegal or
/// under-sized requests degrade to a call, a check, or an all-in, and never
/// error out of the hand.
pub fn apply_action(table: &mut TableState, seat: usize, decision: Decision) -> AppliedAction {
    table.seat_mut(seat).set_emotion(decision.emotion);

    match decision.action {
        Action::Fold => {
            table.seat_mut(seat).fold();
            AppliedAction::Folded
        }
        Action::Check | Action::Call => call_or_check(table, seat),
        Action::Raise => try_raise(table, seat, decision.amount),
    }
}

fn call_or_check(table: &mut TableState, seat: usize) -> AppliedAction {
    let outstanding = table.current_bet() - table.seat(seat).round_bet();
    if outstanding == 0 {
        return AppliedAction::Checked;
    }
    let paid = table.contribute(seat, outstanding);
    if table.seat(seat).chips() == 0 {
        AppliedAction::AllIn { paid }
    } else {
        AppliedAction::Called { paid }
    }
}

fn try_raise(table: &mut TableState, seat: usize, requested: u32) -> AppliedAction {
    let current_bet = table.current_bet();
    let to_call = current_bet - table.seat(seat).round_bet();
    let chips = table.seat(seat).chips();

    // No chips beyond the call: nothing to raise with.
    if chips <= to_call {
        return call_or_check(table, seat);
    }
    let capacity = chips - to_call;

    // A raise nobody could ever match is capped to what the shortest
    // contesting opponent still has behind.
    let shortest_opponent = table
        .contesting()
        .into_iter()
        .filter(|&i| i != seat)
        .map(|i| table.seat(i).chips())
        .min();
    let Some(shortest) = shortest_opponent else {
        return call_or_check(table, seat);
    };

    let cap = capacity.min(shortest);
    let extra = requested.max(table.min_raise()).min(cap);
    if extra < table.min_raise() {
        // Under-sized even after clamping: degrade to a plain call rather
        // than rejecting the action.
        return call_or_check(table, seat);
    }

    let paid = table.contribute(seat, to_call + extra);
    table.set_current_bet(current_bet + extra);
    table.set_min_raise(extra);
    AppliedAction::Raised {
        paid,
        to: current_bet + extra,
    }
}
