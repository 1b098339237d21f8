use serde::{Deserialize, Serialize};

use crate::action::Emotion;
use crate::cards::Card;
use crate::seat::Seat;

/// A pot slice produced at showdown: an amount and the seats eligible to
/// win it. Never persisted beyond the hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotSlice {
    pub amount: u32,
    pub eligible: Vec<usize>,
}

/// Chip and card state for one table over one hand.
///
/// All mutation goes through the betting round engine and the hand
/// orchestrator; everything external reads [`TableView`] snapshots.
/// Contributions are kept in a plain vector indexed by seat position.
#[derive(Debug, Clone)]
pub struct TableState {
    seats: Vec<Seat>,
    dealer: usize,
    small_blind: u32,
    big_blind: u32,
    pot: u32,
    current_bet: u32,
    min_raise: u32,
    board: Vec<Card>,
    contributions: Vec<u32>,
}

impl TableState {
    pub fn new(seats: Vec<Seat>, small_blind: u32, big_blind: u32) -> Self {
        let n = seats.len();
        Self {
            seats,
            dealer: 0,
            small_blind,
            big_blind,
            pot: 0,
            current_bet: 0,
            min_raise: big_blind,
            board: Vec::with_capacity(5),
            contributions: vec![0; n],
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, i: usize) -> &Seat {
        &self.seats[i]
    }
    pub(crate) fn seat_mut(&mut self, i: usize) -> &mut Seat {
        &mut self.seats[i]
    }
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    /// Amount a fresh entrant would owe; always equals `current_bet`.
    pub fn to_call(&self) -> u32 {
        self.current_bet
    }
    pub fn min_raise(&self) -> u32 {
        self.min_raise
    }
    pub fn blinds(&self) -> (u32, u32) {
        (self.small_blind, self.big_blind)
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn contribution(&self, i: usize) -> u32 {
        self.contributions[i]
    }

    pub(crate) fn set_current_bet(&mut self, bet: u32) {
        self.current_bet = bet;
    }
    pub(crate) fn set_min_raise(&mut self, raise: u32) {
        self.min_raise = raise;
    }

    pub(crate) fn push_board_card(&mut self, c: Card) {
        debug_assert!(self.board.len() < 5);
        self.board.push(c);
    }

    /// Seats still owed a turn: in hand with chips behind.
    pub fn contesting(&self) -> Vec<usize> {
        (0..self.seats.len())
            .filter(|&i| self.seats[i].can_act())
            .collect()
    }

    pub fn contesting_count(&self) -> usize {
        self.seats.iter().filter(|s| s.can_act()).count()
    }

    /// Seats still eligible for the pot (all-in seats included).
    pub fn in_hand(&self) -> Vec<usize> {
        (0..self.seats.len())
            .filter(|&i| self.seats[i].in_hand())
            .collect()
    }

    /// Next seat clockwise of `from` (exclusive) satisfying `pred`, if any
    /// exists within one full lap.
    pub(crate) fn next_seat_where<F>(&self, from: usize, pred: F) -> Option<usize>
    where
        F: Fn(&Seat) -> bool,
    {
        let n = self.seats.len();
        (1..=n).map(|k| (from + k) % n).find(|&i| pred(&self.seats[i]))
    }

    /// Next non-bust seat clockwise of `from`; used for blind positions and
    /// button advancement.
    pub(crate) fn next_unbusted(&self, from: usize) -> Option<usize> {
        self.next_seat_where(from, |s| !s.busted())
    }

    /// Move chips from a seat into the pot, tracking the per-seat hand
    /// contribution. Returns what was actually paid (capped at the stack).
    pub(crate) fn contribute(&mut self, seat: usize, amount: u32) -> u32 {
        let paid = self.seats[seat].commit(amount);
        self.pot += paid;
        self.contributions[seat] += paid;
        paid
    }

    /// Pay out a resolved slice; the pot shrinks by exactly the award.
    pub(crate) fn award(&mut self, seat: usize, amount: u32) {
        debug_assert!(amount <= self.pot, "award exceeds pot");
        self.pot -= amount;
        self.seats[seat].add_chips(amount);
    }

    /// Reset per-round state: round bets, the bet to match, and the
    /// minimum raise increment (back to the big blind).
    pub(crate) fn begin_round(&mut self) {
        for s in &mut self.seats {
            s.reset_for_round();
        }
        self.current_bet = 0;
        self.min_raise = self.big_blind;
    }

    /// Clear hand-scoped state. Chip stacks and bust flags persist.
    pub(crate) fn begin_hand(&mut self) {
        for s in &mut self.seats {
            s.reset_for_hand();
        }
        self.board.clear();
        self.contributions.iter_mut().for_each(|c| *c = 0);
        self.pot = 0;
        self.current_bet = 0;
        self.min_raise = self.big_blind;
    }

    pub(crate) fn advance_dealer(&mut self) {
        if let Some(next) = self.next_unbusted(self.dealer) {
            self.dealer = next;
        }
    }

    /// Test support: mutable seat access for dealing fixed cards.
    #[doc(hidden)]
    pub fn seat_mut_for_test(&mut self, i: usize) -> &mut Seat {
        &mut self.seats[i]
    }

    /// Test support: force per-seat contributions (and the matching pot)
    /// without running a betting round.
    #[doc(hidden)]
    pub fn set_contributions_for_test(&mut self, amounts: &[u32]) {
        assert_eq!(amounts.len(), self.seats.len());
        self.contributions.copy_from_slice(amounts);
        self.pot = amounts.iter().sum();
    }

    /// Test support: fold a seat directly.
    #[doc(hidden)]
    pub fn fold_for_test(&mut self, seat: usize) {
        self.seats[seat].fold();
    }

    /// Slice the pot by distinct contribution level, ascending.
    ///
    /// For each level L (previous level P): the slice amount is
    /// (L - P) times the number of ALL seats that contributed at least L,
    /// folded seats included, while eligibility is restricted to unfolded
    /// seats at that level. That is the table's historical rule, kept
    /// verbatim rather than normalized to the textbook side-pot
    /// construction.
    pub fn compute_pots(&self) -> Vec<PotSlice> {
        let mut levels: Vec<u32> = self
            .contributions
            .iter()
            .copied()
            .filter(|&c| c > 0)
            .collect();
        levels.sort_unstable();
        levels.dedup();

        let mut pots = Vec::with_capacity(levels.len());
        let mut prev = 0u32;
        for level in levels {
            let funders = self
                .contributions
                .iter()
                .filter(|&&c| c >= level)
                .count() as u32;
            let eligible: Vec<usize> = (0..self.seats.len())
                .filter(|&i| self.contributions[i] >= level && !self.seats[i].folded())
                .collect();
            pots.push(PotSlice {
                amount: (level - prev) * funders,
                eligible,
            });
            prev = level;
        }
        pots
    }

    /// Snapshot for one viewer. Hole cards are face down (`None`) for every
    /// seat except `viewer`; pass `None` to hide all of them.
    pub fn view(&self, acting: Option<usize>, viewer: Option<usize>) -> TableView {
        self.view_inner(acting, |i| Some(i) == viewer)
    }

    /// Showdown snapshot: every seat still in the hand is face up.
    pub fn showdown_view(&self) -> TableView {
        self.view_inner(None, |i| self.seats[i].in_hand())
    }

    fn view_inner<F>(&self, acting: Option<usize>, reveal: F) -> TableView
    where
        F: Fn(usize) -> bool,
    {
        let seats = self
            .seats
            .iter()
            .enumerate()
            .map(|(i, s)| SeatView {
                name: s.name().to_string(),
                chips: s.chips(),
                round_bet: s.round_bet(),
                contribution: self.contributions[i],
                folded: s.folded(),
                busted: s.busted(),
                is_human: s.is_human(),
                emotion: s.emotion(),
                hole: if reveal(i) {
                    s.hole_cards()
                } else {
                    [None, None]
                },
            })
            .collect();
        TableView {
            pot: self.pot,
            current_bet: self.current_bet,
            to_call: self.current_bet,
            min_raise: self.min_raise,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            dealer: self.dealer,
            acting,
            board: self.board.clone(),
            seats,
        }
    }
}

/// Read-only per-seat projection inside a [`TableView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub name: String,
    pub chips: u32,
    pub round_bet: u32,
    pub contribution: u32,
    pub folded: bool,
    pub busted: bool,
    pub is_human: bool,
    pub emotion: Emotion,
    /// `None` entries are face-down cards from this viewer's perspective.
    pub hole: [Option<Card>; 2],
}

/// Read-only table snapshot handed to renderers and decision providers
/// after every state transition. Never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub pot: u32,
    pub current_bet: u32,
    pub to_call: u32,
    pub min_raise: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub dealer: usize,
    pub acting: Option<usize>,
    pub board: Vec<Card>,
    pub seats: Vec<SeatView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(stacks: &[u32]) -> TableState {
        let seats = stacks
            .iter()
            .enumerate()
            .map(|(i, &c)| Seat::new(format!("P{}", i), c, i == 0))
            .collect();
        TableState::new(seats, 10, 20)
    }

    #[test]
    fn contribute_tracks_pot_and_contributions() {
        let mut t = table(&[100, 100]);
        assert_eq!(t.contribute(0, 40), 40);
        assert_eq!(t.pot(), 40);
        assert_eq!(t.contribution(0), 40);
        assert_eq!(t.seat(0).chips(), 60);
    }

    #[test]
    fn view_hides_other_holes() {
        let mut t = table(&[100, 100]);
        let c = crate::cards::full_deck()[0];
        t.seat_mut(0).give_card(c, 0).unwrap();
        t.seat_mut(0).give_card(c, 0).unwrap();
        let view = t.view(Some(0), Some(1));
        assert_eq!(view.seats[0].hole, [None, None]);
    }

    #[test]
    fn next_unbusted_wraps() {
        let mut t = table(&[0, 100, 100]);
        t.seat_mut(0).mark_busted();
        assert_eq!(t.next_unbusted(2), Some(1));
    }
}
