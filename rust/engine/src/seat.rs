use serde::{Deserialize, Serialize};

use crate::action::Emotion;
use crate::cards::Card;
use crate::errors::EngineError;

/// One position at the table: chips, hole cards, and round-local state.
///
/// `round_bet` resets at the start of every betting round, not every hand.
/// `busted` is a lifetime flag: once a seat goes broke at a hand boundary it
/// never again receives cards or acts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    name: String,
    chips: u32,
    hole: [Option<Card>; 2],
    folded: bool,
    round_bet: u32,
    busted: bool,
    emotion: Emotion,
    is_human: bool,
}

impl Seat {
    pub fn new(name: impl Into<String>, chips: u32, is_human: bool) -> Self {
        Self {
            name: name.into(),
            chips,
            hole: [None, None],
            folded: false,
            round_bet: 0,
            busted: false,
            emotion: Emotion::Neutral,
            is_human,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn folded(&self) -> bool {
        self.folded
    }
    pub fn round_bet(&self) -> u32 {
        self.round_bet
    }
    pub fn busted(&self) -> bool {
        self.busted
    }
    pub fn emotion(&self) -> Emotion {
        self.emotion
    }
    pub fn is_human(&self) -> bool {
        self.is_human
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    /// Both hole cards, if the seat was dealt in.
    pub fn hole_pair(&self) -> Option<[Card; 2]> {
        match self.hole {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }

    pub fn give_card(&mut self, c: Card, seat_index: usize) -> Result<(), EngineError> {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
            Ok(())
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(c);
            Ok(())
        } else {
            Err(EngineError::HoleCardsFull(seat_index))
        }
    }

    /// Still contesting the pot and able to act: dealt in, not folded,
    /// not busted, chips behind.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.busted && self.hole_pair().is_some() && self.chips > 0
    }

    /// Still eligible to win: dealt in and not folded. All-in seats stay
    /// in hand with zero chips behind.
    pub fn in_hand(&self) -> bool {
        !self.folded && !self.busted && self.hole_pair().is_some()
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn set_emotion(&mut self, emotion: Emotion) {
        self.emotion = emotion;
    }

    /// Move up to `amount` chips from the stack into the current round bet;
    /// returns what was actually paid (short stacks pay what they have).
    pub fn commit(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.round_bet += paid;
        paid
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub fn reset_for_round(&mut self) {
        self.round_bet = 0;
    }

    pub fn reset_for_hand(&mut self) {
        self.hole = [None, None];
        self.folded = false;
        self.round_bet = 0;
    }

    /// Permanently retire a broke seat. Checked at hand boundaries only.
    pub fn mark_busted(&mut self) {
        if self.chips == 0 {
            self.busted = true;
        }
    }
}
