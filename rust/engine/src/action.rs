use std::fmt;

use serde::{Deserialize, Serialize};

/// Cosmetic expression tag attached to a seat after each decision.
/// Purely for display; the rules never read it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum Emotion {
    #[default]
    Neutral,
    Happy,
    Nervous,
    Confident,
    Disappointed,
}

/// A voluntary betting action. `Check` and `Call` are the same move with
/// different amounts outstanding; the table keeps both names for display.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise,
}

impl Action {
    /// Lenient action-text parsing for externally supplied decisions.
    ///
    /// Returns the action and any trailing amount. Unrecognized or
    /// malformed text maps to a plain `Call`; a bad decision string must
    /// never halt the hand.
    pub fn parse(input: &str) -> (Action, u32) {
        let lower = input.trim().to_lowercase();
        let mut parts = lower.split_whitespace();
        let action = match parts.next() {
            Some("fold") => Action::Fold,
            Some("check") => Action::Check,
            Some("call") => Action::Call,
            Some("raise") => Action::Raise,
            _ => Action::Call,
        };
        let amount = parts.next().and_then(|a| a.parse::<u32>().ok()).unwrap_or(0);
        (action, amount)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Fold => "FOLD",
            Action::Check => "CHECK",
            Action::Call => "CALL",
            Action::Raise => "RAISE",
        };
        f.write_str(s)
    }
}

/// What a decision provider hands back for one turn: the action, a raise
/// amount (ignored for anything but a raise), and an expression tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    pub amount: u32,
    pub emotion: Emotion,
}

impl Decision {
    pub fn fold() -> Self {
        Self {
            action: Action::Fold,
            amount: 0,
            emotion: Emotion::Neutral,
        }
    }

    pub fn check() -> Self {
        Self {
            action: Action::Check,
            amount: 0,
            emotion: Emotion::Neutral,
        }
    }

    /// The safe default substituted for any failed or malformed decision.
    pub fn call() -> Self {
        Self {
            action: Action::Call,
            amount: 0,
            emotion: Emotion::Neutral,
        }
    }

    pub fn raise(amount: u32) -> Self {
        Self {
            action: Action::Raise,
            amount,
            emotion: Emotion::Neutral,
        }
    }

    pub fn with_emotion(mut self, emotion: Emotion) -> Self {
        self.emotion = emotion;
        self
    }
}
