//! Rule-based baseline opponent.
//!
//! Plays a straightforward strategy: preflop hand-strength ladder, postflop
//! 7-card evaluation against the board, and pot odds for calling decisions.
//! Strong hands bet and raise, medium hands call when the price is right,
//! weak hands check or fold with an occasional small bluff.

use async_trait::async_trait;
use rand::Rng;

use felt_engine::action::{Decision, Emotion};
use felt_engine::cards::Card;
use felt_engine::hand::{best_hand, Category};
use felt_engine::provider::{DecisionProvider, ProviderError};
use felt_engine::table::TableView;

/// Baseline opponent used for regular play and as a benchmark reference.
///
/// # Strategy
///
/// **Preflop:**
/// - Premium hands (high pairs, AK): raise for value
/// - Medium hands (broadway, suited connectors, small pairs): call if cheap
/// - Weak hands: check when free, fold to bets
///
/// **Postflop:**
/// - Two pair or better: bet and raise
/// - One pair: call small bets, judged by pot odds
/// - Less: check, fold to bets, rare bluff
#[derive(Debug, Clone)]
pub struct BaselineProvider;

impl BaselineProvider {
    pub fn new() -> Self {
        Self
    }

    /// Preflop hand strength on a 0-10 scale.
    ///
    /// - 9-10: premium (AA, KK, QQ, JJ, AKs)
    /// - 7-8: strong (TT-99, AK, AQs)
    /// - 5-6: medium (88-77, broadway, good suited connectors)
    /// - 3-4: marginal (small pairs, Ax, low broadway)
    /// - 0-2: weak offsuit hands
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let r1 = hole[0].rank as u8;
        let r2 = hole[1].rank as u8;
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;

        if r1 == r2 {
            return match high {
                14 | 13 => 10,
                12 | 11 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => {
                if suited {
                    10
                } else {
                    8
                }
            }
            (14, 12) => {
                if suited {
                    8
                } else {
                    7
                }
            }
            (14, 11) => {
                if suited {
                    7
                } else {
                    6
                }
            }
            (14, 10) => {
                if suited {
                    6
                } else {
                    5
                }
            }
            // any other Ax
            (14, _) => {
                if suited {
                    5
                } else {
                    4
                }
            }
            (13, 12) => {
                if suited {
                    7
                } else {
                    6
                }
            }
            (13, 11) => {
                if suited {
                    6
                } else {
                    5
                }
            }
            (13, 10) | (12, 10) => {
                if suited {
                    5
                } else {
                    4
                }
            }
            (12, 11) => {
                if suited {
                    6
                } else {
                    5
                }
            }
            _ => {
                if suited && high - low <= 2 {
                    if high >= 9 {
                        5
                    } else {
                        4
                    }
                } else if high >= 11 && low >= 9 {
                    4
                } else {
                    2
                }
            }
        }
    }

    /// Postflop strength on the same 0-10 scale, or `None` before the flop.
    fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let mut cards: Vec<Card> = board.to_vec();
        cards.extend_from_slice(&hole);
        let value = best_hand(&cards);

        let base = match value.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush => 10,
        };
        // A queen-high or better leading rank bumps the category a notch.
        let boost = if value.tiebreak[0] >= 12 { 1 } else { 0 };
        Some((base + boost).min(10))
    }

    /// Pot odds as pot / (pot + call). 1.0 when the action is free.
    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    fn decide_free_action(strength: u8, min_raise: u32, stack: u32, pot: u32) -> Decision {
        match strength {
            9..=10 => {
                if stack > min_raise {
                    let bet = (pot * 2 / 3).max(min_raise).min(stack);
                    Decision::raise(bet).with_emotion(Emotion::Confident)
                } else {
                    Decision::check()
                }
            }
            7..=8 => {
                if stack > min_raise {
                    let bet = (pot / 2).max(min_raise).min(stack);
                    Decision::raise(bet)
                } else {
                    Decision::check()
                }
            }
            5..=6 => Decision::check(),
            _ => {
                // Rare bluff keeps free-card lines from being an open book.
                if stack > min_raise && rand::rng().random_ratio(1, 8) {
                    Decision::raise(min_raise).with_emotion(Emotion::Confident)
                } else {
                    Decision::check()
                }
            }
        }
    }

    fn decide_facing_bet(strength: u8, to_call: u32, min_raise: u32, stack: u32, pot: u32) -> Decision {
        // Calling would put us all in: only strong hands come along.
        if to_call >= stack {
            return if strength >= 7 {
                Decision::call().with_emotion(Emotion::Nervous)
            } else {
                Decision::fold().with_emotion(Emotion::Disappointed)
            };
        }

        let odds = Self::pot_odds(pot, to_call);
        match strength {
            9..=10 => {
                if stack > to_call + min_raise {
                    let raise = (pot / 2).max(min_raise);
                    Decision::raise(raise).with_emotion(Emotion::Confident)
                } else {
                    Decision::call()
                }
            }
            7..=8 => Decision::call(),
            5..=6 => {
                if odds >= 0.3 || to_call <= pot / 4 {
                    Decision::call()
                } else {
                    Decision::fold()
                }
            }
            3..=4 => {
                if odds >= 0.4 || to_call <= pot / 6 {
                    Decision::call().with_emotion(Emotion::Nervous)
                } else {
                    Decision::fold()
                }
            }
            _ => Decision::fold(),
        }
    }
}

impl Default for BaselineProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DecisionProvider for BaselineProvider {
    async fn decide(
        &mut self,
        view: &TableView,
        seat: usize,
        hole: [Card; 2],
    ) -> Result<Decision, ProviderError> {
        let me = &view.seats[seat];
        let to_call = view.current_bet.saturating_sub(me.round_bet);
        let strength = Self::postflop_strength(hole, &view.board)
            .unwrap_or_else(|| Self::preflop_strength(hole));

        let decision = if to_call == 0 {
            Self::decide_free_action(strength, view.min_raise, me.chips, view.pot)
        } else {
            Self::decide_facing_bet(strength, to_call, view.min_raise, me.chips, view.pot)
        };
        Ok(decision)
    }

    fn name(&self) -> &str {
        "Baseline"
    }
}
