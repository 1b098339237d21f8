//! Hand orchestration: blinds → preflop → flop → turn → river → showdown,
//! with the early exit taken as soon as at most one seat can still bet.
//!
//! The orchestrator is constructed once and handed to whatever drives the
//! table (no ambient globals); seats' decisions come in through the
//! injected [`DecisionProvider`]s, one suspension at a time.

use tracing::{info, warn};

use crate::action::Decision;
use crate::betting::{BettingRound, Street};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::{best_hand, HandValue};
use crate::logger::{ActionRecord, HandLogger, HandRecord, PayoutRecord};
use crate::provider::DecisionProvider;
use crate::seat::Seat;
use crate::table::{TableState, TableView};

/// Snapshot callback invoked after every state transition (cards dealt,
/// blinds posted, each action, showdown). Read-only by construction.
pub type Observer = Box<dyn FnMut(&TableView) + Send>;

/// Outcome of one completed hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSummary {
    pub board: Vec<Card>,
    /// (seat, amount) per pot-slice payout
    pub payouts: Vec<(usize, u32)>,
    /// False when everyone but one seat folded and no hands were evaluated
    pub went_to_showdown: bool,
}

impl std::fmt::Debug for HandOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandOrchestrator")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

pub struct HandOrchestrator {
    table: TableState,
    deck: Deck,
    providers: Vec<Box<dyn DecisionProvider>>,
    observer: Option<Observer>,
    /// Seat whose hole cards observer snapshots reveal (typically the human)
    perspective: Option<usize>,
    logger: Option<HandLogger>,
    seed: u64,
}

impl HandOrchestrator {
    pub fn new(
        seats: Vec<Seat>,
        providers: Vec<Box<dyn DecisionProvider>>,
        small_blind: u32,
        big_blind: u32,
        seed: u64,
    ) -> Result<Self, EngineError> {
        if seats.len() < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }
        if providers.len() != seats.len() {
            return Err(EngineError::ProviderCountMismatch {
                seats: seats.len(),
                providers: providers.len(),
            });
        }
        let perspective = seats.iter().position(|s| s.is_human());
        Ok(Self {
            table: TableState::new(seats, small_blind, big_blind),
            deck: Deck::new_with_seed(seed),
            providers,
            observer: None,
            perspective,
            logger: None,
            seed,
        })
    }

    /// Install a snapshot observer. Snapshots reveal only the perspective
    /// seat's hole cards until showdown.
    pub fn set_observer(&mut self, observer: Observer) {
        self.observer = Some(observer);
    }

    pub fn set_logger(&mut self, logger: HandLogger) {
        self.logger = Some(logger);
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn human_seat(&self) -> Option<usize> {
        self.perspective
    }

    /// The table is done when the human seat is permanently busted or
    /// fewer than two seats remain alive.
    pub fn is_game_over(&self) -> bool {
        let alive = self.table.seats().iter().filter(|s| !s.busted()).count();
        let human_out = self
            .perspective
            .map(|i| self.table.seat(i).busted())
            .unwrap_or(false);
        human_out || alive < 2
    }

    /// Run one complete hand: shuffle, deal, run the betting rounds, and
    /// resolve the pot. Returns the payout summary.
    pub async fn play_hand(&mut self) -> Result<HandSummary, EngineError> {
        if self.is_game_over() {
            return Err(EngineError::NotEnoughPlayers);
        }

        self.table.begin_hand();
        self.deck.shuffle();
        self.deal_hole_cards()?;
        notify(&self.table, &mut self.observer, self.perspective, None);

        let mut actions: Vec<ActionRecord> = Vec::new();
        let streets = [
            (Street::Preflop, 0usize),
            (Street::Flop, 3),
            (Street::Turn, 1),
            (Street::River, 1),
        ];
        for (street, deal) in streets {
            for _ in 0..deal {
                let c = self.deck.draw().ok_or(EngineError::DeckEmpty)?;
                self.table.push_board_card(c);
            }
            if deal > 0 {
                info!(street = %street, "board: {}", fmt_cards(self.table.board()));
                notify(&self.table, &mut self.observer, self.perspective, None);
            }

            self.run_round(street, &mut actions).await;

            // Early exit: nobody (or only one seat) can still bet. Any
            // remaining streets are dealt without action before resolution.
            if self.table.contesting_count() <= 1 {
                break;
            }
        }

        // Complete the board face up so the showdown display is whole even
        // when betting ended early.
        while self.table.board().len() < 5 {
            let c = self.deck.draw().ok_or(EngineError::DeckEmpty)?;
            self.table.push_board_card(c);
        }

        let summary = self.resolve_pots();
        if let Some(obs) = self.observer.as_mut() {
            // Showdown reveals every live seat; a fold-out keeps holes down.
            let view = if summary.went_to_showdown {
                self.table.showdown_view()
            } else {
                self.table.view(None, self.perspective)
            };
            obs(&view);
        }

        for i in 0..self.table.seat_count() {
            let seat = self.table.seat(i);
            if seat.chips() == 0 && !seat.busted() {
                self.table.seat_mut(i).mark_busted();
                info!("{} is busted", self.table.seat(i).name());
            }
        }
        self.table.advance_dealer();

        if let Some(logger) = self.logger.as_mut() {
            let record = HandRecord {
                hand_id: logger.next_id(),
                seed: self.seed,
                actions,
                board: summary.board.clone(),
                payouts: summary
                    .payouts
                    .iter()
                    .map(|&(seat, amount)| PayoutRecord { seat, amount })
                    .collect(),
                ts: None,
            };
            if let Err(e) = logger.write(&record) {
                warn!("failed to write hand record: {}", e);
            }
        }

        Ok(summary)
    }

    /// Two hole cards per non-bust seat, dealt round-robin starting left
    /// of the dealer.
    fn deal_hole_cards(&mut self) -> Result<(), EngineError> {
        let n = self.table.seat_count();
        let dealer = self.table.dealer();
        for _ in 0..2 {
            for k in 1..=n {
                let i = (dealer + k) % n;
                if self.table.seat(i).busted() {
                    continue;
                }
                let c = self.deck.draw().ok_or(EngineError::DeckEmpty)?;
                self.table.seat_mut(i).give_card(c, i)?;
            }
        }
        Ok(())
    }

    /// Drive one betting round to completion, substituting a plain call
    /// for any provider failure so a hung or broken decision source can
    /// never corrupt the state machine.
    async fn run_round(&mut self, street: Street, actions: &mut Vec<ActionRecord>) {
        let post_blinds = street == Street::Preflop;
        let Some(mut round) = BettingRound::open(&mut self.table, street, 1, post_blinds) else {
            if post_blinds {
                notify(&self.table, &mut self.observer, self.perspective, None);
            }
            return;
        };
        notify(
            &self.table,
            &mut self.observer,
            self.perspective,
            Some(round.actor()),
        );

        while !round.is_complete() {
            let seat = round.actor();
            let Some(hole) = self.table.seat(seat).hole_pair() else {
                break;
            };
            let view = self.table.view(Some(seat), Some(seat));
            let decision = match self.providers[seat].decide(&view, seat, hole).await {
                Ok(d) => d,
                Err(e) => {
                    warn!(seat, "decision provider failed ({}); defaulting to CALL", e);
                    Decision::call()
                }
            };
            let applied = round.apply(&mut self.table, decision);
            actions.push(ActionRecord {
                seat,
                street,
                action: applied,
            });
            let acting = if round.is_complete() {
                None
            } else {
                Some(round.actor())
            };
            notify(&self.table, &mut self.observer, self.perspective, acting);
        }
    }

    /// Slice the pot and pay every slice out. If everyone but one seat
    /// folded, the hand never reaches the evaluator.
    fn resolve_pots(&mut self) -> HandSummary {
        let board = self.table.board().to_vec();
        let pots = self.table.compute_pots();
        let mut payouts: Vec<(usize, u32)> = Vec::new();

        let lone_survivor = match pots.first() {
            Some(slice) if slice.eligible.len() == 1 => Some(slice.eligible[0]),
            _ => None,
        };
        if let Some(winner) = lone_survivor {
            let amount = self.table.pot();
            self.table.award(winner, amount);
            info!("{} WON {} CHIPS", self.table.seat(winner).name(), amount);
            payouts.push((winner, amount));
            return HandSummary {
                board,
                payouts,
                went_to_showdown: false,
            };
        }

        for slice in pots {
            let ranked: Vec<(usize, HandValue)> = slice
                .eligible
                .iter()
                .filter_map(|&i| {
                    self.table.seat(i).hole_pair().map(|hole| {
                        let mut cards: Vec<Card> = board.clone();
                        cards.extend_from_slice(&hole);
                        (i, best_hand(&cards))
                    })
                })
                .collect();
            let Some(best) = ranked.iter().map(|(_, v)| *v).max() else {
                continue;
            };
            let mut winners: Vec<usize> = ranked
                .iter()
                .filter(|(_, v)| *v == best)
                .map(|(i, _)| *i)
                .collect();
            // Split evenly on ties; the odd chip goes to the first winner
            // clockwise from the dealer.
            let n = self.table.seat_count();
            let dealer = self.table.dealer();
            winners.sort_by_key(|&i| (i + n - dealer - 1) % n);
            let share = slice.amount / winners.len() as u32;
            let remainder = slice.amount % winners.len() as u32;
            for (k, &winner) in winners.iter().enumerate() {
                let amount = share + if k == 0 { remainder } else { 0 };
                if amount == 0 {
                    continue;
                }
                self.table.award(winner, amount);
                info!(
                    hand = %best.category,
                    "{} WON {} CHIPS",
                    self.table.seat(winner).name(),
                    amount,
                );
                payouts.push((winner, amount));
            }
        }

        HandSummary {
            board,
            payouts,
            went_to_showdown: true,
        }
    }
}

fn notify(
    table: &TableState,
    observer: &mut Option<Observer>,
    perspective: Option<usize>,
    acting: Option<usize>,
) {
    if let Some(obs) = observer.as_mut() {
        obs(&table.view(acting, perspective));
    }
}

fn fmt_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
