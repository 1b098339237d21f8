use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use felt_engine::action::Decision;
use felt_engine::cards::Card;
use felt_engine::errors::EngineError;
use felt_engine::orchestrator::HandOrchestrator;
use felt_engine::provider::{DecisionProvider, ProviderError};
use felt_engine::seat::Seat;
use felt_engine::table::TableView;

/// Plays a fixed script, then checks/calls forever.
struct Scripted {
    plan: VecDeque<Decision>,
}

impl Scripted {
    fn new(plan: Vec<Decision>) -> Box<dyn DecisionProvider> {
        Box::new(Self {
            plan: plan.into(),
        })
    }
}

#[async_trait]
impl DecisionProvider for Scripted {
    async fn decide(
        &mut self,
        _view: &TableView,
        _seat: usize,
        _hole: [Card; 2],
    ) -> Result<Decision, ProviderError> {
        Ok(self.plan.pop_front().unwrap_or_else(Decision::call))
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

/// Always errors; the orchestrator must substitute a plain call.
struct Broken;

#[async_trait]
impl DecisionProvider for Broken {
    async fn decide(
        &mut self,
        _view: &TableView,
        _seat: usize,
        _hole: [Card; 2],
    ) -> Result<Decision, ProviderError> {
        Err(ProviderError::Transport("connection reset".into()))
    }

    fn name(&self) -> &str {
        "Broken"
    }
}

fn seats(stacks: &[u32]) -> Vec<Seat> {
    stacks
        .iter()
        .enumerate()
        .map(|(i, &c)| Seat::new(format!("P{}", i), c, i == 0))
        .collect()
}

fn checkers(n: usize) -> Vec<Box<dyn DecisionProvider>> {
    (0..n).map(|_| Scripted::new(vec![])).collect()
}

#[tokio::test]
async fn early_fold_fast_path_skips_evaluation() {
    // dealer 0, small blind 1, big blind 2; both non-blind seats fold and
    // the big blind takes the whole pot without a showdown.
    let providers: Vec<Box<dyn DecisionProvider>> = vec![
        Scripted::new(vec![Decision::fold()]),
        Scripted::new(vec![Decision::fold()]),
        Scripted::new(vec![Decision::check()]),
    ];
    let mut orch = HandOrchestrator::new(seats(&[500, 500, 500]), providers, 10, 20, 7).unwrap();
    let summary = orch.play_hand().await.unwrap();

    assert!(!summary.went_to_showdown, "no hands may be evaluated");
    assert_eq!(summary.payouts, vec![(2, 30)]);
    assert_eq!(orch.table().seat(2).chips(), 510);
    assert_eq!(orch.table().seat(1).chips(), 490);
    assert_eq!(orch.table().pot(), 0);
    assert_eq!(summary.board.len(), 5, "board is completed for display");
}

#[tokio::test]
async fn a_fold_out_never_strands_the_blinds() {
    // Every provider is told to fold. The round must end the moment a
    // second seat folds: the last live seat is never asked to act on a
    // pot it already won, and the blinds are paid out, not destroyed.
    let providers: Vec<Box<dyn DecisionProvider>> = vec![
        Scripted::new(vec![Decision::fold()]),
        Scripted::new(vec![Decision::fold()]),
        Scripted::new(vec![Decision::fold()]),
    ];
    let mut orch = HandOrchestrator::new(seats(&[500, 500, 500]), providers, 10, 20, 13).unwrap();
    let before: u32 = orch.table().seats().iter().map(|s| s.chips()).sum();
    let summary = orch.play_hand().await.unwrap();

    assert!(!summary.went_to_showdown);
    assert_eq!(summary.payouts, vec![(2, 30)], "blinds must be paid out");
    assert_eq!(orch.table().pot(), 0);
    assert!(!orch.table().seat(2).folded(), "the winner was never polled");
    let after: u32 = orch.table().seats().iter().map(|s| s.chips()).sum();
    assert_eq!(after, before);
}

#[tokio::test]
async fn checked_down_hand_reaches_showdown_and_conserves_chips() {
    let mut orch =
        HandOrchestrator::new(seats(&[1000, 1000, 1000]), checkers(3), 10, 20, 42).unwrap();
    let before: u32 = orch.table().seats().iter().map(|s| s.chips()).sum();
    let summary = orch.play_hand().await.unwrap();

    assert!(summary.went_to_showdown);
    let paid: u32 = summary.payouts.iter().map(|&(_, a)| a).sum();
    assert_eq!(paid, 60, "three seats called the big blind and checked down");
    assert_eq!(orch.table().pot(), 0, "every slice was paid out");
    let after: u32 = orch.table().seats().iter().map(|s| s.chips()).sum();
    assert_eq!(after, before, "chips are conserved over a full hand");
    assert_eq!(summary.board.len(), 5);
}

#[tokio::test]
async fn provider_failure_defaults_to_call() {
    let providers: Vec<Box<dyn DecisionProvider>> = vec![
        Scripted::new(vec![]),
        Box::new(Broken),
        Scripted::new(vec![]),
    ];
    let mut orch = HandOrchestrator::new(seats(&[500, 500, 500]), providers, 10, 20, 3).unwrap();
    let summary = orch.play_hand().await.unwrap();

    assert!(summary.went_to_showdown, "the broken seat called, not folded");
    assert!(!orch.table().seat(1).folded());
    assert_eq!(orch.table().pot(), 0);
}

#[tokio::test]
async fn broke_seat_is_busted_and_ends_the_game() {
    let table_seats = vec![Seat::new("Hero", 100, true), Seat::new("Bot", 0, false)];
    let mut orch = HandOrchestrator::new(table_seats, checkers(2), 10, 20, 9).unwrap();
    assert!(!orch.is_game_over(), "a zero stack is not busted until a hand ends");

    let summary = orch.play_hand().await.unwrap();
    // the bot contributed nothing; the hero's blind comes straight back
    assert_eq!(summary.payouts, vec![(0, 20)]);
    assert_eq!(orch.table().seat(0).chips(), 100);
    assert!(orch.table().seat(1).busted());
    assert!(orch.is_game_over(), "fewer than two live seats remain");

    let err = orch.play_hand().await.unwrap_err();
    assert_eq!(err, EngineError::NotEnoughPlayers);
}

#[tokio::test]
async fn observer_sees_only_its_own_hole_cards_until_showdown() {
    let views: Arc<Mutex<Vec<TableView>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&views);

    let mut orch =
        HandOrchestrator::new(seats(&[1000, 1000, 1000]), checkers(3), 10, 20, 11).unwrap();
    orch.set_observer(Box::new(move |v: &TableView| {
        sink.lock().unwrap().push(v.clone());
    }));
    let summary = orch.play_hand().await.unwrap();
    assert!(summary.went_to_showdown);

    let views = views.lock().unwrap();
    assert!(views.len() > 4, "a snapshot follows every transition");
    let (last, rest) = views.split_last().unwrap();
    for v in rest {
        assert_eq!(v.seats[1].hole, [None, None], "seat 1 stays face down");
        assert_eq!(v.seats[2].hole, [None, None], "seat 2 stays face down");
    }
    for s in &last.seats {
        assert!(
            s.hole[0].is_some() && s.hole[1].is_some(),
            "showdown reveals every live seat"
        );
    }
}

#[tokio::test]
async fn all_in_call_builds_a_side_pot_showdown() {
    // Preflop, seat 0's raise of 300 is capped at the short stack's 80 and
    // seat 3 calls all in for 100 total. On the flop the deep stacks keep
    // betting among themselves, so a side pot forms that seat 3 cannot win.
    let providers: Vec<Box<dyn DecisionProvider>> = vec![
        Scripted::new(vec![Decision::raise(300)]),
        Scripted::new(vec![Decision::call(), Decision::raise(100)]),
        Scripted::new(vec![Decision::call()]),
        Scripted::new(vec![Decision::call()]),
    ];
    let mut orch =
        HandOrchestrator::new(seats(&[1000, 1000, 1000, 100]), providers, 10, 20, 21).unwrap();
    let before: u32 = orch.table().seats().iter().map(|s| s.chips()).sum();
    let summary = orch.play_hand().await.unwrap();

    assert!(summary.went_to_showdown);
    assert_eq!(orch.table().pot(), 0);
    let after: u32 = orch.table().seats().iter().map(|s| s.chips()).sum();
    assert_eq!(after, before);

    let paid: u32 = summary.payouts.iter().map(|&(_, a)| a).sum();
    assert_eq!(paid, 700, "main pot 400 plus side pot 300");
    // Seat 3 is eligible for the main pot only.
    for &(seat, amount) in &summary.payouts {
        if seat == 3 {
            assert!(amount <= 400);
        }
    }
}

#[test]
fn provider_count_must_match_seats() {
    let err = HandOrchestrator::new(seats(&[100, 100, 100]), checkers(2), 10, 20, 1).unwrap_err();
    assert_eq!(
        err,
        EngineError::ProviderCountMismatch {
            seats: 3,
            providers: 2
        }
    );
}

#[test]
fn a_table_needs_two_seats() {
    let err = HandOrchestrator::new(seats(&[100]), checkers(1), 10, 20, 1).unwrap_err();
    assert_eq!(err, EngineError::NotEnoughPlayers);
}
