use felt_engine::action::Decision;
use felt_engine::betting::{AppliedAction, BettingRound, Street};
use felt_engine::cards::full_deck;
use felt_engine::seat::Seat;
use felt_engine::table::TableState;

/// A table with every seat dealt in, small blind 10 / big blind 20.
fn table(stacks: &[u32]) -> TableState {
    let seats = stacks
        .iter()
        .enumerate()
        .map(|(i, &c)| Seat::new(format!("P{}", i), c, i == 0))
        .collect();
    let mut t = TableState::new(seats, 10, 20);
    let deck = full_deck();
    for i in 0..t.seat_count() {
        // fixed cards; these tests never reach evaluation
        let a = deck[2 * i];
        let b = deck[2 * i + 1];
        let seat = t.seat_mut_for_test(i);
        seat.give_card(a, i).unwrap();
        seat.give_card(b, i).unwrap();
    }
    t
}

fn total_chips(t: &TableState) -> u32 {
    t.seats().iter().map(|s| s.chips()).sum::<u32>() + t.pot()
}

#[test]
fn blinds_post_and_action_starts_after_big_blind() {
    let mut t = table(&[1000, 1000, 1000, 1000]);
    let round = BettingRound::open(&mut t, Street::Preflop, 1, true).unwrap();
    assert_eq!(t.pot(), 30);
    assert_eq!(t.current_bet(), 20);
    assert_eq!(t.to_call(), 20);
    assert_eq!(t.min_raise(), 20);
    assert_eq!(t.seat(1).round_bet(), 10, "seat after dealer posts small");
    assert_eq!(t.seat(2).round_bet(), 20, "next seat posts big");
    assert_eq!(round.actor(), 3, "first to act sits after the big blind");
}

#[test]
fn big_blind_gets_the_option() {
    let mut t = table(&[1000, 1000, 1000]);
    let mut round = BettingRound::open(&mut t, Street::Preflop, 1, true).unwrap();
    // dealer 0, sb 1, bb 2; dealer acts first
    assert_eq!(round.actor(), 0);
    assert_eq!(round.apply(&mut t, Decision::call()), AppliedAction::Called { paid: 20 });
    assert!(!round.is_complete());
    assert_eq!(round.actor(), 1);
    assert_eq!(round.apply(&mut t, Decision::call()), AppliedAction::Called { paid: 10 });
    assert!(!round.is_complete(), "big blind is still owed its option");
    assert_eq!(round.actor(), 2);
    assert_eq!(round.apply(&mut t, Decision::check()), AppliedAction::Checked);
    assert!(round.is_complete());
    assert_eq!(t.pot(), 60);
}

#[test]
fn checks_around_terminate_exactly_at_zero() {
    let mut t = table(&[500, 500, 500]);
    let mut round = BettingRound::open(&mut t, Street::Flop, 1, false).unwrap();
    assert_eq!(round.actor(), 1);
    round.apply(&mut t, Decision::check());
    assert!(!round.is_complete());
    round.apply(&mut t, Decision::check());
    assert!(!round.is_complete());
    round.apply(&mut t, Decision::check());
    assert!(round.is_complete(), "three checks end a three-handed round");
}

#[test]
fn a_raise_reopens_action_for_everyone_else() {
    let mut t = table(&[500, 500, 500]);
    let mut round = BettingRound::open(&mut t, Street::Flop, 1, false).unwrap();
    round.apply(&mut t, Decision::check()); // seat 1
    round.apply(&mut t, Decision::check()); // seat 2
    let applied = round.apply(&mut t, Decision::raise(40)); // seat 0 bets
    assert!(applied.was_raise());
    assert!(
        !round.is_complete(),
        "the two checkers must act again after the raise"
    );
    round.apply(&mut t, Decision::call()); // seat 1
    assert!(!round.is_complete());
    round.apply(&mut t, Decision::call()); // seat 2
    assert!(round.is_complete(), "raiser does not act a second time");
    assert_eq!(t.pot(), 120);
}

#[test]
fn fold_decrements_and_removes_the_seat() {
    let mut t = table(&[500, 500, 500]);
    let mut round = BettingRound::open(&mut t, Street::Flop, 1, false).unwrap();
    round.apply(&mut t, Decision::raise(40)); // seat 1 bets
    round.apply(&mut t, Decision::fold()); // seat 2
    assert!(t.seat(2).folded());
    assert!(!round.is_complete());
    round.apply(&mut t, Decision::call()); // seat 0
    assert!(round.is_complete());
    assert_eq!(t.pot(), 80, "folded seat contributed nothing this round");
}

#[test]
fn a_second_fold_ends_a_three_handed_round_at_once() {
    let mut t = table(&[500, 500, 500]);
    let mut round = BettingRound::open(&mut t, Street::Flop, 1, false).unwrap();
    round.apply(&mut t, Decision::fold()); // seat 1
    assert!(!round.is_complete());
    round.apply(&mut t, Decision::fold()); // seat 2
    assert!(
        round.is_complete(),
        "seat 0 is the only live seat and must not be asked to act"
    );
    assert!(!t.seat(0).folded());
}

#[test]
fn raise_is_capped_by_the_shortest_opponent_stack() {
    let mut t = table(&[50, 1000, 1000]);
    let mut round = BettingRound::open(&mut t, Street::Flop, 1, false).unwrap();
    assert_eq!(round.actor(), 1);
    let applied = round.apply(&mut t, Decision::raise(500));
    assert_eq!(applied, AppliedAction::Raised { paid: 50, to: 50 });
    assert_eq!(t.current_bet(), 50, "raise clamped to seat 0's 50 chips");
    assert_eq!(t.min_raise(), 50);
}

#[test]
fn sub_minimum_raise_degrades_to_check_or_call() {
    // Shortest opponent has 10 behind; min raise is the 20 big blind, so
    // the cap sits below the legal minimum and the raise collapses.
    let mut t = table(&[10, 1000, 1000]);
    let mut round = BettingRound::open(&mut t, Street::Flop, 1, false).unwrap();
    let applied = round.apply(&mut t, Decision::raise(300));
    assert_eq!(applied, AppliedAction::Checked);
    assert_eq!(t.current_bet(), 0);
    assert_eq!(t.min_raise(), 20, "failed raise leaves the increment alone");
}

#[test]
fn short_stack_call_becomes_all_in_for_less() {
    let mut t = table(&[500, 500, 30]);
    let mut round = BettingRound::open(&mut t, Street::Flop, 1, false).unwrap();
    round.apply(&mut t, Decision::raise(100)); // seat 1
    let applied = round.apply(&mut t, Decision::call()); // seat 2, 30 behind
    assert_eq!(applied, AppliedAction::AllIn { paid: 30 });
    assert_eq!(t.seat(2).chips(), 0);
    assert!(t.seat(2).in_hand(), "all-in seat still contests the pot");
    assert!(!t.seat(2).can_act(), "but is skipped for further action");
}

#[test]
fn raise_without_chips_beyond_call_degrades() {
    let mut t = table(&[500, 500, 40]);
    let mut round = BettingRound::open(&mut t, Street::Flop, 1, false).unwrap();
    round.apply(&mut t, Decision::raise(40)); // seat 1 bets 40
    let applied = round.apply(&mut t, Decision::raise(200)); // seat 2 has exactly the call
    assert_eq!(applied, AppliedAction::AllIn { paid: 40 });
    assert!(!applied.was_raise());
}

#[test]
fn chips_are_conserved_across_a_round() {
    let mut t = table(&[1000, 800, 600, 400]);
    let before = total_chips(&t);
    let mut round = BettingRound::open(&mut t, Street::Preflop, 1, true).unwrap();
    round.apply(&mut t, Decision::raise(60));
    round.apply(&mut t, Decision::call());
    round.apply(&mut t, Decision::fold());
    round.apply(&mut t, Decision::call());
    while !round.is_complete() {
        round.apply(&mut t, Decision::call());
    }
    assert_eq!(total_chips(&t), before);
    let contributed: u32 = (0..t.seat_count()).map(|i| t.contribution(i)).sum();
    assert_eq!(contributed, t.pot(), "pot equals the contribution map");
}

#[test]
fn round_with_one_contesting_seat_does_not_open() {
    let mut t = table(&[500, 0, 0]);
    assert!(BettingRound::open(&mut t, Street::Flop, 1, false).is_none());
}

#[test]
fn min_raise_never_drops_within_a_round() {
    let mut t = table(&[2000, 2000, 2000]);
    let mut round = BettingRound::open(&mut t, Street::Flop, 1, false).unwrap();
    round.apply(&mut t, Decision::raise(100)); // min_raise -> 100
    assert_eq!(t.min_raise(), 100);
    // a requested 30 re-raise is clamped UP to the 100 increment
    let applied = round.apply(&mut t, Decision::raise(30));
    assert_eq!(applied, AppliedAction::Raised { paid: 200, to: 200 });
    assert_eq!(t.min_raise(), 100);
}
