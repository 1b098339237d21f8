//! Deal command handler: one face-up hand for inspection.
//!
//! Deals two hole cards to each seat and a full board from a seeded deck,
//! then shows the best five-card hand each seat makes. Supports optional
//! seeding for deterministic output.

use std::io::Write;

use felt_engine::cards::Card;
use felt_engine::deck::Deck;
use felt_engine::hand::best_hand;

use crate::error::CliError;
use crate::formatters::{format_board, format_card};

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional deck seed for deterministic dealing
/// * `seats` - Number of seats to deal to (2-9)
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    seed: Option<u64>,
    seats: u8,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !(2..=9).contains(&seats) {
        return Err(CliError::InvalidInput("seats must be 2-9".to_string()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let draw = |deck: &mut Deck| {
        deck.draw()
            .ok_or_else(|| CliError::InvalidInput("deck exhausted".to_string()))
    };

    let mut holes: Vec<[Card; 2]> = Vec::with_capacity(seats as usize);
    for _ in 0..seats {
        holes.push([draw(&mut deck)?, draw(&mut deck)?]);
    }
    let mut board: Vec<Card> = Vec::with_capacity(5);
    for _ in 0..5 {
        board.push(draw(&mut deck)?);
    }

    writeln!(out, "deal: seed={} seats={}", seed, seats)?;
    writeln!(out, "Board: {}", format_board(&board))?;
    for (i, hole) in holes.iter().enumerate() {
        let mut cards = board.clone();
        cards.extend_from_slice(hole);
        let value = best_hand(&cards);
        writeln!(
            out,
            "Seat {}: {} {}  -> {}",
            i,
            format_card(&hole[0]),
            format_card(&hole[1]),
            value.category,
        )?;
    }
    Ok(())
}
