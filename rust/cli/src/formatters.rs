//! Card, board, and table formatters for terminal display.
//!
//! Pure functions over engine types. Unicode suit symbols are used where the
//! terminal supports them, with single-letter ASCII fallback otherwise.
//!
//! - **Unicode mode**: ♥ ♦ ♣ ♠
//! - **ASCII mode**: h d c s

use felt_engine::cards::{Card, Rank, Suit};
use felt_engine::table::TableView;

/// Check whether the terminal supports Unicode card symbols.
///
/// On Windows, modern terminals advertise themselves through environment
/// variables; Unix-like systems are assumed capable.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a single character (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a card list as `[A♠ K♦ 7♣]`. An empty board renders as `[]`.
pub fn format_board(cards: &[Card]) -> String {
    let inner = cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", inner)
}

/// Render a full table snapshot: board, pot, and one line per seat. Face-down
/// hole cards render as `??`; revealed cards (the viewer's own, or everyone's
/// at showdown) render normally.
pub fn format_table(view: &TableView) -> String {
    let mut lines = Vec::with_capacity(view.seats.len() + 1);
    lines.push(format!(
        "Board: {}  Pot: {}  Bet: {}",
        format_board(&view.board),
        view.pot,
        view.current_bet,
    ));
    for (i, seat) in view.seats.iter().enumerate() {
        let hole = match (seat.hole[0], seat.hole[1]) {
            (Some(a), Some(b)) => format!("{} {}", format_card(&a), format_card(&b)),
            _ if seat.busted || seat.folded => "--".to_string(),
            _ => "?? ??".to_string(),
        };
        let status = if seat.busted {
            " (busted)"
        } else if seat.folded {
            " (folded)"
        } else if view.acting == Some(i) {
            " (to act)"
        } else {
            ""
        };
        let button = if view.dealer == i { "D " } else { "  " };
        lines.push(format!(
            "{}{:<8} {:>6} chips  bet {:>4}  {}{}",
            button, seat.name, seat.chips, seat.round_bet, hole, status,
        ));
    }
    lines.join("\n")
}
