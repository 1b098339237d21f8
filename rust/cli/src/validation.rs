//! Input parsing for interactive commands.
//!
//! The table engine is deliberately lenient (unrecognized action text is
//! applied as a call so a hand can never stall), but a human at a prompt
//! deserves a second chance instead of a silent call. This module rejects
//! malformed input with a message before anything reaches the table.

use felt_engine::action::Decision;

/// Result of parsing user input into a table decision.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid action parsed from input
    Action(Decision),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a [`Decision`] or a special command.
///
/// Accepted forms (case-insensitive):
/// - "f" or "fold"
/// - "c" or "check"
/// - "call"
/// - "raise X" (raise by X over the current bet)
/// - "allin" or "all-in" (raise by everything; the table caps it)
/// - "q" or "quit"
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "fold" | "f" => ParseResult::Action(Decision::fold()),
        "check" | "c" => ParseResult::Action(Decision::check()),
        "call" => ParseResult::Action(Decision::call()),
        "allin" | "all-in" => ParseResult::Action(Decision::raise(u32::MAX)),
        "raise" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(
                    "Raise requires an amount (e.g., 'raise 50')".to_string(),
                );
            }
            match parts[1].parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(Decision::raise(amount)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid raise amount".to_string()),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>, allin, q",
            parts[0]
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_engine::action::Action;

    #[test]
    fn parses_simple_actions() {
        assert_eq!(parse_player_action("fold"), ParseResult::Action(Decision::fold()));
        assert_eq!(parse_player_action("f"), ParseResult::Action(Decision::fold()));
        assert_eq!(parse_player_action("check"), ParseResult::Action(Decision::check()));
        assert_eq!(parse_player_action("CALL"), ParseResult::Action(Decision::call()));
    }

    #[test]
    fn parses_raise_with_amount() {
        assert_eq!(
            parse_player_action("raise 50"),
            ParseResult::Action(Decision::raise(50))
        );
        assert_eq!(
            parse_player_action("  Raise 120 "),
            ParseResult::Action(Decision::raise(120))
        );
    }

    #[test]
    fn allin_is_a_maximal_raise() {
        match parse_player_action("all-in") {
            ParseResult::Action(d) => {
                assert_eq!(d.action, Action::Raise);
                assert_eq!(d.amount, u32::MAX);
            }
            other => panic!("expected action, got {:?}", other),
        }
    }

    #[test]
    fn quit_commands() {
        assert_eq!(parse_player_action("q"), ParseResult::Quit);
        assert_eq!(parse_player_action("quit"), ParseResult::Quit);
    }

    #[test]
    fn rejects_garbage_with_a_message() {
        match parse_player_action("jump the table") {
            ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
            other => panic!("expected invalid, got {:?}", other),
        }
        assert!(matches!(parse_player_action(""), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("raise"), ParseResult::Invalid(_)));
        assert!(matches!(
            parse_player_action("raise banana"),
            ParseResult::Invalid(_)
        ));
        assert!(matches!(
            parse_player_action("raise 0"),
            ParseResult::Invalid(_)
        ));
    }
}
