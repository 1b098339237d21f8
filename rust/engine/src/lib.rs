//! # felt-engine: Texas Hold'em table rules core
//!
//! The rules engine for a single-process, single-table Hold'em game:
//! chip state, betting-round sequencing across the four streets, legal
//! raise arithmetic, side-pot partitioning under all-ins, and showdown
//! resolution over exhaustive 7-card evaluation.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - 5-card classification and best-of-7 evaluation
//! - [`seat`] - Per-seat chips, hole cards, and round state
//! - [`action`] - Actions, decisions, and lenient action-text parsing
//! - [`table`] - Table state, side-pot slicing, read-only snapshots
//! - [`betting`] - Betting round state machine and action application
//! - [`orchestrator`] - Full-hand sequencing and showdown payouts
//! - [`provider`] - Async decision-provider seam for human/AI seats
//! - [`logger`] - JSONL hand-history records
//! - [`errors`] - Error types for table operations
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_engine::cards::{Card, Rank, Suit};
//! use felt_engine::hand::{best_hand, Category};
//!
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//! assert_eq!(best_hand(&cards).category, Category::StraightFlush);
//! ```
//!
//! ## Determinism
//!
//! Deck order is reproducible from a seed, and the evaluator is exact for
//! any fixed card set:
//!
//! ```rust
//! use felt_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! d1.shuffle();
//! d2.shuffle();
//! assert_eq!(d1.draw(), d2.draw());
//! ```

pub mod action;
pub mod betting;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod orchestrator;
pub mod provider;
pub mod seat;
pub mod table;
