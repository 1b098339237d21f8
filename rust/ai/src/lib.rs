//! # felt-ai: computer opponents for the felt table
//!
//! Decision providers that fill the non-human seats of a table. Every
//! opponent implements the engine's [`DecisionProvider`] trait, so the
//! orchestrator treats them exactly like a human seat.
//!
//! ## Core Components
//!
//! - [`baseline`] - Rule-based opponent built on hand strength and pot odds
//! - [`guard`] - Wrappers that keep a slow or broken provider from stalling
//!   a hand
//! - [`create_provider`] - Factory function for creating opponents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_ai::create_provider;
//!
//! let ai = create_provider("baseline");
//! assert_eq!(ai.name(), "Baseline");
//! ```

use felt_engine::provider::DecisionProvider;

pub mod baseline;
pub mod guard;

pub use baseline::BaselineProvider;
pub use guard::{Deadline, Guarded};

/// Create an opponent by type string.
///
/// # Supported types
///
/// - `"baseline"` - Rule-based opponent for regular play and benchmarking
///
/// # Panics
///
/// Panics if an unknown opponent type is requested.
pub fn create_provider(kind: &str) -> Box<dyn DecisionProvider> {
    match kind {
        "baseline" => Box::new(BaselineProvider::new()),
        _ => panic!("Unknown opponent type: {}", kind),
    }
}
