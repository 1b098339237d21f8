//! Wrappers that keep a misbehaving decision source from stalling a hand.
//!
//! [`Deadline`] turns a slow provider into a timed-out one; [`Guarded`]
//! turns any provider failure into a plain call. Stacked as
//! `Guarded::new(Deadline::new(inner, limit))` they guarantee the
//! orchestrator always gets a decision back.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use felt_engine::action::Decision;
use felt_engine::cards::Card;
use felt_engine::provider::{DecisionProvider, ProviderError};
use felt_engine::table::TableView;

/// Bounds the wrapped provider's thinking time. An overrun surfaces as
/// [`ProviderError::Timeout`]; inner errors pass through untouched.
pub struct Deadline<P> {
    inner: P,
    limit: Duration,
}

impl<P> Deadline<P> {
    pub fn new(inner: P, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl<P: DecisionProvider> DecisionProvider for Deadline<P> {
    async fn decide(
        &mut self,
        view: &TableView,
        seat: usize,
        hole: [Card; 2],
    ) -> Result<Decision, ProviderError> {
        match tokio::time::timeout(self.limit, self.inner.decide(view, seat, hole)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(seat, "{} exceeded its decision deadline", self.inner.name());
                Err(ProviderError::Timeout)
            }
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Substitutes a plain call for any error from the wrapped provider, so a
/// broken seat calls its way through the hand instead of halting it.
pub struct Guarded<P> {
    inner: P,
}

impl<P> Guarded<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: DecisionProvider> DecisionProvider for Guarded<P> {
    async fn decide(
        &mut self,
        view: &TableView,
        seat: usize,
        hole: [Card; 2],
    ) -> Result<Decision, ProviderError> {
        match self.inner.decide(view, seat, hole).await {
            Ok(decision) => Ok(decision),
            Err(e) => {
                warn!(seat, "{} failed ({}); calling instead", self.inner.name(), e);
                Ok(Decision::call())
            }
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
