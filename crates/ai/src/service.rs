use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use crate::recommendation::{RecommendationError, RestockRecommendation, parse_recommendations};
use crate::request::RecommendationRequest;

/// External service that turns a request into raw, untrusted JSON.
///
/// Transport and auth are the gateway's business; the service validates what
/// comes back.
#[async_trait]
pub trait RecommendationGateway: Send + Sync {
    async fn generate(
        &self,
        request: &RecommendationRequest,
    ) -> Result<JsonValue, RecommendationError>;
}

/// Single-flight front for a [`RecommendationGateway`].
///
/// - At most one request is in flight; a second call while one is pending is
///   turned away with [`RecommendationError::Busy`] without reaching the gateway.
/// - Requests with no low-stock variants short-circuit to an empty result.
/// - One attempt per call: failures and malformed responses are returned, never retried.
/// - Dropping the returned future before it completes releases the slot and
///   discards the result.
#[derive(Debug)]
pub struct RecommendationService<G> {
    gateway: G,
    in_flight: AtomicBool,
}

impl<G> RecommendationService<G>
where
    G: RecommendationGateway,
{
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Whether a request is currently pending (the loading state).
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<Vec<RestockRecommendation>, RecommendationError> {
        let _slot = InFlightSlot::acquire(&self.in_flight).ok_or(RecommendationError::Busy)?;

        if request.is_empty() {
            debug!("no low-stock variants; skipping recommendation gateway");
            return Ok(Vec::new());
        }

        info!(
            low_stock = request.low_stock.len(),
            recent_sales = request.recent_sales.len(),
            "requesting restock recommendations"
        );

        let raw = self.gateway.generate(&request).await.inspect_err(|e| {
            warn!(error = %e, "recommendation gateway failed");
        })?;

        let recs = parse_recommendations(raw).inspect_err(|e| {
            warn!(error = %e, "discarding malformed recommendation response");
        })?;

        info!(count = recs.len(), "restock recommendations received");
        Ok(recs)
    }
}

/// Holds the in-flight flag for the lifetime of one request.
struct InFlightSlot<'a>(&'a AtomicBool);

impl<'a> InFlightSlot<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
