//! `stockroom-ai`
//!
//! **Responsibility:** restock recommendation boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on catalog/ledger types; callers hand it snapshots.
//! - It must not mutate domain state.
//! - Gateway output is untrusted and is shape-checked before it is returned.

pub mod config;
pub mod gemini;
pub mod recommendation;
pub mod request;
pub mod service;

pub use config::GatewayConfig;
pub use gemini::GenerativeGateway;
pub use recommendation::{RecommendationError, RestockRecommendation, parse_recommendations};
pub use request::{LowStockVariant, RECENT_SALES_WINDOW_DAYS, RecommendationRequest, SaleSnapshot};
pub use service::{RecommendationGateway, RecommendationService};
