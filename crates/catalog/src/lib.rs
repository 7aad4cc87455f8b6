//! Catalog domain module.
//!
//! Owns products and their SKU-level variants, plus the static set of sales
//! channels. Pure domain logic: no IO, no clocks, no storage.

pub mod catalog;
pub mod channel;
pub mod product;

pub use catalog::Catalog;
pub use channel::{Channel, ChannelDirectory, ChannelId, UNKNOWN_CHANNEL};
pub use product::{Product, ProductDraft, ProductVariant, Sku};
