use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use stockroom_ai::{
    RecommendationError, RecommendationGateway, RecommendationService, RestockRecommendation,
};
use stockroom_catalog::{ChannelId, Product, ProductDraft, Sku};
use stockroom_core::{DomainResult, ProductId};
use stockroom_sales::Sale;

use crate::inventory::Inventory;

/// Thread-safe handle to one [`Inventory`].
///
/// Write paths run under the write lock from precondition check to effect, so
/// two sales racing for the same variant cannot both pass the stock check.
#[derive(Debug, Clone, Default)]
pub struct SharedInventory {
    inner: Arc<RwLock<Inventory>>,
}

impl SharedInventory {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inventory)),
        }
    }

    // Commands are all-or-nothing, so state behind a poisoned lock is still consistent.
    fn read_guard(&self) -> RwLockReadGuard<'_, Inventory> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Inventory> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a read-only query against the current state.
    pub fn read<R>(&self, f: impl FnOnce(&Inventory) -> R) -> R {
        f(&self.read_guard())
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> Inventory {
        self.read_guard().clone()
    }

    pub fn create_product(&self, draft: ProductDraft) -> DomainResult<Product> {
        self.write_guard().create_product(draft)
    }

    pub fn replace_product(&self, product: Product) -> DomainResult<Product> {
        self.write_guard().replace_product(product)
    }

    pub fn delete_product(&self, product_id: ProductId) -> DomainResult<()> {
        self.write_guard().delete_product(product_id)
    }

    pub fn record_sale(
        &self,
        product_id: ProductId,
        sku: &Sku,
        channel_id: &ChannelId,
        quantity: i64,
    ) -> DomainResult<Sale> {
        self.write_guard()
            .record_sale(product_id, sku, channel_id, quantity)
    }

    /// Ask for restock recommendations based on the state at call time.
    ///
    /// The lock is released before the gateway is awaited; writes made while
    /// the request is pending are not reflected in its result.
    pub async fn recommend_restock<G>(
        &self,
        service: &RecommendationService<G>,
    ) -> Result<Vec<RestockRecommendation>, RecommendationError>
    where
        G: RecommendationGateway,
    {
        let request = self.read(|inv| inv.restock_request(Utc::now()));
        service.recommend(request).await
    }
}
