//! Building restock recommendation requests from inventory state.

use chrono::{DateTime, Duration, Utc};

use stockroom_ai::{LowStockVariant, RECENT_SALES_WINDOW_DAYS, RecommendationRequest, SaleSnapshot};
use stockroom_sales::Sale;

use crate::inventory::Inventory;
use crate::views::LowStockItem;

impl From<LowStockItem<'_>> for LowStockVariant {
    fn from(item: LowStockItem<'_>) -> Self {
        Self {
            sku: item.variant.sku.to_string(),
            size: item.variant.size.clone(),
            color: item.variant.color.clone(),
            stock: item.variant.stock,
            reorder_level: item.variant.reorder_level,
            product_name: item.product.name.clone(),
        }
    }
}

fn sale_snapshot(sale: &Sale) -> SaleSnapshot {
    SaleSnapshot {
        id: sale.id.to_string(),
        product_id: sale.product_id.to_string(),
        sku: sale.sku.to_string(),
        channel_id: sale.channel_id.to_string(),
        quantity: sale.quantity,
        timestamp: sale.timestamp,
    }
}

impl Inventory {
    /// Low-stock variants plus the sales of the trailing window ending at `now`.
    ///
    /// Empty (and not worth sending) when nothing is low on stock.
    pub fn restock_request(&self, now: DateTime<Utc>) -> RecommendationRequest {
        let low_stock: Vec<LowStockVariant> = self
            .low_stock_items()
            .into_iter()
            .map(LowStockVariant::from)
            .collect();
        if low_stock.is_empty() {
            return RecommendationRequest::default();
        }

        let cutoff = now - Duration::days(RECENT_SALES_WINDOW_DAYS);
        let recent_sales = self.ledger().since(cutoff).map(sale_snapshot).collect();

        RecommendationRequest::new(low_stock, recent_sales)
    }
}
