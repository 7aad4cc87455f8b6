use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

/// Sales older than this many days are not sent to the gateway.
pub const RECENT_SALES_WINDOW_DAYS: i64 = 7;

/// A low-stock variant as sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockVariant {
    pub sku: String,
    pub size: String,
    pub color: String,
    pub stock: u32,
    pub reorder_level: u32,
    pub product_name: String,
}

/// A ledger entry as sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSnapshot {
    pub id: String,
    pub product_id: String,
    pub sku: String,
    pub channel_id: String,
    pub quantity: u32,
    pub timestamp: DateTime<Utc>,
}

/// Input of one recommendation request: low-stock variants plus the
/// trailing-window sales history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub low_stock: Vec<LowStockVariant>,
    pub recent_sales: Vec<SaleSnapshot>,
}

impl RecommendationRequest {
    pub fn new(low_stock: Vec<LowStockVariant>, recent_sales: Vec<SaleSnapshot>) -> Self {
        Self {
            low_stock,
            recent_sales,
        }
    }

    /// Nothing is low on stock, so there is nothing to ask the gateway about.
    pub fn is_empty(&self) -> bool {
        self.low_stock.is_empty()
    }

    /// Both arrays under their camelCase wire names.
    pub fn payload(&self) -> JsonValue {
        json!({
            "lowStock": self.low_stock,
            "recentSales": self.recent_sales,
        })
    }

    /// Natural-language instructions for a generative model, embedding both
    /// arrays of [`Self::payload`].
    pub fn prompt(&self) -> String {
        let payload = self.payload();
        let pretty = |v: &JsonValue| {
            serde_json::to_string_pretty(v).unwrap_or_else(|_| "[]".to_string())
        };
        let low_stock = pretty(&payload["lowStock"]);
        let sales = pretty(&payload["recentSales"]);

        format!(
            "You advise a small apparel retailer on restocking.\n\
             Every variant below is at or under its reorder level. Using the sales of the \
             last {RECENT_SALES_WINDOW_DAYS} days, estimate how fast each SKU sells, pick the \
             ones closest to running out and suggest a reorder quantity that keeps roughly \
             30 days of stock on hand. Give a one-sentence reason for each.\n\n\
             Low-stock variants:\n{low_stock}\n\n\
             Sales in the last {RECENT_SALES_WINDOW_DAYS} days:\n{sales}\n\n\
             Answer with a JSON array only."
        )
    }
}
