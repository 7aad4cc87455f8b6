use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_catalog::{ChannelId, Sku};
use stockroom_core::{Entity, ProductId, SaleId};

/// A recorded sale. Immutable once created.
///
/// `product_id`, `sku` and `channel_id` are soft references: deleting the
/// product later leaves the sale in place as an orphan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: SaleId,
    pub product_id: ProductId,
    pub sku: Sku,
    pub channel_id: ChannelId,
    pub quantity: u32,
    pub timestamp: DateTime<Utc>,
}

impl Entity for Sale {
    type Id = SaleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
