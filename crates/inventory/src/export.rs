//! CSV export of the inventory and the sales ledger.

use chrono::SecondsFormat;

use stockroom_catalog::Catalog;
use stockroom_core::ProductId;
use stockroom_sales::SaleLedger;

use crate::inventory::Inventory;

pub const INVENTORY_HEADER: &str = "ProductName,Category,SKU,Size,Color,Stock,ReorderLevel";
pub const SALES_HEADER: &str = "SaleID,Timestamp,ProductName,SKU,Channel,Quantity";

/// Placeholder for sales whose product has been deleted.
pub const MISSING_PRODUCT: &str = "N/A";

fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// One line per variant, in catalog order.
pub fn inventory_csv(catalog: &Catalog) -> String {
    let rows = catalog.variants().map(|(p, v)| {
        format!(
            "{},{},{},{},{},{},{}",
            quoted(&p.name),
            quoted(&p.category),
            v.sku,
            v.size,
            v.color,
            v.stock,
            v.reorder_level
        )
    });
    std::iter::once(INVENTORY_HEADER.to_string())
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per sale, newest first. Timestamps are RFC 3339 in UTC.
pub fn sales_csv(ledger: &SaleLedger, catalog: &Catalog) -> String {
    let name_of = |id: &ProductId| catalog.get(id).map(|p| quoted(&p.name));
    let rows = ledger.iter().map(|s| {
        format!(
            "{},{},{},{},{},{}",
            s.id,
            s.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            name_of(&s.product_id).unwrap_or_else(|| MISSING_PRODUCT.to_string()),
            s.sku,
            s.channel_id,
            s.quantity
        )
    });
    std::iter::once(SALES_HEADER.to_string())
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

impl Inventory {
    pub fn inventory_csv(&self) -> String {
        inventory_csv(self.catalog())
    }

    pub fn sales_csv(&self) -> String {
        sales_csv(self.ledger(), self.catalog())
    }
}
