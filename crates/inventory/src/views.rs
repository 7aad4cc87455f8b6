//! Derived views over the current catalog and ledger.
//!
//! Everything here is a pure function of the state passed in and is
//! recomputed on every call; nothing is cached.

use std::collections::HashMap;

use serde::Serialize;

use stockroom_catalog::{Catalog, ChannelDirectory, ChannelId, Product, ProductVariant};
use stockroom_core::ProductId;
use stockroom_sales::{Sale, SaleLedger};

use crate::inventory::Inventory;

/// Number of ledger entries shown as "recent sales".
pub const RECENT_SALES: usize = 5;

/// Number of products shown in the top-sellers chart.
pub const TOP_PRODUCTS: usize = 5;

/// A variant at or below its reorder level, with its owning product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowStockItem<'a> {
    pub product: &'a Product,
    pub variant: &'a ProductVariant,
}

/// Units sold through one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSales {
    pub channel_id: ChannelId,
    pub name: String,
    pub quantity: u64,
}

/// Units sold of one product, grouped by product name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSales {
    pub name: String,
    pub quantity: u64,
}

/// A ledger entry resolved for display.
///
/// `product_name` and `variant_label` are `None` when the SKU no longer
/// exists in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRow<'a> {
    pub sale: &'a Sale,
    pub product_name: Option<&'a str>,
    pub variant_label: Option<String>,
    pub channel_name: &'a str,
}

/// Every variant with `stock <= reorder_level`, in catalog order.
pub fn low_stock_items(catalog: &Catalog) -> Vec<LowStockItem<'_>> {
    catalog
        .variants()
        .filter(|(_, v)| v.is_low_stock())
        .map(|(product, variant)| LowStockItem { product, variant })
        .collect()
}

pub fn total_stock(catalog: &Catalog) -> u64 {
    catalog.iter().map(Product::total_stock).sum()
}

pub fn total_skus(catalog: &Catalog) -> usize {
    catalog.iter().map(|p| p.variants.len()).sum()
}

/// The `n` newest ledger entries.
pub fn recent_sales(ledger: &SaleLedger, n: usize) -> &[Sale] {
    ledger.recent(n)
}

/// Units sold per known channel, in directory order.
///
/// Channels without sales report zero; sales on channels outside the
/// directory are left out.
pub fn sales_by_channel(ledger: &SaleLedger, channels: &ChannelDirectory) -> Vec<ChannelSales> {
    let mut totals: HashMap<&ChannelId, u64> = HashMap::new();
    for sale in ledger.iter() {
        *totals.entry(&sale.channel_id).or_default() += u64::from(sale.quantity);
    }

    channels
        .channels()
        .iter()
        .map(|c| ChannelSales {
            channel_id: c.id.clone(),
            name: c.name.clone(),
            quantity: totals.get(&c.id).copied().unwrap_or(0),
        })
        .collect()
}

/// Units sold per product name, highest first, at most `top_n` entries.
///
/// Sales whose product has been deleted are skipped. Equal totals keep the
/// order in which the names were first met in the ledger.
pub fn sales_by_product(catalog: &Catalog, ledger: &SaleLedger, top_n: usize) -> Vec<ProductSales> {
    let names: HashMap<&ProductId, &str> =
        catalog.iter().map(|p| (&p.id, p.name.as_str())).collect();

    let mut totals: Vec<ProductSales> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for sale in ledger.iter() {
        let Some(&name) = names.get(&sale.product_id) else {
            continue;
        };
        let slot = *index.entry(name).or_insert_with(|| {
            totals.push(ProductSales {
                name: name.to_string(),
                quantity: 0,
            });
            totals.len() - 1
        });
        totals[slot].quantity += u64::from(sale.quantity);
    }

    // `sort_by` is stable, which keeps first-encountered order on ties.
    totals.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    totals.truncate(top_n);
    totals
}

/// Resolve ledger entries for display (product by SKU, channel by id).
pub fn sale_rows<'a>(
    catalog: &'a Catalog,
    sales: &'a [Sale],
    channels: &'a ChannelDirectory,
) -> Vec<SaleRow<'a>> {
    sales
        .iter()
        .map(|sale| {
            let found = catalog.find_by_sku(&sale.sku);
            SaleRow {
                sale,
                product_name: found.map(|(p, _)| p.name.as_str()),
                variant_label: found.map(|(_, v)| v.label()),
                channel_name: channels.name_of(&sale.channel_id),
            }
        })
        .collect()
}

impl Inventory {
    pub fn low_stock_items(&self) -> Vec<LowStockItem<'_>> {
        low_stock_items(self.catalog())
    }

    pub fn total_stock(&self) -> u64 {
        total_stock(self.catalog())
    }

    pub fn total_skus(&self) -> usize {
        total_skus(self.catalog())
    }

    pub fn recent_sales(&self, n: usize) -> &[Sale] {
        recent_sales(self.ledger(), n)
    }

    pub fn sales_by_channel(&self) -> Vec<ChannelSales> {
        sales_by_channel(self.ledger(), self.channels())
    }

    pub fn sales_by_product(&self, top_n: usize) -> Vec<ProductSales> {
        sales_by_product(self.catalog(), self.ledger(), top_n)
    }

    /// Display rows for the whole ledger, newest first.
    pub fn sale_rows(&self) -> Vec<SaleRow<'_>> {
        sale_rows(self.catalog(), self.ledger().entries(), self.channels())
    }

    /// Display rows for the dashboard's recent-sales table.
    pub fn recent_sale_rows(&self, n: usize) -> Vec<SaleRow<'_>> {
        sale_rows(self.catalog(), self.recent_sales(n), self.channels())
    }
}
