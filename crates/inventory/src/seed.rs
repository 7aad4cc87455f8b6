//! Demo dataset: a small apparel and footwear catalog with a few sales.

use chrono::{DateTime, Duration, Utc};

use stockroom_catalog::{
    Catalog, ChannelDirectory, ChannelId, Product, ProductDraft, ProductVariant, Sku,
};
use stockroom_core::{DomainResult, ProductId, SaleId};
use stockroom_sales::{Sale, SaleLedger};

use crate::inventory::Inventory;

fn v(sku: &str, size: &str, color: &str, stock: u32, reorder_level: u32) -> ProductVariant {
    ProductVariant::new(sku, size, color, stock, reorder_level)
}

fn demo_products() -> Vec<Product> {
    vec![
        ProductDraft::new(
            "Classic Crewneck T-Shirt",
            "Apparel",
            vec![
                v("TS-BLK-S", "S", "Black", 50, 10),
                v("TS-BLK-M", "M", "Black", 30, 10),
                v("TS-BLK-L", "L", "Black", 8, 10),
                v("TS-WHT-S", "S", "White", 60, 15),
                v("TS-WHT-M", "M", "White", 45, 15),
                v("TS-WHT-L", "L", "White", 22, 15),
            ],
        ),
        ProductDraft::new(
            "V-Neck Sweater",
            "Apparel",
            vec![
                v("SW-NVY-M", "M", "Navy", 25, 8),
                v("SW-NVY-L", "L", "Navy", 15, 8),
                v("SW-GRY-M", "M", "Gray", 30, 8),
                v("SW-GRY-L", "L", "Gray", 5, 8),
            ],
        ),
        ProductDraft::new(
            "Leather Sneakers",
            "Footwear",
            vec![
                v("SNK-BRN-9", "9", "Brown", 12, 5),
                v("SNK-BRN-10", "10", "Brown", 18, 5),
                v("SNK-BRN-11", "11", "Brown", 4, 5),
                v("SNK-BLK-9", "9", "Black", 20, 5),
                v("SNK-BLK-10", "10", "Black", 14, 5),
            ],
        ),
        ProductDraft::new(
            "Denim Jeans",
            "Apparel",
            vec![
                v("JN-BLU-30", "30", "Blue", 40, 12),
                v("JN-BLU-32", "32", "Blue", 9, 12),
                v("JN-BLU-34", "34", "Blue", 25, 12),
                v("JN-BLK-32", "32", "Black", 35, 12),
            ],
        ),
    ]
    .into_iter()
    .map(|draft| draft.into_product(ProductId::new()))
    .collect()
}

impl Inventory {
    /// The demo catalog over the default channels, with four sales placed
    /// 1, 3, 5 and 8 hours before `now`.
    pub fn demo(now: DateTime<Utc>) -> DomainResult<Self> {
        let products = demo_products();
        let sale = |product: &Product, sku: &str, channel: &str, quantity: u32, hours_ago: i64| {
            Sale {
                id: SaleId::new(),
                product_id: product.id,
                sku: Sku::from(sku),
                channel_id: ChannelId::from(channel),
                quantity,
                timestamp: now - Duration::hours(hours_ago),
            }
        };

        let ledger = SaleLedger::from_entries(vec![
            sale(&products[0], "TS-BLK-M", "website", 2, 1),
            sale(&products[2], "SNK-BRN-10", "amazon", 1, 3),
            sale(&products[1], "SW-GRY-L", "ebay", 1, 5),
            sale(&products[0], "TS-WHT-S", "website", 5, 8),
        ]);

        Ok(Self::from_parts(
            Catalog::from_products(products)?,
            ledger,
            ChannelDirectory::default(),
        ))
    }
}
