//! End-to-end scenarios over the inventory container.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Value as JsonValue, json};

use stockroom_ai::{
    RecommendationError, RecommendationGateway, RecommendationRequest, RecommendationService,
};
use stockroom_catalog::{ChannelDirectory, ChannelId, Product, ProductDraft, ProductVariant, Sku};
use stockroom_core::DomainError;
use stockroom_inventory::{Inventory, ProductSales, SharedInventory};

fn setup() -> (Inventory, Product) {
    stockroom_observability::init();

    let mut inv = Inventory::new(ChannelDirectory::default());
    let product = inv
        .create_product(ProductDraft::new(
            "Product A",
            "Apparel",
            vec![ProductVariant::new("SKU-A", "M", "Black", 10, 5)],
        ))
        .unwrap();
    (inv, product)
}

fn is_low(inv: &Inventory, sku: &str) -> bool {
    inv.low_stock_items()
        .iter()
        .any(|i| i.variant.sku.as_str() == sku)
}

fn stock(inv: &Inventory, product: &Product) -> u32 {
    inv.catalog()
        .find_variant(&product.id, &Sku::from("SKU-A"))
        .unwrap()
        .1
        .stock
}

#[test]
fn selling_down_into_low_stock_then_refusing_oversell() {
    let (mut inv, product) = setup();
    let sku = Sku::from("SKU-A");
    let website = ChannelId::from("website");

    inv.record_sale(product.id, &sku, &website, 4).unwrap();
    assert_eq!(stock(&inv, &product), 6);
    assert!(!is_low(&inv, "SKU-A"));

    inv.record_sale(product.id, &sku, &website, 3).unwrap();
    assert_eq!(stock(&inv, &product), 3);
    assert!(is_low(&inv, "SKU-A"));

    let err = inv.record_sale(product.id, &sku, &website, 10).unwrap_err();
    assert!(matches!(err, DomainError::InsufficientStock { .. }));
    assert_eq!(stock(&inv, &product), 3);
    assert_eq!(inv.ledger().len(), 2);
}

#[test]
fn top_products_by_units_sold() {
    let mut inv = Inventory::new(ChannelDirectory::default());
    let a = inv
        .create_product(ProductDraft::new(
            "A",
            "Apparel",
            vec![ProductVariant::new("A-1", "M", "Black", 50, 5)],
        ))
        .unwrap();
    let b = inv
        .create_product(ProductDraft::new(
            "B",
            "Apparel",
            vec![ProductVariant::new("B-1", "M", "Black", 50, 5)],
        ))
        .unwrap();
    let web = ChannelId::from("website");

    inv.record_sale(a.id, &Sku::from("A-1"), &web, 5).unwrap();
    inv.record_sale(b.id, &Sku::from("B-1"), &web, 9).unwrap();
    inv.record_sale(a.id, &Sku::from("A-1"), &web, 3).unwrap();

    assert_eq!(
        inv.sales_by_product(2),
        vec![
            ProductSales {
                name: "B".to_string(),
                quantity: 9,
            },
            ProductSales {
                name: "A".to_string(),
                quantity: 8,
            },
        ]
    );
}

#[test]
fn add_then_delete_restores_variant_set() {
    let mut inv = Inventory::demo(Utc::now()).unwrap();
    let before = inv.catalog().clone();

    let added = inv
        .create_product(ProductDraft::new(
            "Canvas Tote",
            "Accessories",
            vec![ProductVariant::new("TOTE-NAT", "One", "Natural", 12, 3)],
        ))
        .unwrap();
    assert_eq!(inv.catalog().products()[0].id, added.id);

    inv.delete_product(added.id).unwrap();
    assert_eq!(inv.catalog(), &before);
}

#[test]
fn deleting_a_sold_product_orphans_its_sales() {
    let mut inv = Inventory::demo(Utc::now()).unwrap();
    let tee = inv.catalog().products()[0].clone();
    inv.delete_product(tee.id).unwrap();

    assert_eq!(inv.ledger().len(), 4);
    let rows = inv.sale_rows();
    let orphaned = rows.iter().filter(|r| r.product_name.is_none()).count();
    assert_eq!(orphaned, 2);

    let names: Vec<String> = inv.sales_by_product(5).into_iter().map(|p| p.name).collect();
    assert!(!names.contains(&tee.name));
    assert!(inv.sales_csv().contains("N/A"));
}

#[test]
fn dashboard_numbers_for_demo_data() {
    let inv = Inventory::demo(Utc::now()).unwrap();
    assert_eq!(inv.total_stock(), 467);
    assert_eq!(inv.recent_sales(5).len(), 4);

    let channels: Vec<(String, u64)> = inv
        .sales_by_channel()
        .into_iter()
        .map(|c| (c.name, c.quantity))
        .collect();
    assert_eq!(
        channels,
        vec![
            ("Website".to_string(), 7),
            ("Amazon".to_string(), 1),
            ("eBay".to_string(), 1),
        ]
    );

    let rows = inv.recent_sale_rows(1);
    assert_eq!(rows[0].product_name, Some("Classic Crewneck T-Shirt"));
    assert_eq!(rows[0].variant_label.as_deref(), Some("Black, M"));
    assert_eq!(rows[0].channel_name, "Website");
}

struct EchoGateway;

#[async_trait]
impl RecommendationGateway for EchoGateway {
    async fn generate(
        &self,
        request: &RecommendationRequest,
    ) -> Result<JsonValue, RecommendationError> {
        let recs: Vec<JsonValue> = request
            .low_stock
            .iter()
            .map(|v| {
                json!({
                    "sku": v.sku,
                    "productName": v.product_name,
                    "currentStock": v.stock,
                    "recommendation": "Cover thirty days of demand.",
                    "suggestedRestockQuantity": v.reorder_level * 3,
                })
            })
            .collect();
        Ok(JsonValue::Array(recs))
    }
}

#[tokio::test]
async fn restock_recommendations_cover_low_stock_variants() {
    let shared = SharedInventory::new(Inventory::demo(Utc::now()).unwrap());
    let service = RecommendationService::new(EchoGateway);

    let recs = shared.recommend_restock(&service).await.unwrap();
    let skus: Vec<&str> = recs.iter().map(|r| r.sku.as_str()).collect();
    assert_eq!(skus, vec!["TS-BLK-L", "SW-GRY-L", "SNK-BRN-11", "JN-BLU-32"]);
    assert_eq!(recs[0].suggested_restock_quantity, 30);
}
