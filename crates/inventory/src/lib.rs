//! Inventory state container.
//!
//! [`Inventory`] owns the catalog and the sale ledger together. Its four write
//! paths (`create_product`, `replace_product`, `delete_product`,
//! `record_sale`) are the only way either changes; everything the dashboard
//! shows is recomputed from the current state through [`views`].

pub mod export;
pub mod inventory;
pub mod restock;
pub mod seed;
pub mod shared;
pub mod views;

pub use inventory::{
    CreateProduct, DeleteProduct, Inventory, InventoryCommand, InventoryEvent, ProductCreated,
    ProductDeleted, ProductReplaced, RecordSale, ReplaceProduct, SaleRecorded,
};
pub use shared::SharedInventory;
pub use views::{ChannelSales, LowStockItem, ProductSales, SaleRow};
