use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use stockroom_catalog::{Catalog, ChannelDirectory, ChannelId, Product, ProductDraft, Sku};
use stockroom_core::{Aggregate, DomainError, DomainResult, Event, ProductId, SaleId};
use stockroom_sales::{Sale, SaleLedger};

/// Aggregate: the catalog and the sale ledger, changed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    catalog: Catalog,
    ledger: SaleLedger,
    channels: ChannelDirectory,
    version: u64,
}

impl Inventory {
    /// Empty catalog and ledger over the given channels.
    pub fn new(channels: ChannelDirectory) -> Self {
        Self::from_parts(Catalog::new(), SaleLedger::new(), channels)
    }

    pub fn from_parts(catalog: Catalog, ledger: SaleLedger, channels: ChannelDirectory) -> Self {
        Self {
            catalog,
            ledger,
            channels,
            version: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &SaleLedger {
        &self.ledger
    }

    pub fn channels(&self) -> &ChannelDirectory {
        &self.channels
    }
}

/// Command: CreateProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProduct {
    pub product_id: ProductId,
    pub draft: ProductDraft,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ReplaceProduct (wholesale update of an existing product).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceProduct {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: DeleteProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteProduct {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RecordSale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSale {
    pub sale_id: SaleId,
    pub product_id: ProductId,
    pub sku: Sku,
    pub channel_id: ChannelId,
    /// Signed so that zero/negative requests can be rejected rather than unrepresentable.
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    CreateProduct(CreateProduct),
    ReplaceProduct(ReplaceProduct),
    DeleteProduct(DeleteProduct),
    RecordSale(RecordSale),
}

/// Event: ProductCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductReplaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductReplaced {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductDeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDeleted {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SaleRecorded. One event covers both the stock decrement and the
/// ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecorded {
    pub sale: Sale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ProductCreated(ProductCreated),
    ProductReplaced(ProductReplaced),
    ProductDeleted(ProductDeleted),
    SaleRecorded(SaleRecorded),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ProductCreated(_) => "inventory.product.created",
            InventoryEvent::ProductReplaced(_) => "inventory.product.replaced",
            InventoryEvent::ProductDeleted(_) => "inventory.product.deleted",
            InventoryEvent::SaleRecorded(_) => "inventory.sale.recorded",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ProductCreated(e) => e.occurred_at,
            InventoryEvent::ProductReplaced(e) => e.occurred_at,
            InventoryEvent::ProductDeleted(e) => e.occurred_at,
            InventoryEvent::SaleRecorded(e) => e.sale.timestamp,
        }
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ProductCreated(e) => {
                self.catalog.push_front(e.product.clone());
            }
            InventoryEvent::ProductReplaced(e) => {
                self.catalog.put(e.product.clone());
            }
            InventoryEvent::ProductDeleted(e) => {
                // Ledger entries for the product stay behind as orphans.
                self.catalog.remove(&e.product_id);
            }
            InventoryEvent::SaleRecorded(e) => {
                // Stock and ledger move together or not at all.
                let sale = &e.sale;
                if self
                    .catalog
                    .take_stock(&sale.product_id, &sale.sku, sale.quantity)
                {
                    self.ledger.record(sale.clone());
                }
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::CreateProduct(cmd) => self.handle_create(cmd),
            InventoryCommand::ReplaceProduct(cmd) => self.handle_replace(cmd),
            InventoryCommand::DeleteProduct(cmd) => self.handle_delete(cmd),
            InventoryCommand::RecordSale(cmd) => self.handle_record_sale(cmd),
        }
    }
}

impl Inventory {
    fn handle_create(&self, cmd: &CreateProduct) -> DomainResult<Vec<InventoryEvent>> {
        if self.catalog.get(&cmd.product_id).is_some() {
            return Err(DomainError::validation(format!(
                "product {} already exists",
                cmd.product_id
            )));
        }
        self.catalog.check_new(&cmd.draft)?;

        Ok(vec![InventoryEvent::ProductCreated(ProductCreated {
            product: cmd.draft.clone().into_product(cmd.product_id),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_replace(&self, cmd: &ReplaceProduct) -> DomainResult<Vec<InventoryEvent>> {
        self.catalog.check_replacement(&cmd.product)?;

        Ok(vec![InventoryEvent::ProductReplaced(ProductReplaced {
            product: cmd.product.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_delete(&self, cmd: &DeleteProduct) -> DomainResult<Vec<InventoryEvent>> {
        self.catalog.check_delete(&cmd.product_id)?;

        Ok(vec![InventoryEvent::ProductDeleted(ProductDeleted {
            product_id: cmd.product_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    /// Every precondition of a sale is checked here, before anything is applied.
    fn handle_record_sale(&self, cmd: &RecordSale) -> DomainResult<Vec<InventoryEvent>> {
        if cmd.quantity <= 0 {
            return Err(DomainError::InvalidQuantity(cmd.quantity));
        }
        if self.ledger.iter().any(|s| s.id == cmd.sale_id) {
            return Err(DomainError::validation(format!(
                "sale {} already recorded",
                cmd.sale_id
            )));
        }

        let (_, variant) = self
            .catalog
            .find_variant(&cmd.product_id, &cmd.sku)
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "variant {} of product {}",
                    cmd.sku, cmd.product_id
                ))
            })?;

        if !self.channels.contains(&cmd.channel_id) {
            return Err(DomainError::validation(format!(
                "unknown sales channel {}",
                cmd.channel_id
            )));
        }

        let insufficient =
            || DomainError::insufficient_stock(cmd.sku.as_str(), cmd.quantity, variant.stock);
        if cmd.quantity > i64::from(variant.stock) {
            return Err(insufficient());
        }
        let quantity = u32::try_from(cmd.quantity).map_err(|_| insufficient())?;

        Ok(vec![InventoryEvent::SaleRecorded(SaleRecorded {
            sale: Sale {
                id: cmd.sale_id,
                product_id: cmd.product_id,
                sku: cmd.sku.clone(),
                channel_id: cmd.channel_id.clone(),
                quantity,
                timestamp: cmd.occurred_at,
            },
        })])
    }

    /// Run a command through `handle` + `apply`, logging the outcome.
    pub fn dispatch(&mut self, command: &InventoryCommand) -> DomainResult<Vec<InventoryEvent>> {
        match self.execute(command) {
            Ok(events) => {
                for event in &events {
                    info!(
                        event_type = event.event_type(),
                        version = self.version,
                        "inventory event applied"
                    );
                }
                Ok(events)
            }
            Err(err) => {
                warn!(error = %err, "inventory command rejected");
                Err(err)
            }
        }
    }

    // ---------------------------------------------------------------------
    // Write paths
    // ---------------------------------------------------------------------

    /// Add a new product under a fresh id, most-recently-added first.
    pub fn create_product(&mut self, draft: ProductDraft) -> DomainResult<Product> {
        let product_id = ProductId::new();
        self.dispatch(&InventoryCommand::CreateProduct(CreateProduct {
            product_id,
            draft: draft.clone(),
            occurred_at: Utc::now(),
        }))?;
        Ok(draft.into_product(product_id))
    }

    /// Replace an existing product (matched by id) wholesale.
    pub fn replace_product(&mut self, product: Product) -> DomainResult<Product> {
        self.dispatch(&InventoryCommand::ReplaceProduct(ReplaceProduct {
            product: product.clone(),
            occurred_at: Utc::now(),
        }))?;
        Ok(product)
    }

    /// Remove a product and its variants. Recorded sales are untouched.
    pub fn delete_product(&mut self, product_id: ProductId) -> DomainResult<()> {
        self.dispatch(&InventoryCommand::DeleteProduct(DeleteProduct {
            product_id,
            occurred_at: Utc::now(),
        }))?;
        Ok(())
    }

    /// Sell `quantity` units of one variant: decrement its stock and put the
    /// sale at the front of the ledger, or do neither.
    pub fn record_sale(
        &mut self,
        product_id: ProductId,
        sku: &Sku,
        channel_id: &ChannelId,
        quantity: i64,
    ) -> DomainResult<Sale> {
        let events = self.dispatch(&InventoryCommand::RecordSale(RecordSale {
            sale_id: SaleId::new(),
            product_id,
            sku: sku.clone(),
            channel_id: channel_id.clone(),
            quantity,
            occurred_at: Utc::now(),
        }))?;

        events
            .into_iter()
            .find_map(|event| match event {
                InventoryEvent::SaleRecorded(e) => Some(e.sale),
                _ => None,
            })
            .ok_or_else(|| DomainError::not_found(format!("recorded sale for {sku}")))
    }
}
