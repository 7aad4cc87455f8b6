//! Catalog Store: the ordered list of products and their variants.
//!
//! Products are kept most-recently-added first. SKUs are unique across the
//! whole catalog, not just within one product.

use stockroom_core::{DomainError, DomainResult, ProductId};

use crate::product::{Product, ProductDraft, ProductVariant, Sku};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from existing products, in the given order.
    ///
    /// Fails if any product is malformed or a SKU appears more than once.
    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut catalog = Self::new();
        for product in products {
            catalog.check_replacement_fields(&product, None)?;
            if catalog.get(&product.id).is_some() {
                return Err(DomainError::validation(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            catalog.products.push(product);
        }
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Every `(product, variant)` pair in catalog order.
    pub fn variants(&self) -> impl Iterator<Item = (&Product, &ProductVariant)> {
        self.products
            .iter()
            .flat_map(|p| p.variants.iter().map(move |v| (p, v)))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up the variant identified by `(product_id, sku)`.
    pub fn find_variant(
        &self,
        product_id: &ProductId,
        sku: &Sku,
    ) -> Option<(&Product, &ProductVariant)> {
        let product = self.get(product_id)?;
        product.variant(sku).map(|v| (product, v))
    }

    /// Look up a variant by SKU alone.
    pub fn find_by_sku(&self, sku: &Sku) -> Option<(&Product, &ProductVariant)> {
        self.variants().find(|(_, v)| &v.sku == sku)
    }

    // ---------------------------------------------------------------------
    // Precondition checks (no mutation)
    // ---------------------------------------------------------------------

    /// Validate a new product submission against the current catalog.
    pub fn check_new(&self, draft: &ProductDraft) -> DomainResult<()> {
        draft.validate()?;
        self.ensure_skus_free(&draft.variants, None)
    }

    /// Validate a wholesale replacement of an existing product.
    pub fn check_replacement(&self, product: &Product) -> DomainResult<()> {
        if self.get(&product.id).is_none() {
            return Err(DomainError::not_found(format!("product {}", product.id)));
        }
        self.check_replacement_fields(product, Some(product.id))
    }

    pub fn check_delete(&self, id: &ProductId) -> DomainResult<()> {
        if self.get(id).is_none() {
            return Err(DomainError::not_found(format!("product {id}")));
        }
        Ok(())
    }

    fn check_replacement_fields(
        &self,
        product: &Product,
        owner: Option<ProductId>,
    ) -> DomainResult<()> {
        product.validate()?;
        self.ensure_skus_free(&product.variants, owner)
    }

    /// Every SKU in `variants` must be absent from products other than `owner`.
    fn ensure_skus_free(
        &self,
        variants: &[ProductVariant],
        owner: Option<ProductId>,
    ) -> DomainResult<()> {
        for v in variants {
            let taken = self
                .products
                .iter()
                .filter(|p| Some(p.id) != owner)
                .any(|p| p.variant(&v.sku).is_some());
            if taken {
                return Err(DomainError::validation(format!(
                    "SKU {} is already used by another product",
                    v.sku
                )));
            }
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Infallible mutations (callers check first)
    // ---------------------------------------------------------------------

    pub fn push_front(&mut self, product: Product) {
        self.products.insert(0, product);
    }

    /// Replace the product with the same id in place. Returns `false` if absent.
    pub fn put(&mut self, product: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let pos = self.products.iter().position(|p| &p.id == id)?;
        Some(self.products.remove(pos))
    }

    /// Decrease one variant's stock. Returns `false` (and changes nothing) if
    /// the variant is missing or holds fewer than `quantity` units.
    pub fn take_stock(&mut self, product_id: &ProductId, sku: &Sku, quantity: u32) -> bool {
        let Some(variant) = self
            .products
            .iter_mut()
            .find(|p| &p.id == product_id)
            .and_then(|p| p.variant_mut(sku))
        else {
            return false;
        };
        match variant.stock.checked_sub(quantity) {
            Some(rest) => {
                variant.stock = rest;
                true
            }
            None => false,
        }
    }
}
