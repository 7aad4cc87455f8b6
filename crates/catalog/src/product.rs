use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

/// Stock-keeping unit: identifies one product variant across the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn new(sku: impl Into<String>) -> Self {
        Self(sku.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sku {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One sellable variant of a product (a size/color combination).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub sku: Sku,
    pub size: String,
    pub color: String,
    pub stock: u32,
    /// Threshold at or below which the variant counts as low stock.
    pub reorder_level: u32,
}

impl ProductVariant {
    pub fn new(
        sku: impl Into<String>,
        size: impl Into<String>,
        color: impl Into<String>,
        stock: u32,
        reorder_level: u32,
    ) -> Self {
        Self {
            sku: Sku::new(sku),
            size: size.into(),
            color: color.into(),
            stock,
            reorder_level,
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.reorder_level
    }

    /// Human-readable variant label, e.g. `"Black, M"`.
    pub fn label(&self) -> String {
        format!("{}, {}", self.color, self.size)
    }
}

impl Entity for ProductVariant {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}

/// Product submission that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub variants: Vec<ProductVariant>,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        variants: Vec<ProductVariant>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            variants,
        }
    }

    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            variants: self.variants,
        }
    }

    /// Structural validation of the submission on its own.
    ///
    /// Catalog-wide SKU uniqueness is checked by [`crate::Catalog`].
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(&self.name, &self.category, &self.variants)
    }
}

/// Catalog entry: a named product owning at least one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub variants: Vec<ProductVariant>,
}

impl Product {
    pub fn variant(&self, sku: &Sku) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.sku == sku)
    }

    pub fn variant_mut(&mut self, sku: &Sku) -> Option<&mut ProductVariant> {
        self.variants.iter_mut().find(|v| &v.sku == sku)
    }

    pub fn total_stock(&self) -> u64 {
        self.variants.iter().map(|v| u64::from(v.stock)).sum()
    }

    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(&self.name, &self.category, &self.variants)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validate_fields(name: &str, category: &str, variants: &[ProductVariant]) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if category.trim().is_empty() {
        return Err(DomainError::validation("category cannot be empty"));
    }
    if variants.is_empty() {
        return Err(DomainError::validation(
            "a product must have at least one variant",
        ));
    }

    let mut seen: HashSet<&Sku> = HashSet::with_capacity(variants.len());
    for v in variants {
        if v.sku.as_str().trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if v.size.trim().is_empty() || v.color.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "variant {} must have a size and a color",
                v.sku
            )));
        }
        if !seen.insert(&v.sku) {
            return Err(DomainError::validation(format!(
                "duplicate SKU {} in submission",
                v.sku
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> ProductDraft {
        ProductDraft::new(
            "Classic Crewneck T-Shirt",
            "Apparel",
            vec![
                ProductVariant::new("TS-BLK-S", "S", "Black", 50, 10),
                ProductVariant::new("TS-BLK-L", "L", "Black", 8, 10),
            ],
        )
    }

    #[test]
    fn valid_draft_passes() {
        tee().validate().unwrap();
    }

    #[test]
    fn draft_rejects_blank_name() {
        let mut draft = tee();
        draft.name = "   ".to_string();
        match draft.validate().unwrap_err() {
            DomainError::Validation(_) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn draft_rejects_missing_variants() {
        let mut draft = tee();
        draft.variants.clear();
        match draft.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("at least one variant")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn draft_rejects_variant_without_color() {
        let mut draft = tee();
        draft.variants[0].color = String::new();
        assert!(matches!(draft.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn draft_rejects_repeated_sku() {
        let mut draft = tee();
        draft.variants[1].sku = Sku::from("TS-BLK-S");
        match draft.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("TS-BLK-S")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn low_stock_is_inclusive_of_reorder_level() {
        let at = ProductVariant::new("A", "M", "Navy", 8, 8);
        let above = ProductVariant::new("B", "M", "Navy", 9, 8);
        assert!(at.is_low_stock());
        assert!(!above.is_low_stock());
    }

    #[test]
    fn variant_label_is_color_then_size() {
        let v = ProductVariant::new("SW-GRY-L", "L", "Gray", 5, 8);
        assert_eq!(v.label(), "Gray, L");
    }

    #[test]
    fn variant_serializes_with_camel_case_fields() {
        let v = ProductVariant::new("SW-GRY-L", "L", "Gray", 5, 8);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["reorderLevel"], 8);
        assert_eq!(json["sku"], "SW-GRY-L");
    }
}
