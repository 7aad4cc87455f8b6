use chrono::{DateTime, Utc};

use crate::sale::Sale;

/// Ordered record of all sales, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleLedger {
    entries: Vec<Sale>,
}

impl SaleLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from sales already ordered newest first.
    pub fn from_entries(entries: Vec<Sale>) -> Self {
        Self { entries }
    }

    /// Record a sale as the newest entry.
    pub fn record(&mut self, sale: Sale) {
        self.entries.insert(0, sale);
    }

    pub fn entries(&self) -> &[Sale] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sale> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&Sale> {
        self.entries.first()
    }

    /// The `n` most recent sales (fewer if the ledger is shorter).
    pub fn recent(&self, n: usize) -> &[Sale] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Sales strictly after `cutoff`, newest first.
    pub fn since(&self, cutoff: DateTime<Utc>) -> impl Iterator<Item = &Sale> {
        self.entries.iter().filter(move |s| s.timestamp > cutoff)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use stockroom_catalog::{ChannelId, Sku};
    use stockroom_core::{ProductId, SaleId};

    use super::*;

    fn sale(qty: u32, at: DateTime<Utc>) -> Sale {
        Sale {
            id: SaleId::new(),
            product_id: ProductId::new(),
            sku: Sku::from("TS-BLK-M"),
            channel_id: ChannelId::from("website"),
            quantity: qty,
            timestamp: at,
        }
    }

    #[test]
    fn record_puts_newest_first() {
        let now = Utc::now();
        let mut ledger = SaleLedger::new();
        ledger.record(sale(1, now - Duration::hours(2)));
        ledger.record(sale(2, now));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.latest().unwrap().quantity, 2);
    }

    #[test]
    fn recent_is_clamped_to_ledger_length() {
        let now = Utc::now();
        let mut ledger = SaleLedger::new();
        for q in 1..=3 {
            ledger.record(sale(q, now));
        }
        assert_eq!(ledger.recent(5).len(), 3);
        let quantities: Vec<u32> = ledger.recent(2).iter().map(|s| s.quantity).collect();
        assert_eq!(quantities, vec![3, 2]);
        assert!(SaleLedger::new().recent(5).is_empty());
    }

    #[test]
    fn since_excludes_sales_at_or_before_cutoff() {
        let now = Utc::now();
        let cutoff = now - Duration::days(7);
        let ledger = SaleLedger::from_entries(vec![
            sale(1, now),
            sale(2, cutoff),
            sale(3, cutoff - Duration::seconds(1)),
        ]);
        let kept: Vec<u32> = ledger.since(cutoff).map(|s| s.quantity).collect();
        assert_eq!(kept, vec![1]);
    }

    #[test]
    fn sale_wire_shape_is_camel_case() {
        let s = sale(4, Utc::now());
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["channelId"], "website");
        assert_eq!(json["productId"], s.product_id.to_string());
        assert_eq!(json["quantity"], 4);
    }
}
