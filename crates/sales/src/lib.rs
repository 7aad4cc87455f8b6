//! Sales domain module.
//!
//! The append-only ledger of recorded sales. Sales are created only by the
//! inventory container's sale path and are never edited or removed.

pub mod ledger;
pub mod sale;

pub use ledger::SaleLedger;
pub use sale::Sale;
