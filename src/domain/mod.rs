pub mod catalog;
pub mod error;
pub mod filter;
pub mod keygen;
pub mod ledger;
pub mod snapshot;

pub use catalog::{CatalogItem, Rarity};
pub use error::LedgerError;
pub use filter::{FilterTab, ItemFilter};
pub use ledger::{Ledger, Redemption};
pub use snapshot::LedgerSnapshot;
