pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{start_reveal, Notification, RedemptionService, RevealOutcome, RevealTiming};
pub use domain::keygen::{generate_key, is_well_formed_key, LOCKED_KEY_MASK};
pub use domain::{
    CatalogItem, FilterTab, ItemFilter, Ledger, LedgerError, LedgerSnapshot, Rarity, Redemption,
};
