pub mod notify;
pub mod redemption_service;
pub mod reveal;

pub use notify::{Notification, Notifier};
pub use redemption_service::{Listing, RedemptionService};
pub use reveal::{start_reveal, RevealHandle, RevealOutcome, RevealTiming};
