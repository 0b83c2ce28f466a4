//! The Redemption Service.
//!
//! This module sits between the presentation shells (console session, HTTP API) and the ledger.
//! It is responsible for:
//! 1.  Serializing every ledger mutation behind one write lock, so the balance check and the
//!     state change of a redemption can never interleave with another command.
//! 2.  Emitting a notification for every command outcome.
//! 3.  Handing out owned copies of ledger data for rendering.

use crate::app::notify::{Notification, Notifier};
use crate::domain::{CatalogItem, ItemFilter, Ledger, LedgerError, LedgerSnapshot, Redemption};
use crate::infra::config;
use tokio::sync::{broadcast, RwLock};

/// A consistent read of the balance together with a filtered view of the catalog.
#[derive(Debug, Clone)]
pub struct Listing {
    pub balance: u64,
    pub items: Vec<CatalogItem>,
}

pub struct RedemptionService {
    ledger: RwLock<Ledger>,
    notifier: Notifier,
}

impl RedemptionService {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: RwLock::new(ledger),
            notifier: Notifier::new(),
        }
    }

    /// Seed catalog with the configured starting balance.
    pub fn from_env() -> anyhow::Result<Self> {
        let balance = config::seed_balance()?;
        println!(
            "> RedemptionService: Starting session with {} credits",
            balance
        );
        Ok(Self::new(Ledger::seeded(balance)))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifier.subscribe()
    }

    pub async fn balance(&self) -> u64 {
        self.ledger.read().await.balance()
    }

    pub async fn get(&self, item_id: &str) -> Option<CatalogItem> {
        self.ledger.read().await.get(item_id).cloned()
    }

    pub async fn can_afford(&self, item_id: &str) -> Option<bool> {
        self.ledger.read().await.can_afford(item_id)
    }

    pub async fn listing(&self, filter: &ItemFilter) -> Listing {
        let ledger = self.ledger.read().await;
        Listing {
            balance: ledger.balance(),
            items: ledger.filtered(filter).into_iter().cloned().collect(),
        }
    }

    /// Pre-flight for a redemption (e.g. before starting the reveal animation). Rejections are
    /// notified the same way a failed redemption would be.
    pub async fn check_redeemable(&self, item_id: &str) -> Result<(), LedgerError> {
        let ledger = self.ledger.read().await;
        match ledger.check_redeemable(item_id) {
            Ok(_) => Ok(()),
            Err(e) => {
                self.notifier.publish(Notification::from_error(&e));
                Err(e)
            }
        }
    }

    pub async fn redeem(&self, item_id: &str) -> Result<Redemption, LedgerError> {
        let result = {
            let mut ledger = self.ledger.write().await;
            ledger.redeem(item_id)
        };

        match &result {
            Ok(redemption) => self.notifier.publish(Notification::success_with_amount(
                format!("Key generated for item '{}'", redemption.item_id),
                redemption.price,
            )),
            Err(e) => self.notifier.publish(Notification::from_error(e)),
        }
        result
    }

    pub async fn add_item(&self, name: &str, image_url: &str) -> Result<CatalogItem, LedgerError> {
        let result = {
            let mut ledger = self.ledger.write().await;
            ledger.add_item(name, image_url)
        };

        match &result {
            Ok(item) => self.notifier.publish(Notification::success(format!(
                "Item '{}' added (id {})",
                item.name(),
                item.id()
            ))),
            Err(e) => self.notifier.publish(Notification::from_error(e)),
        }
        result
    }

    pub async fn export_snapshot(&self) -> LedgerSnapshot {
        let snapshot = self.ledger.read().await.export_snapshot();
        self.notifier.publish(Notification::success(format!(
            "Snapshot exported ({} items, balance {})",
            snapshot.items.len(),
            snapshot.balance
        )));
        snapshot
    }
}
