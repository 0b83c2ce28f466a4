//! The redemption ledger: credit balance + catalog, and the only code allowed to change either.
//!
//! Invariants held by every method:
//! - the balance is a `u64` and a redemption never runs unless `balance >= price`;
//! - an item is redeemed at most once and keeps the first key it was issued;
//! - item ids are unique, new items go to the front.
//!
//! All operations are synchronous and either apply fully or not at all.

use crate::domain::catalog::{
    seed_catalog, CatalogItem, Rarity, DEFAULT_ORIGINAL_PRICE_LABEL, DEFAULT_PRICE,
};
use crate::domain::error::LedgerError;
use crate::domain::filter::ItemFilter;
use crate::domain::keygen::{generate_item_id, generate_key_with};
use crate::domain::snapshot::LedgerSnapshot;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashSet;

/// Result of a successful redemption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redemption {
    pub item_id: String,
    pub key: String,
    /// Credits deducted.
    pub price: u64,
    pub balance_after: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    balance: u64,
    items: Vec<CatalogItem>,
}

impl Ledger {
    /// Creates a ledger from an explicit catalog. Fails if two items share an id or an item's
    /// redeemed flag disagrees with its key.
    pub fn new(balance: u64, items: Vec<CatalogItem>) -> Result<Self, LedgerError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !item.is_consistent() {
                return Err(LedgerError::InvalidInput(format!(
                    "item '{}' has redeemed={} but {} issued key",
                    item.id(),
                    item.is_redeemed(),
                    if item.issued_key().is_some() { "an" } else { "no" }
                )));
            }
            if !seen.insert(item.id()) {
                return Err(LedgerError::InvalidInput(format!(
                    "duplicate item id '{}'",
                    item.id()
                )));
            }
        }
        Ok(Self { balance, items })
    }

    /// The session-start ledger: seed catalog with the given balance.
    pub fn seeded(balance: u64) -> Self {
        Self {
            balance,
            items: seed_catalog(),
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, item_id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    /// None if the item does not exist.
    pub fn can_afford(&self, item_id: &str) -> Option<bool> {
        self.get(item_id).map(|item| self.balance >= item.price())
    }

    /// Runs every precondition of [`Ledger::redeem`] without mutating anything.
    pub fn check_redeemable(&self, item_id: &str) -> Result<&CatalogItem, LedgerError> {
        let item = self
            .get(item_id)
            .ok_or_else(|| LedgerError::ItemNotFound(item_id.to_string()))?;
        if item.is_redeemed() {
            return Err(LedgerError::AlreadyRedeemed(item_id.to_string()));
        }
        if self.balance < item.price() {
            return Err(LedgerError::InsufficientCredits {
                required: item.price(),
                available: self.balance,
            });
        }
        Ok(item)
    }

    /// Spends `price` credits and issues a fresh key for the item.
    pub fn redeem(&mut self, item_id: &str) -> Result<Redemption, LedgerError> {
        self.redeem_with(item_id, &mut rand::thread_rng())
    }

    /// [`Ledger::redeem`] with an explicit RNG for the key.
    pub fn redeem_with<R: Rng + ?Sized>(
        &mut self,
        item_id: &str,
        rng: &mut R,
    ) -> Result<Redemption, LedgerError> {
        let price = self.check_redeemable(item_id)?.price();
        let balance_after = self
            .balance
            .checked_sub(price)
            .ok_or(LedgerError::InsufficientCredits {
                required: price,
                available: self.balance,
            })?;
        let key = generate_key_with(rng);

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == item_id)
            .ok_or_else(|| LedgerError::ItemNotFound(item_id.to_string()))?;
        if !item.mark_redeemed(key.clone()) {
            return Err(LedgerError::AlreadyRedeemed(item_id.to_string()));
        }
        self.balance = balance_after;

        Ok(Redemption {
            item_id: item_id.to_string(),
            key,
            price,
            balance_after,
        })
    }

    /// Lists a new item at the default price and puts it first.
    pub fn add_item(&mut self, name: &str, image_url: &str) -> Result<CatalogItem, LedgerError> {
        self.add_item_with(name, image_url, Utc::now(), &mut rand::thread_rng())
    }

    pub fn add_item_with<R: Rng + ?Sized>(
        &mut self,
        name: &str,
        image_url: &str,
        listed_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<CatalogItem, LedgerError> {
        let name = name.trim();
        let image_url = image_url.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidInput("name must not be empty".to_string()));
        }
        if image_url.is_empty() {
            return Err(LedgerError::InvalidInput(
                "image url must not be empty".to_string(),
            ));
        }

        let mut id = generate_item_id(rng);
        while self.get(&id).is_some() {
            id = generate_item_id(rng);
        }

        let item = CatalogItem::new(
            id,
            name,
            image_url,
            listed_at,
            DEFAULT_PRICE,
            DEFAULT_ORIGINAL_PRICE_LABEL,
            Rarity::Common,
        );
        self.items.insert(0, item.clone());
        Ok(item)
    }

    pub fn filtered(&self, filter: &ItemFilter) -> Vec<&CatalogItem> {
        filter.apply(&self.items)
    }

    pub fn export_snapshot(&self) -> LedgerSnapshot {
        self.export_snapshot_at(Utc::now())
    }

    pub fn export_snapshot_at(&self, exported_at: DateTime<Utc>) -> LedgerSnapshot {
        LedgerSnapshot {
            balance: self.balance,
            items: self.items.clone(),
            exported_at,
        }
    }
}
