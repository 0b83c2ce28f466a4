//! Catalog items: the things a balance can be spent on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod seed;

pub use seed::{seed_catalog, SEED_BALANCE};

/// Price charged for items added at runtime.
pub const DEFAULT_PRICE: u64 = 100;

/// Cosmetic "was" price shown next to items added at runtime.
pub const DEFAULT_ORIGINAL_PRICE_LABEL: &str = "R$ 199,90";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        }
    }
}

/// One entry of the catalog.
///
/// Everything except the redemption state is fixed at creation. `redeemed` and `issued_key`
/// only change together, through [`CatalogItem::mark_redeemed`], and only once.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    id: String,
    name: String,
    image_url: String,
    listed_at: DateTime<Utc>,
    price: u64,
    original_price_label: String,
    rarity: Rarity,
    redeemed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    issued_key: Option<String>,
}

impl CatalogItem {
    /// Creates a locked (not yet redeemed) item.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image_url: impl Into<String>,
        listed_at: DateTime<Utc>,
        price: u64,
        original_price_label: impl Into<String>,
        rarity: Rarity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: image_url.into(),
            listed_at,
            price,
            original_price_label: original_price_label.into(),
            rarity,
            redeemed: false,
            issued_key: None,
        }
    }

    /// Same item, already redeemed with `key`. Used for seed data that starts out revealed.
    pub fn with_issued_key(mut self, key: impl Into<String>) -> Self {
        self.mark_redeemed(key.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn listed_at(&self) -> DateTime<Utc> {
        self.listed_at
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn original_price_label(&self) -> &str {
        &self.original_price_label
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn is_redeemed(&self) -> bool {
        self.redeemed
    }

    pub fn issued_key(&self) -> Option<&str> {
        self.issued_key.as_deref()
    }

    /// `redeemed` and `issued_key` agree. Only items built by hand or deserialized can fail this.
    pub fn is_consistent(&self) -> bool {
        self.redeemed == self.issued_key.is_some()
    }

    /// Locked -> Redeemed. Returns false, leaving the item untouched, if it already has a
    /// redeemed flag or a key.
    pub(crate) fn mark_redeemed(&mut self, key: String) -> bool {
        if self.redeemed || self.issued_key.is_some() {
            return false;
        }
        self.redeemed = true;
        self.issued_key = Some(key);
        true
    }
}
