use super::{CatalogItem, Rarity};
use chrono::{DateTime, TimeZone, Utc};

/// Credits a fresh session starts with (unless `SEED_BALANCE` overrides it).
pub const SEED_BALANCE: u64 = 5922;

fn listed(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// The catalog every session starts with, most recently listed first.
pub fn seed_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(
            "1",
            "NARUTO SHIPPUDEN: Ultimate Ninja STORM 4",
            "https://static.lumi.new/34/34e7cb0363f0591876e1052c03f8aed4.png",
            listed(2025, 11, 16, 20, 1),
            100,
            "R$ 149,90",
            Rarity::Common,
        ),
        CatalogItem::new(
            "2",
            "ELDEN RING",
            "https://static.lumi.new/c9/c9d15573009cd31185fe962b9959c829.png",
            listed(2025, 11, 15, 19, 48),
            500,
            "R$ 299,90",
            Rarity::Legendary,
        ),
        CatalogItem::new(
            "3",
            "Marvel's Spider-Man: Miles Morales",
            "https://static.lumi.new/bc/bcec7b8be393005f399a2f5726184b8f.png",
            listed(2025, 11, 15, 18, 30),
            300,
            "R$ 249,90",
            Rarity::Rare,
        ),
        CatalogItem::new(
            "4",
            "Dispatch",
            "https://images.unsplash.com/photo-1552820728-8b83bb6b773f?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3",
            listed(2025, 11, 15, 9, 55),
            100,
            "R$ 59,90",
            Rarity::Common,
        ),
        CatalogItem::new(
            "5",
            "Marvel's Spider-Man Remastered",
            "https://images.unsplash.com/photo-1605218427360-41d459d7e553?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3",
            listed(2025, 11, 12, 15, 39),
            300,
            "R$ 299,90",
            Rarity::Rare,
        )
        .with_issued_key("X7K9-M2P4-R9L1"),
    ]
}
