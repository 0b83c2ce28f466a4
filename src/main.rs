//! Console session: the storefront without a browser.
//!
//! Lists the catalog, plays the reveal for the first locked item the balance can cover,
//! then writes a JSON backup of the session to `EXPORT_DIR`.

use redeem_ledger::infra::config;
use redeem_ledger::{
    start_reveal, CatalogItem, FilterTab, ItemFilter, RedemptionService, RevealOutcome,
    RevealTiming, LOCKED_KEY_MASK,
};
use std::io::Write;
use std::sync::Arc;

fn print_row(item: &CatalogItem, balance: u64) {
    let key = item.issued_key().unwrap_or(LOCKED_KEY_MASK);
    let action = if item.is_redeemed() {
        "used"
    } else if balance >= item.price() {
        "redeem"
    } else {
        "locked"
    };
    println!(
        "  {}  #{:<9} {:<42} {:<9} {:>4} cr  {:<14} [{}]",
        item.listed_at().format("%d/%m/%Y %H:%M"),
        item.id(),
        item.name(),
        item.rarity().as_str(),
        item.price(),
        key,
        action
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let service = Arc::new(RedemptionService::from_env()?);
    let timing = RevealTiming::from_env()?;

    let listing = service.listing(&ItemFilter::default()).await;
    println!("--- Catalog ({} credits) ---", listing.balance);
    for item in &listing.items {
        print_row(item, listing.balance);
    }

    let available = service
        .listing(&ItemFilter::new("", FilterTab::Available))
        .await;
    let target = available
        .items
        .iter()
        .find(|item| item.price() <= available.balance)
        .map(|item| item.id().to_string());

    match target {
        Some(item_id) => {
            println!("\n--- Revealing #{} ---", item_id);
            let handle = start_reveal(service.clone(), &item_id, timing).await?;
            let mut frames = handle.frames();
            let printer = tokio::spawn(async move {
                while frames.changed().await.is_ok() {
                    let frame = frames.borrow_and_update().clone();
                    print!("\r  {}", frame);
                    let _ = std::io::stdout().flush();
                }
                println!();
            });

            let outcome = handle.finish().await;
            if let Err(e) = printer.await {
                eprintln!("> Reveal: frame printer for '{}' failed: {}", item_id, e);
            }
            match outcome {
                RevealOutcome::Revealed(redemption) => println!(
                    "> Key {} issued for -{} credits, {} left",
                    redemption.key, redemption.price, redemption.balance_after
                ),
                RevealOutcome::Rejected(e) => eprintln!("> Redemption rejected: {}", e),
                RevealOutcome::Cancelled => println!("> Reveal cancelled"),
            }
        }
        None => println!("\n> Nothing left that the balance can cover."),
    }

    let snapshot = service.export_snapshot().await;
    let path = snapshot.write_to_dir(&config::export_dir())?;
    println!("> Backup written to {}", path.display());

    Ok(())
}
