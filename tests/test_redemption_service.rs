//! Service-level behaviour: single-writer redemption, notifications and the reveal animation.

use redeem_ledger::app::Notification;
use redeem_ledger::{
    is_well_formed_key, start_reveal, Ledger, LedgerError, RedemptionService, RevealOutcome,
    RevealTiming, LOCKED_KEY_MASK,
};
use std::sync::Arc;
use std::time::Duration;

fn service(balance: u64) -> Arc<RedemptionService> {
    Arc::new(RedemptionService::new(Ledger::seeded(balance)))
}

fn fast_timing() -> RevealTiming {
    RevealTiming::new(Duration::from_millis(100), Duration::from_millis(10))
}

#[tokio::test]
async fn redeem_emits_success_with_price() {
    let service = service(5922);
    let mut notifications = service.subscribe();

    let redemption = service.redeem("2").await.expect("redeem");

    assert_eq!(redemption.balance_after, 5422);
    assert_eq!(service.balance().await, 5422);
    match notifications.recv().await.unwrap() {
        Notification::Success { amount, .. } => assert_eq!(amount, Some(500)),
        other => panic!("unexpected notification {:?}", other),
    }
}

#[tokio::test]
async fn failed_redeem_emits_error_code() {
    let service = service(50);
    let mut notifications = service.subscribe();

    let err = service.redeem("1").await.unwrap_err();

    assert_eq!(err.code(), "insufficient_credits");
    assert_eq!(service.balance().await, 50);
    let notification = notifications.recv().await.unwrap();
    assert!(notification.is_error());
    assert_eq!(
        notification,
        Notification::Error {
            code: "insufficient_credits",
            message: err.to_string(),
        }
    );
}

#[tokio::test]
async fn add_and_export_notify() {
    let service = service(10);
    let mut notifications = service.subscribe();

    let item = service.add_item("Test Game", "http://x/img.png").await.unwrap();
    assert!(!notifications.recv().await.unwrap().is_error());

    assert!(service.add_item("", "http://x").await.is_err());
    assert!(notifications.recv().await.unwrap().is_error());

    let snapshot = service.export_snapshot().await;
    assert_eq!(snapshot.items[0].id(), item.id());
    assert!(!notifications.recv().await.unwrap().is_error());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_redeems_issue_one_key() {
    let service = service(5922);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        handles.push(tokio::spawn(async move { service.redeem("3").await }));
    }

    let mut keys = Vec::new();
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(r) => keys.push(r.key),
            Err(LedgerError::AlreadyRedeemed(_)) => rejected += 1,
            Err(e) => panic!("unexpected error {}", e),
        }
    }

    assert_eq!(keys.len(), 1);
    assert_eq!(rejected, 7);
    assert_eq!(service.balance().await, 5922 - 300);
    let item = service.get("3").await.unwrap();
    assert_eq!(item.issued_key(), Some(keys[0].as_str()));
}

#[tokio::test]
async fn reveal_animates_then_redeems() {
    let service = service(600);

    let handle = start_reveal(service.clone(), "2", fast_timing())
        .await
        .expect("start reveal");
    assert_eq!(handle.item_id(), "2");
    let mut frames = handle.frames();
    {
        let first = frames.borrow();
        assert!(first.as_str() == LOCKED_KEY_MASK || is_well_formed_key(first.as_str()));
    }

    frames.changed().await.unwrap();
    assert!(is_well_formed_key(frames.borrow_and_update().as_str()));

    let outcome = handle.finish().await;
    let redemption = match outcome {
        RevealOutcome::Revealed(r) => r,
        other => panic!("unexpected outcome {:?}", other),
    };

    assert_eq!(redemption.price, 500);
    assert_eq!(service.balance().await, 100);
    let item = service.get("2").await.unwrap();
    assert_eq!(item.issued_key(), Some(redemption.key.as_str()));
    assert_eq!(frames.borrow().as_str(), redemption.key);
}

#[tokio::test]
async fn cancelled_reveal_redeems_nothing() {
    let service = service(600);
    let slow = RevealTiming::new(Duration::from_secs(10), Duration::from_millis(10));

    let handle = start_reveal(service.clone(), "2", slow).await.unwrap();
    tokio::time::sleep(Duration::from_millis(30)).await;
    handle.cancel();

    assert_eq!(handle.finish().await, RevealOutcome::Cancelled);
    assert_eq!(service.balance().await, 600);
    assert!(!service.get("2").await.unwrap().is_redeemed());
}

#[tokio::test]
async fn dropping_the_handle_stops_the_animation() {
    let service = service(600);
    let timing = RevealTiming::new(Duration::from_millis(200), Duration::from_millis(10));

    let handle = start_reveal(service.clone(), "2", timing).await.unwrap();
    drop(handle);
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(service.balance().await, 600);
    assert!(!service.get("2").await.unwrap().is_redeemed());
}

#[tokio::test]
async fn unaffordable_reveal_never_starts() {
    let service = service(50);
    let mut notifications = service.subscribe();

    let err = start_reveal(service.clone(), "2", fast_timing())
        .await
        .err()
        .expect("reveal should be refused");

    assert_eq!(
        err,
        LedgerError::InsufficientCredits {
            required: 500,
            available: 50
        }
    );
    assert!(notifications.recv().await.unwrap().is_error());

    let err = start_reveal(service.clone(), "5", fast_timing())
        .await
        .err()
        .expect("already redeemed");
    assert_eq!(err, LedgerError::AlreadyRedeemed("5".to_string()));
}

#[tokio::test]
async fn reveal_rejected_when_item_redeemed_meanwhile() {
    let service = service(600);

    let handle = start_reveal(service.clone(), "2", fast_timing()).await.unwrap();
    let direct = service.redeem("2").await.expect("direct redeem");

    let outcome = handle.finish().await;
    assert_eq!(
        outcome,
        RevealOutcome::Rejected(LedgerError::AlreadyRedeemed("2".to_string()))
    );
    assert_eq!(service.balance().await, 100);
    let item = service.get("2").await.unwrap();
    assert_eq!(item.issued_key(), Some(direct.key.as_str()));
}

#[test]
fn timing_steps() {
    assert_eq!(RevealTiming::default().steps(), 40);
    assert_eq!(
        RevealTiming::new(Duration::from_millis(5), Duration::from_millis(50)).steps(),
        1
    );
    assert_eq!(
        RevealTiming::new(Duration::from_millis(100), Duration::ZERO).interval(),
        Duration::from_millis(1)
    );
}
