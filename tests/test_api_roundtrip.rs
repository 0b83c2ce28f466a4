//! End-to-end test of the HTTP shell: start the router in-process on an ephemeral port and drive
//! every route with a real client.

use redeem_ledger::{transport, Ledger, LedgerSnapshot, RedemptionService};
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

async fn spawn_server(balance: u64) -> Result<String, Box<dyn std::error::Error>> {
    let service = Arc::new(RedemptionService::new(Ledger::seeded(balance)));
    let router = transport::http::create_router(transport::http::AppState { service });

    // Bind to an ephemeral port to avoid conflicts with a running API server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://127.0.0.1:{}", port))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_api_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server(600).await?;
    let client = reqwest::Client::new();

    // --- health / balance ---
    let health = client
        .get(format!("{}/health", base_url))
        .send()
        .await?
        .json::<JsonValue>()
        .await?;
    assert_eq!(health["success"], true);
    assert_eq!(health["data"]["status"], "ok");

    let balance = client
        .get(format!("{}/api/balance", base_url))
        .send()
        .await?
        .json::<JsonValue>()
        .await?;
    assert_eq!(balance["data"]["balance"], 600);

    // --- listing with affordability + mask ---
    let listing = client
        .get(format!("{}/api/items?tab=available", base_url))
        .send()
        .await?
        .json::<JsonValue>()
        .await?;
    assert_eq!(listing["data"]["count"], 4);
    let items = listing["data"]["items"].as_array().unwrap();
    assert_eq!(items[0]["id"], "1");
    assert_eq!(items[0]["canAfford"], true);
    assert_eq!(items[0]["displayKey"], "••••-••••-••••");

    let used = client
        .get(format!("{}/api/items?tab=used&search=SPIDER", base_url))
        .send()
        .await?
        .json::<JsonValue>()
        .await?;
    assert_eq!(used["data"]["count"], 1);
    assert_eq!(used["data"]["items"][0]["displayKey"], "X7K9-M2P4-R9L1");

    let mixed_case = client
        .get(format!("{}/api/items?tab=Available", base_url))
        .send()
        .await?
        .json::<JsonValue>()
        .await?;
    assert_eq!(mixed_case["success"], true);
    assert_eq!(mixed_case["data"]["tab"], "available");
    assert_eq!(mixed_case["data"]["count"], 4);

    let empty_tab = client
        .get(format!("{}/api/items?tab=", base_url))
        .send()
        .await?
        .json::<JsonValue>()
        .await?;
    assert_eq!(empty_tab["data"]["tab"], "all");
    assert_eq!(empty_tab["data"]["count"], 5);

    let bad_tab = client
        .get(format!("{}/api/items?tab=sold", base_url))
        .send()
        .await?;
    assert_eq!(bad_tab.status(), reqwest::StatusCode::BAD_REQUEST);
    let bad_tab = bad_tab.json::<JsonValue>().await?;
    assert_eq!(bad_tab["success"], false);
    assert_eq!(bad_tab["code"], "invalid_input");

    // --- add item ---
    let added = client
        .post(format!("{}/api/items", base_url))
        .json(&json!({ "name": "Test Game", "imageUrl": "http://x/img.png" }))
        .send()
        .await?
        .json::<JsonValue>()
        .await?;
    assert_eq!(added["success"], true);
    assert_eq!(added["data"]["item"]["imageUrl"], "http://x/img.png");
    let new_id = added["data"]["item"]["id"].as_str().unwrap().to_string();

    let listing = client
        .get(format!("{}/api/items?tab=available", base_url))
        .send()
        .await?
        .json::<JsonValue>()
        .await?;
    assert_eq!(listing["data"]["items"][0]["id"], new_id.as_str());

    let empty = client
        .post(format!("{}/api/items", base_url))
        .json(&json!({ "name": "", "imageUrl": "http://x/img.png" }))
        .send()
        .await?;
    assert_eq!(empty.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let empty = empty.json::<JsonValue>().await?;
    assert_eq!(empty["code"], "invalid_input");

    let malformed = client
        .post(format!("{}/api/items", base_url))
        .json(&json!({ "title": "missing fields" }))
        .send()
        .await?;
    assert_eq!(malformed.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);

    let legacy_field = client
        .post(format!("{}/api/items", base_url))
        .json(&json!({ "name": "Older Client", "image_url": "http://x/old.png" }))
        .send()
        .await?
        .json::<JsonValue>()
        .await?;
    assert_eq!(legacy_field["success"], true);
    assert_eq!(legacy_field["data"]["item"]["imageUrl"], "http://x/old.png");

    // --- redeem ---
    let redeemed = client
        .post(format!("{}/api/items/2/redeem", base_url))
        .send()
        .await?;
    assert_eq!(redeemed.status(), reqwest::StatusCode::OK);
    let redeemed = redeemed.json::<JsonValue>().await?;
    assert_eq!(redeemed["data"]["balance"], 100);
    let key = redeemed["data"]["key"].as_str().unwrap().to_string();
    assert!(redeem_ledger::is_well_formed_key(&key));

    let again = client
        .post(format!("{}/api/items/2/redeem", base_url))
        .send()
        .await?;
    assert_eq!(again.status(), reqwest::StatusCode::CONFLICT);
    assert_eq!(again.json::<JsonValue>().await?["code"], "already_redeemed");

    let poor = client
        .post(format!("{}/api/items/3/redeem", base_url))
        .send()
        .await?;
    assert_eq!(poor.status(), reqwest::StatusCode::PAYMENT_REQUIRED);
    assert_eq!(poor.json::<JsonValue>().await?["code"], "insufficient_credits");

    let missing = client
        .post(format!("{}/api/items/nope/redeem", base_url))
        .send()
        .await?;
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(missing.json::<JsonValue>().await?["code"], "item_not_found");

    // --- export ---
    let export = client
        .get(format!("{}/api/export", base_url))
        .send()
        .await?
        .json::<JsonValue>()
        .await?;
    assert_eq!(export["success"], true);
    let snapshot: LedgerSnapshot = serde_json::from_value(export["data"].clone())?;
    assert_eq!(snapshot.balance, 100);
    assert_eq!(snapshot.items.len(), 7);
    assert_eq!(snapshot.items[1].id(), new_id);
    let elden = snapshot.items.iter().find(|i| i.id() == "2").unwrap();
    assert_eq!(elden.issued_key(), Some(key.as_str()));

    Ok(())
}
