// src/bin/api_server.rs

use redeem_ledger::infra::config;
use redeem_ledger::transport;
use redeem_ledger::RedemptionService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // --- Service Initialization ---
    println!("> Initializing RedemptionService (seed catalog)...");
    let service = Arc::new(RedemptionService::from_env()?);
    println!(
        "> RedemptionService initialized: {} credits.",
        service.balance().await
    );

    let app_state = transport::http::AppState {
        service: service.clone(),
    };

    // --- API Server Initialization ---
    println!("> Starting API server...");
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let bind_addr = config::api_bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    println!("> API server listening on http://{}", bind_addr);
    println!("> Swagger UI available at http://{}/swagger-ui", bind_addr);
    println!("> Press Ctrl+C to stop (state is not persisted; use GET /api/export for a backup)");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C)...");
            println!(
                "> Session ended with {} credits. Graceful shutdown complete.",
                service.balance().await
            );
        }
    }

    Ok(())
}
