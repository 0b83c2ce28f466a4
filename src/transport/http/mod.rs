pub mod router;
pub mod types;
pub mod handlers {
    pub mod common;
    pub mod export;
    pub mod health;
    pub mod items;
    pub mod redeem;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
