use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Builds the application router. Every route carries permissive CORS
/// headers; the layer also answers OPTIONS preflight requests with 200,
/// and axum rejects unrouted methods with 405.
pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route(
            "/daily-news",
            get(handlers::run_daily_news).post(handlers::run_daily_news),
        )
        .route("/news-list", get(handlers::news_list))
        .route("/summarize", post(handlers::summarize))
        .route("/phrases", post(handlers::phrases))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use dn_core::{Error, NewsDataset, Result};
}
