pub mod handlers;

pub use handlers::*;

use axum::{
    routing::{get, post},
    Router,
};

/// 라우터 구성
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/sites", get(list_sites))
        .route("/api/parse", post(parse_cart))
        .route("/api/detect", post(detect_site))
        .route("/api/export", post(export_xlsx))
        .route("/api/export/csv", post(export_csv))
        .with_state(state)
}
