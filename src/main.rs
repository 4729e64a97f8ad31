use cart_procurement::{api, AppConfig};
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 로그 초기화 (로컬 시간, RUST_LOG 없으면 info)
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_level(true)
        .init();

    // 설정 로드
    let config = AppConfig::load()?;
    info!("Starting server with config: {:?}", config);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = api::router(api::AppState::new(config));

    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET  /api/sites        - 지원 사이트 목록");
    info!("  POST /api/parse        - 장바구니 텍스트 → 품목 행");
    info!("  POST /api/detect       - 사이트 추정");
    info!("  POST /api/export       - xlsx 다운로드");
    info!("  POST /api/export/csv   - csv 다운로드");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
