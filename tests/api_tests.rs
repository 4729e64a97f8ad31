//! HTTP 라우터 테스트 (서버를 띄우지 않고 oneshot 호출)

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use cart_procurement::api::{router, AppState};
use cart_procurement::AppConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

const COUPANG_TEXT: &str = "Widget A\n도착 보장 수요일\n12,000원\n2\n배송비 + 3,000원\n";

fn app() -> Router {
    router(AppState::new(AppConfig::default()))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn sites_in_selector_order() {
    let response = app()
        .oneshot(Request::builder().uri("/api/sites").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_json(response).await;
    let keys: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|site| site["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(keys, vec!["coupang", "icecreammall", "gmarket", "redpoint"]);
    assert_eq!(body[0]["name"], "쿠팡");
}

#[tokio::test]
async fn parse_returns_rows_and_total() {
    let response = app()
        .oneshot(post_json("/api/parse", json!({ "site": "coupang", "text": COUPANG_TEXT })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_amount"], 15_000);
    assert_eq!(body["rows"][0]["ordinal"], 1);
    assert_eq!(body["rows"][0]["name"], "Widget A");
    assert_eq!(body["rows"][0]["unit_price"], 6_000);
    assert_eq!(body["rows"][1]["name"], "배송비");
    assert_eq!(body["rows"][1]["unit"], "case");
    assert_eq!(body["defaulted"]["quantity"], 0);
}

#[tokio::test]
async fn parse_accepts_korean_site_name() {
    let text = "Book B\nx\nBook B\n단일상품 / 3개\n9,000원\n";
    let response = app()
        .oneshot(post_json("/api/parse", json!({ "site": "아이스크림몰", "text": text })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["site"], "icecreammall");
    assert_eq!(body["rows"][0]["quantity"], 3);
}

#[tokio::test]
async fn empty_input_is_bad_request() {
    let response = app()
        .oneshot(post_json("/api/parse", json!({ "site": "gmarket", "text": "  \n " })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn no_items_is_distinct_failure_with_suggestions() {
    // 쿠팡 텍스트를 G마켓으로 선택
    let response = app()
        .oneshot(post_json("/api/parse", json!({ "site": "gmarket", "text": COUPANG_TEXT })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(suggestions.contains(&json!("coupang")));
    assert!(!suggestions.contains(&json!("gmarket")));
}

#[tokio::test]
async fn unknown_site_is_rejected() {
    let response = app()
        .oneshot(post_json("/api/parse", json!({ "site": "11st", "text": COUPANG_TEXT })))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn export_xlsx_attachment() {
    let response = app()
        .oneshot(post_json("/api/export", json!({ "site": "coupang", "text": COUPANG_TEXT })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment;"));
    // "쿠팡_품의업로드양식.xlsx"
    assert!(disposition.contains("filename*=UTF-8''%EC%BF%A0%ED%8C%A1"));
    assert!(disposition.ends_with("%2Exlsx"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn export_uses_configured_suffix() {
    let mut config = AppConfig::default();
    config.export.filename_suffix = "장바구니".to_string();
    let response = router(AppState::new(config))
        .oneshot(post_json("/api/export/csv", json!({ "site": "coupang", "text": COUPANG_TEXT })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    // "장바구니" = %EC%9E%A5%EB%B0%94%EA%B5%AC%EB%8B%88
    assert!(disposition.contains("%5F%EC%9E%A5%EB%B0%94%EA%B5%AC%EB%8B%88%2Ecsv"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let text = text.trim_start_matches('\u{feff}');
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("품명,규격,수량,단위,단가,금액"));
    assert_eq!(lines[1], "Widget A,,2,개,6000,12000,,,,");
}

#[tokio::test]
async fn export_with_no_items_produces_no_file() {
    let response = app()
        .oneshot(post_json("/api/export", json!({ "site": "redpoint", "text": "장바구니" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());
}

#[tokio::test]
async fn detect_reports_counts_per_site() {
    let response = app()
        .oneshot(post_json("/api/detect", json!({ "text": COUPANG_TEXT })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["counts"]["coupang"], 1);
    assert_eq!(body["counts"]["gmarket"], 0);
}
