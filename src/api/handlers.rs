use crate::config::AppConfig;
use crate::error::CartError;
use crate::export::{self, ExportFormat};
use crate::models::{DefaultedFields, Site};
use crate::service::{self, DisplayRow};
use axum::{
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 공유 상태 (설정만 보관, 요청 간 상태 없음)
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// 요청 본문: 사이트 + 붙여넣은 텍스트
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub site: Site,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

/// 실패 응답
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    /// 추출 결과가 없을 때 상품이 인식되는 다른 사이트
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Site>,
}

/// 파싱 응답
#[derive(Debug, Serialize)]
pub struct ParseResponse<'a> {
    pub success: bool,
    pub message: String,
    pub site: Site,
    pub rows: Vec<DisplayRow<'a>>,
    pub total_amount: u64,
    pub defaulted: DefaultedFields,
    pub parsed_at: DateTime<Local>,
}

#[derive(Debug, Serialize)]
pub struct SiteInfo {
    pub key: Site,
    pub name: &'static str,
}

/// 상태 확인
pub async fn health_check() -> &'static str {
    "OK"
}

/// 선택 가능한 사이트 목록
pub async fn list_sites() -> Json<Vec<SiteInfo>> {
    Json(
        Site::ALL
            .into_iter()
            .map(|site| SiteInfo {
                key: site,
                name: site.display_name(),
            })
            .collect(),
    )
}

/// 텍스트 → 품목 행 (화면 표시용)
pub async fn parse_cart(Json(req): Json<ParseRequest>) -> Response {
    match service::extract(req.site, &req.text) {
        Ok(records) => {
            let total = records.total();
            let response = ParseResponse {
                success: true,
                message: format!("[{}] 데이터 변환 완료! {} 행", req.site, records.export_items().len()),
                site: req.site,
                rows: records.rows(),
                total_amount: total.amount,
                defaulted: records.defaulted(),
                parsed_at: Local::now(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e @ CartError::NoItemsExtracted { .. }) => {
            let suggestions = service::detect(&req.text).suggestions(req.site);
            error_response_with(e, suggestions)
        }
        Err(e) => error_response(e),
    }
}

/// 텍스트 → xlsx 다운로드
pub async fn export_xlsx(State(state): State<AppState>, Json(req): Json<ParseRequest>) -> Response {
    export_file(&state, req, ExportFormat::Xlsx)
}

/// 텍스트 → csv 다운로드
pub async fn export_csv(State(state): State<AppState>, Json(req): Json<ParseRequest>) -> Response {
    export_file(&state, req, ExportFormat::Csv)
}

/// 사이트별 인식 행 수
pub async fn detect_site(Json(req): Json<DetectRequest>) -> Response {
    if req.text.trim().is_empty() {
        return error_response(CartError::EmptyInput);
    }
    (StatusCode::OK, Json(service::detect(&req.text))).into_response()
}

fn export_file(state: &AppState, req: ParseRequest, format: ExportFormat) -> Response {
    let file = service::extract(req.site, &req.text)
        .and_then(|records| export::render(format, &records, &state.config.export));

    match file {
        Ok(file) => {
            let disposition = file.content_disposition();
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, file.content_type.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                file.bytes,
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

fn error_response(e: CartError) -> Response {
    error_response_with(e, Vec::new())
}

fn error_response_with(e: CartError, suggestions: Vec<Site>) -> Response {
    let status = match &e {
        CartError::EmptyInput => StatusCode::BAD_REQUEST,
        CartError::NoItemsExtracted { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        _ => {
            tracing::error!("export failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let response = ErrorResponse {
        success: false,
        message: e.to_string(),
        suggestions,
    };
    (status, Json(response)).into_response()
}
