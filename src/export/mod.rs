//! 품의 업로드 양식 내보내기 (xlsx / csv)

pub mod delimited;
pub mod workbook;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::models::{LineItem, Site};
use crate::service::FinalizedRecords;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// 내보내기 열 (순서 고정)
pub const COLUMNS: [&str; 10] = [
    "품명",
    "규격",
    "수량",
    "단위",
    "단가",
    "금액",
    "품의상세유형",
    "직책급",
    "G2B분류번호",
    "G2B물품코드",
];

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => XLSX_CONTENT_TYPE,
            ExportFormat::Csv => CSV_CONTENT_TYPE,
        }
    }
}

/// 다운로드 파일
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// RFC 5987 filename* 와 ASCII 대체 이름
    pub fn content_disposition(&self) -> String {
        let fallback: String = self
            .file_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '_' { c } else { '_' })
            .collect();
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            fallback,
            utf8_percent_encode(&self.file_name, NON_ALPHANUMERIC)
        )
    }
}

/// "{사이트}_{접미사}.{확장자}"
pub fn file_name(site: Site, suffix: &str, format: ExportFormat) -> String {
    format!("{}_{}.{}", site.display_name(), suffix, format.extension())
}

/// 한 행의 셀 값. 예약 필드는 빈 문자열.
pub(crate) fn text_cells(item: &LineItem) -> [String; 10] {
    let reserved = |field: &Option<String>| field.clone().unwrap_or_default();
    [
        item.name.clone(),
        reserved(&item.spec),
        item.quantity.to_string(),
        item.unit.label().to_string(),
        item.unit_price.to_string(),
        item.amount.to_string(),
        reserved(&item.detail_type),
        reserved(&item.rank),
        reserved(&item.classification_code),
        reserved(&item.item_code),
    ]
}

pub fn render(
    format: ExportFormat,
    records: &FinalizedRecords,
    config: &ExportConfig,
) -> Result<ExportFile> {
    let items = records.export_items();
    let bytes = match format {
        ExportFormat::Xlsx => workbook::write_workbook(items, &config.sheet_name)?,
        ExportFormat::Csv => delimited::write_csv(items)?,
    };

    tracing::info!(
        "[{}] 내보내기 {} 행 ({}, {} bytes)",
        records.site(),
        items.len(),
        format.extension(),
        bytes.len()
    );

    Ok(ExportFile {
        file_name: file_name(records.site(), &config.filename_suffix, format),
        content_type: format.content_type(),
        bytes,
    })
}
