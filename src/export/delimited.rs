use super::{text_cells, COLUMNS};
use crate::error::Result;
use crate::models::LineItem;
use csv::Writer;

// 엑셀이 UTF-8로 인식하도록
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 품목 목록을 CSV로 (머리글 포함)
pub fn write_csv(items: &[LineItem]) -> Result<Vec<u8>> {
    let mut writer = Writer::from_writer(UTF8_BOM.to_vec());

    writer.write_record(COLUMNS)?;
    for item in items {
        writer.write_record(text_cells(item))?;
    }

    writer.flush()?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}
