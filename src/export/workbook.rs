use super::COLUMNS;
use crate::error::Result;
use crate::models::LineItem;
use rust_xlsxwriter::{Format, Workbook};

const NAME_COLUMN_WIDTH: f64 = 48.0;
const MONEY_FORMAT: &str = "#,##0";

/// 시트 하나짜리 xlsx 생성
pub fn write_workbook(items: &[LineItem], sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let money = Format::new().set_num_format(MONEY_FORMAT);

    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;
    sheet.set_column_width(0, NAME_COLUMN_WIDTH)?;

    for (col, title) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (idx, item) in items.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, &item.name)?;
        if let Some(spec) = &item.spec {
            sheet.write_string(row, 1, spec)?;
        }
        sheet.write_number(row, 2, f64::from(item.quantity))?;
        sheet.write_string(row, 3, item.unit.label())?;
        sheet.write_number_with_format(row, 4, item.unit_price as f64, &money)?;
        sheet.write_number_with_format(row, 5, item.amount as f64, &money)?;

        let reserved = [
            &item.detail_type,
            &item.rank,
            &item.classification_code,
            &item.item_code,
        ];
        for (offset, value) in reserved.into_iter().enumerate() {
            if let Some(value) = value {
                sheet.write_string(row, 6 + offset as u16, value)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
