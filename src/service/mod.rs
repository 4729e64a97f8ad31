pub mod detector;
pub mod finalizer;
pub mod shipping;

pub use detector::{detect, Detection};
pub use finalizer::{finalize, DisplayRow, FinalizedRecords, TotalRow};
pub use shipping::ShippingFees;

use crate::error::{CartError, Result};
use crate::models::Site;
use crate::parser;

/// 붙여넣은 텍스트 → 최종 품목 목록
///
/// 빈 텍스트는 파서에 넘기기 전에 EmptyInput, 파싱 결과가 비면 NoItemsExtracted.
pub fn extract(site: Site, text: &str) -> Result<FinalizedRecords> {
    if text.trim().is_empty() {
        return Err(CartError::EmptyInput);
    }

    finalize(parser::parse(site, text))
}
