use crate::error::{CartError, Result};
use crate::models::{DefaultedFields, LineItem, ParseResult, Site};
use serde::Serialize;

/// 합계 행 이름
pub const TOTAL_LABEL: &str = "합계";

/// 화면 표시용 행 (1부터 시작하는 순번)
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRow<'a> {
    pub ordinal: usize,
    #[serde(flatten)]
    pub item: &'a LineItem,
}

/// 화면 표시용 합계 행. 내보내기에는 포함하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TotalRow {
    pub label: &'static str,
    pub amount: u64,
}

/// 최종 품목 목록
#[derive(Debug, Clone)]
pub struct FinalizedRecords {
    site: Site,
    items: Vec<LineItem>,
    total: TotalRow,
    defaulted: DefaultedFields,
}

impl FinalizedRecords {
    pub fn site(&self) -> Site {
        self.site
    }

    pub fn rows(&self) -> Vec<DisplayRow<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| DisplayRow {
                ordinal: idx + 1,
                item,
            })
            .collect()
    }

    pub fn total(&self) -> TotalRow {
        self.total
    }

    /// 내보내기 대상 (합계 행 제외)
    pub fn export_items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn defaulted(&self) -> DefaultedFields {
        self.defaulted
    }
}

/// 파싱 결과 확정. 행이 하나도 없으면 NoItemsExtracted.
pub fn finalize(result: ParseResult) -> Result<FinalizedRecords> {
    if result.is_empty() {
        return Err(CartError::NoItemsExtracted { site: result.site });
    }

    // 비정상적으로 큰 금액이 붙여넣어져도 합계는 상한에서 멈춘다
    let amount = result
        .items
        .iter()
        .fold(0u64, |sum, item| sum.saturating_add(item.amount));

    Ok(FinalizedRecords {
        site: result.site,
        items: result.items,
        total: TotalRow {
            label: TOTAL_LABEL,
            amount,
        },
        defaulted: result.defaulted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_ordinals_and_total() {
        let mut result = ParseResult::new(Site::Coupang);
        result.items.push(LineItem::product("Widget A", 2, 12_000));
        result.items.push(LineItem::shipping("배송비", 3_000));

        let records = finalize(result).unwrap();
        let ordinals: Vec<_> = records.rows().iter().map(|row| row.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2]);
        assert_eq!(records.total().amount, 15_000);
        assert_eq!(records.total().label, "합계");
        assert_eq!(records.export_items().len(), 2);
    }

    #[test]
    fn empty_result_is_no_items_extracted() {
        let err = finalize(ParseResult::new(Site::RedPoint)).unwrap_err();
        assert!(matches!(err, CartError::NoItemsExtracted { site: Site::RedPoint }));
    }

    #[test]
    fn total_saturates_on_huge_amounts() {
        let text = "Widget A\n삭제\n18,000,000,000,000,000,000원\n1\nx\ny\nz\n\
                    Widget B\n삭제\n18,000,000,000,000,000,000원\n1\n";
        let result = crate::parser::parse(Site::Coupang, text);
        assert_eq!(result.items.len(), 2);

        let records = finalize(result).unwrap();
        assert_eq!(records.total().amount, u64::MAX);
    }

    #[test]
    fn display_row_flattens_item() {
        let mut result = ParseResult::new(Site::IceCreamMall);
        result.items.push(LineItem::product("Book B", 3, 9_000));
        let records = finalize(result).unwrap();

        let json = serde_json::to_value(records.rows()).unwrap();
        assert_eq!(json[0]["ordinal"], 1);
        assert_eq!(json[0]["name"], "Book B");
        assert_eq!(json[0]["unit"], "piece");
        assert_eq!(json[0]["unit_price"], 3_000);
    }
}
