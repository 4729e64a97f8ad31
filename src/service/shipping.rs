use crate::models::LineItem;

/// 일반 배송비 행 이름
pub const SHIPPING_NAME: &str = "배송비";
/// 상품별 배송비를 합산한 행 이름 (G마켓)
pub const TOTAL_SHIPPING_NAME: &str = "총 배송비";

/// 배송비 합산기. 파서 한 번에 배송비 행은 최대 하나.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShippingFees {
    total: u64,
}

impl ShippingFees {
    pub fn new() -> Self {
        Self::default()
    }

    /// 단일 배송비 (역방향 검색에서 처음 찾은 값)
    pub fn single(fee: Option<u64>) -> Self {
        let mut fees = Self::new();
        if let Some(fee) = fee {
            fees.add(fee);
        }
        fees
    }

    pub fn add(&mut self, fee: u64) {
        self.total = self.total.saturating_add(fee);
    }

    /// 합계가 0보다 크면 "건" 단위 배송비 행 생성
    pub fn into_item(self, name: &str) -> Option<LineItem> {
        (self.total > 0).then(|| LineItem::shipping(name, self.total))
    }
}
