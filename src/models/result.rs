use super::{LineItem, Site};
use serde::{Deserialize, Serialize};

/// 기본값으로 채워진 필드 수 (수량→1, 금액→0)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultedFields {
    pub quantity: usize,
    pub price: usize,
}

impl DefaultedFields {
    pub fn total(&self) -> usize {
        self.quantity + self.price
    }
}

/// 파서 한 번 실행 결과. 배송비 행은 항상 마지막.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub site: Site,
    pub items: Vec<LineItem>,
    pub defaulted: DefaultedFields,
}

impl ParseResult {
    pub fn new(site: Site) -> Self {
        Self {
            site,
            items: Vec::new(),
            defaulted: DefaultedFields::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
