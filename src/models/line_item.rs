use serde::{Deserialize, Serialize};

/// 수량 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// 일반 상품 ("개")
    Piece,
    /// 배송비 등 건 단위 ("건")
    Case,
}

impl Unit {
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Piece => "개",
            Unit::Case => "건",
        }
    }
}

/// 품목 한 줄 (품의서 표의 한 행)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,             // 품명
    pub spec: Option<String>,     // 규격 (수동 입력용)
    pub quantity: u32,            // 수량
    pub unit: Unit,               // 단위
    pub unit_price: u64,          // 단가 = floor(금액 / 수량)
    pub amount: u64,              // 금액 (기준값)
    pub detail_type: Option<String>,         // 품의상세유형
    pub rank: Option<String>,                // 직책급
    pub classification_code: Option<String>, // G2B분류번호
    pub item_code: Option<String>,           // G2B물품코드
}

impl LineItem {
    /// 금액과 수량으로 상품 행 생성. 단가는 내림 나눗셈, 수량 0이면 단가 0.
    pub fn product(name: impl Into<String>, quantity: u32, amount: u64) -> Self {
        Self {
            name: name.into(),
            spec: None,
            quantity,
            unit: Unit::Piece,
            unit_price: unit_price(amount, quantity),
            amount,
            detail_type: None,
            rank: None,
            classification_code: None,
            item_code: None,
        }
    }

    /// 배송비 행 (수량 1, 단위 "건")
    pub fn shipping(name: impl Into<String>, fee: u64) -> Self {
        Self {
            unit: Unit::Case,
            ..Self::product(name, 1, fee)
        }
    }
}

/// 0으로 나누지 않는 단가 계산
pub fn unit_price(amount: u64, quantity: u32) -> u64 {
    if quantity == 0 {
        0
    } else {
        amount / u64::from(quantity)
    }
}
