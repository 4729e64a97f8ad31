use super::SiteParser;
use crate::models::{LineItem, ParseResult, Site};
use crate::parser::money::{first_quantity, first_won, has_won, is_numeric_line};
use crate::service::shipping::{ShippingFees, SHIPPING_NAME};
use tracing::debug;

/// 레드포인트 상품 블록 높이
pub const REDPOINT_STRIDE: usize = 10;
/// 상품명 다음으로 수량/금액/배송비를 찾는 줄 수
const SCAN_WINDOW: usize = 10;
const MIN_NAME_CHARS: usize = 4;

/// 이 단어가 들어간 줄은 상품명이 아니다
const BLOCKLIST: [&str; 11] = [
    "무료",
    "조건",
    "이미지",
    "배송",
    "삭제",
    "장바구니",
    "쿠폰",
    "총 상품금액",
    "수량",
    "할인금액",
    "적립금",
];

/// 레드포인트 장바구니 파서
pub struct RedPointParser;

impl SiteParser for RedPointParser {
    fn site(&self) -> Site {
        Site::RedPoint
    }

    fn parse_lines(&self, lines: &[&str]) -> ParseResult {
        let mut result = ParseResult::new(Site::RedPoint);
        let mut shipping = ShippingFees::new();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];
            if !is_candidate_name(line) {
                i += 1;
                continue;
            }

            // 탭 뒤는 옵션 정보
            let name = line.split('\t').next().unwrap_or(line).trim();

            let window = || lines.iter().skip(i + 1).take(SCAN_WINDOW).copied();
            let mut total = None;
            let mut fee = None;

            for next in window() {
                if next.contains("배송") {
                    if fee.is_none() {
                        fee = Some(if next.contains("무료") { 0 } else { first_won(next).unwrap_or(0) });
                    }
                } else if is_numeric_line(next) {
                    continue;
                } else if total.is_none() {
                    total = first_won(next);
                }
            }

            let quantity = first_quantity(window()).unwrap_or_else(|| {
                result.defaulted.quantity += 1;
                1
            });
            let total = total.unwrap_or_else(|| {
                debug!(line = i, name, "redpoint candidate has no price, using 0");
                result.defaulted.price += 1;
                0
            });

            if let Some(fee) = fee {
                shipping.add(fee);
            }

            result.items.push(LineItem::product(name, quantity, total));
            i += REDPOINT_STRIDE;
        }

        if let Some(item) = shipping.into_item(SHIPPING_NAME) {
            result.items.push(item);
        }

        result
    }
}

/// 차단어가 없고, 금액이 없고, 4글자 이상인 줄
pub fn is_candidate_name(line: &str) -> bool {
    !BLOCKLIST.iter().any(|word| line.contains(word))
        && !has_won(line)
        && line.trim().chars().count() >= MIN_NAME_CHARS
}
