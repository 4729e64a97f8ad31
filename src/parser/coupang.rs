use super::SiteParser;
use crate::models::{LineItem, ParseResult, Site};
use crate::parser::money::{first_quantity, parse_won};
use crate::service::shipping::{ShippingFees, SHIPPING_NAME};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 상품 하나를 인식한 뒤 건너뛰는 줄 수 (쿠팡 상품 블록 높이)
pub const COUPANG_STRIDE: usize = 7;
/// 상품명 다음 몇 줄 안에 "원"이 있어야 후보로 본다
const CURRENCY_WINDOW: usize = 7;
/// 가격/수량을 찾는 범위
const SCAN_WINDOW: usize = 9;

const HEADER_MARKERS: [&str; 2] = ["삭제", "도착 보장"];
const NOISE_TOKENS: [&str; 2] = ["badge", "coupon"];

static RE_PRICE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{1,3}(?:,\d{3})*원").unwrap());

static RE_SHIPPING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"배송비\s*\+?\s*([\d,]+)원").unwrap());

// 묶음배송 하위 줄 "(1 / 2)"
static RE_BUNDLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(\d+\s*/\s*\d+\)$").unwrap());

/// 쿠팡 장바구니 파서
pub struct CoupangParser;

impl SiteParser for CoupangParser {
    fn site(&self) -> Site {
        Site::Coupang
    }

    fn parse_lines(&self, lines: &[&str]) -> ParseResult {
        let mut result = ParseResult::new(Site::Coupang);
        let mut i = 0;

        while i < lines.len() {
            if !is_product_header(lines, i) {
                i += 1;
                continue;
            }

            let name = lines[i];

            // 1. 총 가격 (가격이 있는 첫 줄의 마지막 금액)
            let total = match find_total_price(lines, i) {
                Some(total) if total > 0 => total,
                _ => {
                    debug!(line = i, name, "coupang candidate has no price, skipping");
                    i += 1;
                    continue;
                }
            };

            // 2. 묶음 상품 하위 줄 제외
            if RE_BUNDLE.is_match(name) {
                debug!(line = i, name, "coupang bundle fragment, skipping");
                i += 1;
                continue;
            }

            // 3. 수량 (숫자만 있는 줄)
            let quantity = match first_quantity(window(lines, i, SCAN_WINDOW)) {
                Some(quantity) => quantity,
                None => {
                    result.defaulted.quantity += 1;
                    1
                }
            };

            result.items.push(LineItem::product(name, quantity, total));
            i += COUPANG_STRIDE;
        }

        if let Some(item) = ShippingFees::single(shipping_fee(lines)).into_item(SHIPPING_NAME) {
            result.items.push(item);
        }

        result
    }
}

/// i 다음 줄부터 최대 `len`줄
fn window<'a>(lines: &'a [&'a str], i: usize, len: usize) -> impl Iterator<Item = &'a str> + 'a {
    lines.iter().skip(i + 1).take(len).copied()
}

fn is_product_header(lines: &[&str], i: usize) -> bool {
    let Some(next) = lines.get(i + 1) else {
        return false;
    };

    HEADER_MARKERS.iter().any(|marker| next.contains(marker))
        && window(lines, i, CURRENCY_WINDOW).any(|line| line.contains('원'))
}

fn find_total_price(lines: &[&str], i: usize) -> Option<u64> {
    window(lines, i, SCAN_WINDOW).find_map(|line| {
        let cleaned = NOISE_TOKENS
            .iter()
            .fold(line.to_string(), |acc, token| acc.replace(token, ""));
        RE_PRICE
            .find_iter(&cleaned)
            .last()
            .map(|m| parse_won(m.as_str().trim_end_matches('원')).unwrap_or(0))
    })
}

/// 끝에서부터 "배송비 + 3,000원" 형식을 찾는다. 처음 찾은 줄에서 멈춘다.
fn shipping_fee(lines: &[&str]) -> Option<u64> {
    lines
        .iter()
        .rev()
        .find_map(|line| RE_SHIPPING.captures(line))
        .map(|caps| parse_won(&caps[1]).unwrap_or(0))
}
