use super::SiteParser;
use crate::models::{LineItem, ParseResult, Site};
use crate::parser::money::parse_won;
use crate::service::shipping::{ShippingFees, SHIPPING_NAME};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 아이스크림몰 상품 블록 높이
pub const ICECREAM_STRIDE: usize = 6;

const OPTION_MARKERS: [&str; 2] = ["단일상품", "추가구매"];

static RE_QUANTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*개").unwrap());
static RE_PRICE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([\d,]+)원").unwrap());
static RE_SHIPPING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"배송비\s*([\d,]+)원").unwrap());

/// 아이스크림몰 장바구니 파서
///
/// 블록 구조: 상품명 / (이미지 대체 텍스트 등) / 상품명 / "단일상품 / N개" / 가격
pub struct IceCreamMallParser;

impl SiteParser for IceCreamMallParser {
    fn site(&self) -> Site {
        Site::IceCreamMall
    }

    fn parse_lines(&self, lines: &[&str]) -> ParseResult {
        let mut result = ParseResult::new(Site::IceCreamMall);
        let mut i = 0;

        while i < lines.len() {
            if !is_product_block(lines, i) {
                i += 1;
                continue;
            }

            let name = lines[i];
            let option_line = lines[i + 3];
            let price_line = lines[i + 4];

            let quantity = match RE_QUANTITY
                .captures(option_line)
                .and_then(|caps| caps[1].parse::<u32>().ok())
            {
                Some(quantity) => quantity,
                None => {
                    result.defaulted.quantity += 1;
                    1
                }
            };

            let price = match RE_PRICE.captures(price_line).and_then(|caps| parse_won(&caps[1])) {
                Some(price) => price,
                None => {
                    debug!(line = i + 4, price_line, "icecream price unreadable, using 0");
                    result.defaulted.price += 1;
                    0
                }
            };

            result.items.push(LineItem::product(name, quantity, price));
            i += ICECREAM_STRIDE;
        }

        // "배송비 3,000원" ("+" 없음)
        let fee = lines
            .iter()
            .rev()
            .find_map(|line| RE_SHIPPING.captures(line))
            .map(|caps| parse_won(&caps[1]).unwrap_or(0));

        if let Some(item) = ShippingFees::single(fee).into_item(SHIPPING_NAME) {
            result.items.push(item);
        }

        result
    }
}

fn is_product_block(lines: &[&str], i: usize) -> bool {
    if i + 4 >= lines.len() {
        return false;
    }

    lines[i] == lines[i + 2]
        && OPTION_MARKERS.iter().any(|marker| lines[i + 3].contains(marker))
        && RE_PRICE.is_match(lines[i + 4])
}
