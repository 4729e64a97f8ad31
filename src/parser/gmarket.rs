use super::SiteParser;
use crate::models::{LineItem, ParseResult, Site};
use crate::parser::money::{first_quantity, first_won, is_numeric_line};
use crate::service::shipping::{ShippingFees, TOTAL_SHIPPING_NAME};
use tracing::debug;

/// G마켓 상품 블록 높이. 검색 범위도 같다.
pub const GMARKET_STRIDE: usize = 20;

const NAME_MARKER: &str = "상품명:";
const ITEM_AMOUNT_MARKER: &str = "상품 금액";
const ORDER_AMOUNT_MARKER: &str = "주문금액";
const DISCOUNT_MARKER: &str = "할인";
const SHIPPING_MARKER: &str = "배송비";
const FREE_SHIPPING: &str = "무료배송";
const DELETE_MARKER: &str = "삭제";

/// 상품 블록 하나에서 찾은 값
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct GmarketBlock {
    quantity: Option<u32>,
    item_amount: Option<u64>,
    discount: Option<u64>,
    order_amount: Option<u64>,
    shipping: Option<u64>,
}

impl GmarketBlock {
    /// 할인이 있으면 주문금액, 없으면 상품 금액
    fn price(&self) -> Option<u64> {
        if self.discount.unwrap_or(0) > 0 {
            self.order_amount
        } else {
            self.item_amount
        }
    }
}

/// G마켓 장바구니 파서
///
/// "상품명:" 다음 줄이 상품명이고, 이후 블록 안에서 수량/상품 금액/할인/주문금액/배송비를 찾는다.
/// 상품별 배송비는 모아서 마지막에 "총 배송비" 한 줄로 붙인다.
pub struct GmarketParser;

impl SiteParser for GmarketParser {
    fn site(&self) -> Site {
        Site::Gmarket
    }

    fn parse_lines(&self, lines: &[&str]) -> ParseResult {
        let mut result = ParseResult::new(Site::Gmarket);
        let mut shipping = ShippingFees::new();
        let mut i = 0;

        while i < lines.len() {
            let Some(name) = lines
                .get(i + 1)
                .filter(|_| lines[i].starts_with(NAME_MARKER))
            else {
                i += 1;
                continue;
            };

            let block = scan_block(lines, i);
            debug!(line = i, name, ?block, "gmarket block");

            let quantity = block.quantity.unwrap_or_else(|| {
                result.defaulted.quantity += 1;
                1
            });
            let price = block.price().unwrap_or_else(|| {
                result.defaulted.price += 1;
                0
            });

            if let Some(fee) = block.shipping {
                shipping.add(fee);
            }

            result.items.push(LineItem::product(*name, quantity, price));
            i += GMARKET_STRIDE;
        }

        if let Some(item) = shipping.into_item(TOTAL_SHIPPING_NAME) {
            result.items.push(item);
        }

        result
    }
}

/// 표지 줄에서 금액을 읽고, 없으면 다음 줄에서 읽는다
fn amount_at(lines: &[&str], j: usize) -> Option<u64> {
    first_won(lines[j]).or_else(|| lines.get(j + 1).and_then(|next| first_won(next)))
}

fn scan_block(lines: &[&str], marker: usize) -> GmarketBlock {
    let mut block = GmarketBlock::default();
    let end = (marker + GMARKET_STRIDE + 1).min(lines.len());

    for j in (marker + 2)..end {
        let line = lines[j];
        if line.starts_with(NAME_MARKER) {
            break;
        }

        if line.contains(ITEM_AMOUNT_MARKER) {
            if block.item_amount.is_none() {
                block.item_amount = if line.contains(DELETE_MARKER) {
                    first_won(line)
                } else {
                    lines.get(j + 1).and_then(|next| first_won(next))
                };
            }
        } else if line.contains(ORDER_AMOUNT_MARKER) {
            if block.order_amount.is_none() {
                block.order_amount = amount_at(lines, j);
            }
        } else if line.contains(DISCOUNT_MARKER) {
            if block.discount.is_none() {
                block.discount = amount_at(lines, j);
            }
        } else if line.contains(SHIPPING_MARKER) {
            if block.shipping.is_none() {
                let free = line.contains(FREE_SHIPPING)
                    || lines.get(j + 1).is_some_and(|next| next.contains(FREE_SHIPPING));
                block.shipping = if free { Some(0) } else { amount_at(lines, j) };
            }
        }
    }

    // 숫자 줄은 표지를 포함할 수 없으므로 따로 찾는다
    block.quantity = first_quantity(
        lines
            .iter()
            .take(end)
            .skip(marker + 2)
            .take_while(|line| !line.starts_with(NAME_MARKER))
            .copied()
            .filter(|line| is_numeric_line(line)),
    );

    block
}
