//! 사이트별 장바구니 텍스트 파서
//!
//! 각 사이트는 복사했을 때 줄 구조가 다르다. 파서는 공통 코드 없이 같은 출력 계약만 따른다:
//! 텍스트 순서대로의 상품 행, 그리고 배송비가 있으면 마지막에 "건" 단위 행 하나.

pub mod coupang;
pub mod gmarket;
pub mod icecream;
pub mod money;
pub mod normalize;
pub mod redpoint;

pub use coupang::CoupangParser;
pub use gmarket::GmarketParser;
pub use icecream::IceCreamMallParser;
pub use normalize::normalize;
pub use redpoint::RedPointParser;

use crate::models::{ParseResult, Site};
use tracing::{info, warn};

/// 정규화된 줄 목록 → 품목 행. 실패하지 않는다 (패턴 불일치는 다음 줄로 넘어갈 뿐).
pub trait SiteParser: Send + Sync {
    fn site(&self) -> Site;

    fn parse_lines(&self, lines: &[&str]) -> ParseResult;
}

pub fn parser_for(site: Site) -> &'static dyn SiteParser {
    match site {
        Site::Coupang => &CoupangParser,
        Site::IceCreamMall => &IceCreamMallParser,
        Site::Gmarket => &GmarketParser,
        Site::RedPoint => &RedPointParser,
    }
}

/// 상태 없는 진입점: 같은 입력이면 항상 같은 결과
pub fn parse(site: Site, text: &str) -> ParseResult {
    let lines = normalize(text);
    let result = parser_for(site).parse_lines(&lines);

    info!(
        "[{}] 파싱 완료: {} 줄 → {} 행",
        site,
        lines.len(),
        result.items.len()
    );
    if result.defaulted.total() > 0 {
        warn!(
            "[{}] 기본값으로 채운 필드: 수량 {}, 금액 {}",
            site, result.defaulted.quantity, result.defaulted.price
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_matches_site() {
        for site in Site::ALL {
            assert_eq!(parser_for(site).site(), site);
        }
    }

    #[test]
    fn empty_text_gives_empty_result_for_every_site() {
        for site in Site::ALL {
            let result = parse(site, "  \n\n ");
            assert!(result.is_empty(), "{site:?}");
            assert_eq!(result.site, site);
        }
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "Widget A\n도착 보장 수요일\n12,000원\n2\n배송비 + 3,000원\n";
        assert_eq!(parse(Site::Coupang, text), parse(Site::Coupang, text));
    }
}
