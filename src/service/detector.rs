use crate::models::{Site, Unit};
use crate::parser::{normalize, parser_for};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;

/// 네 파서를 모두 돌린 결과
///
/// 파서들이 느슨해서 (특히 레드포인트) 다른 사이트 텍스트에서도 행이 나온다.
/// 사이트를 확정하지 않고, 잘못 고른 사이트를 알려주는 힌트로만 쓴다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    /// 사이트별 상품 행 수 (배송비 행 제외), 선택 화면 순서
    pub counts: IndexMap<Site, usize>,
}

impl Detection {
    /// `selected` 외에 상품이 인식된 사이트 (많은 순, 동률이면 선택 화면 순서)
    pub fn suggestions(&self, selected: Site) -> Vec<Site> {
        let mut sites: Vec<(Site, usize)> = self
            .counts
            .iter()
            .filter(|(site, count)| **site != selected && **count > 0)
            .map(|(site, count)| (*site, *count))
            .collect();
        sites.sort_by(|a, b| b.1.cmp(&a.1));
        sites.into_iter().map(|(site, _)| site).collect()
    }
}

/// 파서는 서로 독립적이고 공유 상태가 없으므로 병렬로 실행
pub fn detect(text: &str) -> Detection {
    let lines = normalize(text);

    let counts: Vec<(Site, usize)> = Site::ALL[..]
        .par_iter()
        .map(|&site| {
            let result = parser_for(site).parse_lines(&lines);
            let products = result
                .items
                .iter()
                .filter(|item| item.unit == Unit::Piece)
                .count();
            (site, products)
        })
        .collect();

    tracing::debug!("site detection: {:?}", counts);

    Detection {
        counts: counts.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_products_per_site() {
        let detection = detect("Book B\nx\nBook B\n단일상품 / 3개\n9,000원\n");
        assert_eq!(detection.counts[&Site::IceCreamMall], 1);
        assert_eq!(detection.counts[&Site::Gmarket], 0);
    }

    #[test]
    fn counts_keep_selector_order() {
        let detection = detect("아무 내용");
        let order: Vec<_> = detection.counts.keys().copied().collect();
        assert_eq!(order, Site::ALL.to_vec());
    }

    #[test]
    fn shipping_rows_are_not_counted() {
        let detection = detect("배송비 3,000원");
        assert!(detection.counts.values().all(|count| *count == 0));
        assert!(detection.suggestions(Site::Coupang).is_empty());
    }

    #[test]
    fn suggestions_exclude_selected_and_sort_by_count() {
        let detection = Detection {
            counts: [
                (Site::Coupang, 1),
                (Site::IceCreamMall, 0),
                (Site::Gmarket, 3),
                (Site::RedPoint, 1),
            ]
            .into_iter()
            .collect(),
        };
        assert_eq!(
            detection.suggestions(Site::IceCreamMall),
            vec![Site::Gmarket, Site::Coupang, Site::RedPoint]
        );
        assert_eq!(detection.suggestions(Site::Gmarket), vec![Site::Coupang, Site::RedPoint]);
    }
}
