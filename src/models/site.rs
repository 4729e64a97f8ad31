use serde::{Deserialize, Serialize};
use std::fmt;

/// 지원하는 쇼핑몰
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    #[serde(alias = "쿠팡")]
    Coupang,
    #[serde(alias = "아이스크림몰")]
    IceCreamMall,
    #[serde(alias = "G마켓", alias = "지마켓")]
    Gmarket,
    #[serde(alias = "레드포인트")]
    RedPoint,
}

impl Site {
    /// 선택 화면 순서
    pub const ALL: [Site; 4] = [Site::Coupang, Site::IceCreamMall, Site::Gmarket, Site::RedPoint];

    /// 파일명 등에 쓰는 한글 이름
    pub fn display_name(&self) -> &'static str {
        match self {
            Site::Coupang => "쿠팡",
            Site::IceCreamMall => "아이스크림몰",
            Site::Gmarket => "G마켓",
            Site::RedPoint => "레드포인트",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
