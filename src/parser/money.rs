use regex::Regex;
use std::sync::LazyLock;

// 천 단위 쉼표가 있거나 없는 원화 금액
static RE_WON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,3}(?:,\d{3})+|\d+)\s*원").unwrap());

/// "12,000" → 12000. 숫자가 없으면 None.
pub fn parse_won(digits: &str) -> Option<u64> {
    let cleaned: String = digits.chars().filter(|c| *c != ',').collect();
    cleaned.parse().ok()
}

/// 줄에서 처음 나오는 원화 금액
pub fn first_won(line: &str) -> Option<u64> {
    RE_WON.captures(line).and_then(|caps| parse_won(&caps[1]))
}

pub fn has_won(line: &str) -> bool {
    RE_WON.is_match(line)
}

/// 숫자로만 이루어진 줄 (수량 줄)
pub fn is_numeric_line(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// 첫 번째 숫자 줄을 수량으로 읽기
///
/// 첫 숫자 줄에서 멈춘다. 그 값이 u32 범위를 넘으면 뒤 줄을 보지 않고 None.
pub fn first_quantity<'a>(lines: impl IntoIterator<Item = &'a str>) -> Option<u32> {
    lines
        .into_iter()
        .find(|line| is_numeric_line(line))
        .and_then(|line| line.parse().ok())
}
