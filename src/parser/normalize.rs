/// 붙여넣은 텍스트를 앞뒤 공백을 제거한 비어 있지 않은 줄 목록으로 변환
pub fn normalize(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
