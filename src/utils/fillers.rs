use once_cell::sync::Lazy;

use crate::{error::PuzzleError, puzzle::RandomSource};

/// Common Hangul syllables used to pad Korean puzzles.
/// Repeats are intentional: they weight those syllables more heavily.
pub static KOREAN_SYLLABLES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    "가 개 갸 거 게 겨 고 구 기 나 내 냐 너 네 녀 노 누 니
     다 대 댜 더 데 뎌 도 두 디 라 래 랴 러 레 려 로 루 리
     마 매 먀 머 메 며 모 무 미 바 배 뱌 버 베 벼 보 부 비
     사 새 샤 서 세 셔 소 수 시 아 애 야 어 에 여 오 우 이
     자 재 쟈 저 제 져 조 주 지 차 채 챠 처 체 쳐 초 추 치
     카 캐 캬 커 케 켜 코 쿠 키 타 태 탸 터 테 텨 토 투 티
     파 패 퍄 퍼 페 펴 포 푸 피 하 해 햐 허 헤 혀 호 후 히
     갖 같 개 객 갠 걀 걷 걸 검 겁 겉 결 겹 경 곁 공 과 관
     광 괜 괴 굉 교 굳 귀 극 근 글 깊 꽂 꽃 꿈 끝 나 난 날
     남 납 낫 낮 내 냇 냉 너 넉 널 넓 넘 넣 녹 논 놀 농 높
     눈 눕 느 늑 늦 다 단 달 닮 담 답 당 닿 대 댁 댐 덜 덤
     덥 덧 덩 덫 덴 뎌 도 독 돈 돌 동 돼 되 된 두 둔 둘 둠
     둡 뒤 뒷 드 득 들 등 따 딴 딸 땀 땅 때 떠 떡 떨 떻 또
     똑 똥 뚜 뜯 뜻 라 락 란 람 랍 랑 래 랜 랭 랴 량 러 럭
     런 럴 럼 럽 렇 레 렌 려 력 련 렬 렴 렵 령 례 로 록 론
     롤 롬 롱 뢰 료 룡 루 룩 룬 룰 룸 룻 뤼 류 률 륨 륭 르
     륵 른 를 름 릇 리 릭 린 림 립 링 마 막 만 많 말 망 맞
     매 맥 맴 맵"
        .split_whitespace()
        .collect()
});

/// Symbols drawn (with replacement) to fill cells no word landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillerPalette {
    symbols: Vec<String>,
}

impl FillerPalette {
    pub fn korean() -> Self {
        Self {
            symbols: KOREAN_SYLLABLES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn latin() -> Self {
        Self {
            symbols: ('A'..='Z').map(String::from).collect(),
        }
    }

    /// Palette from caller-supplied symbols. Blank entries are dropped.
    pub fn custom<I, S>(symbols: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols
            .into_iter()
            .map(Into::into)
            .filter(|s| !s.trim().is_empty())
            .collect();

        if symbols.is_empty() {
            return Err(PuzzleError::EmptyPalette);
        }
        Ok(Self { symbols })
    }

    /// Look up a built-in palette by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "korean" | "hangul" => Some(Self::korean()),
            "latin" | "english" => Some(Self::latin()),
            _ => None,
        }
    }

    pub fn choose(&self, rng: &mut impl RandomSource) -> &str {
        &self.symbols[rng.index(self.symbols.len())]
    }

    #[allow(dead_code)]
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::random::scripted::ScriptedSource;

    #[test]
    fn test_korean_palette() {
        let palette = FillerPalette::korean();
        assert_eq!(palette.len(), 310);
        assert!(palette.contains("가"));
        assert!(palette.contains("맵"));
    }

    #[test]
    fn test_latin_palette() {
        let palette = FillerPalette::latin();
        assert_eq!(palette.len(), 26);
        assert!(palette.contains("Q"));
        assert!(!palette.contains("가"));
    }

    #[test]
    fn test_custom_palette_rejects_empty() {
        assert_eq!(
            FillerPalette::custom(Vec::<String>::new()),
            Err(PuzzleError::EmptyPalette)
        );
        assert_eq!(
            FillerPalette::custom(["  ", ""]),
            Err(PuzzleError::EmptyPalette)
        );
    }

    #[test]
    fn test_choose_uses_source() {
        let palette = FillerPalette::custom(["ㄱ", "ㄴ", "ㄷ"]).unwrap();
        let mut source = ScriptedSource::new([2, 0]);
        assert_eq!(palette.choose(&mut source), "ㄷ");
        assert_eq!(palette.choose(&mut source), "ㄱ");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(FillerPalette::from_name("Latin"), Some(FillerPalette::latin()));
        assert!(FillerPalette::from_name("klingon").is_none());
    }
}
