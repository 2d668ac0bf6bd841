//! Final-consonant (batchim) predicates for choosing particle allomorphs.

const SYLLABLE_FIRST: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const FINALS_PER_MEDIAL: u32 = 28;
const RIEUL_FINAL: u32 = 8;

/// Index of the final consonant slot of the last character, `0` meaning "none".
///
/// Arabic digits are read the way they are pronounced in Korean (`3` is 삼,
/// `7` is 칠, ...). Any other non-Hangul character is treated as open.
fn final_index(word: &str) -> Option<u32> {
    let last = word.chars().last()?;
    let code = last as u32;
    if (SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&code) {
        return Some((code - SYLLABLE_FIRST) % FINALS_PER_MEDIAL);
    }
    let jong = match last {
        // 영(ㅇ) 일(ㄹ) 이 삼(ㅁ) 사 오 육(ㄱ) 칠(ㄹ) 팔(ㄹ) 구
        '0' => 21,
        '1' | '7' | '8' => RIEUL_FINAL,
        '3' => 16,
        '6' => 1,
        _ => 0,
    };
    Some(jong)
}

/// True when the last syllable of `word` is closed by a consonant.
pub fn has_final_consonant(word: &str) -> bool {
    final_index(word).is_some_and(|jong| jong != 0)
}

/// True when the last syllable of `word` ends in the liquid ㄹ.
pub fn has_liquid_final(word: &str) -> bool {
    final_index(word) == Some(RIEUL_FINAL)
}

/// Object marker for a quoted phrase: 을 after a consonant, 를 after a vowel.
pub fn object_marker(word: &str) -> &'static str {
    if has_final_consonant(word) {
        "을"
    } else {
        "를"
    }
}

/// Instrumental marker for a quoted phrase: 으로 after a consonant other than ㄹ, 로 otherwise.
pub fn instrumental_marker(word: &str) -> &'static str {
    if has_final_consonant(word) && !has_liquid_final(word) {
        "으로"
    } else {
        "로"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_final_consonants() {
        assert!(has_final_consonant("동물"));
        assert!(has_final_consonant("자동차량"));
        assert!(!has_final_consonant("학교"));
        assert!(!has_final_consonant("자동차"));
    }

    #[test]
    fn detects_liquid_finals() {
        assert!(has_liquid_final("동물"));
        assert!(has_liquid_final("서울"));
        assert!(!has_liquid_final("학생"));
        assert!(!has_liquid_final("학교"));
    }

    #[test]
    fn empty_and_foreign_words_are_open() {
        assert!(!has_final_consonant(""));
        assert!(!has_liquid_final(""));
        assert!(!has_final_consonant("ABC"));
        assert!(!has_final_consonant("ㄱ"));
    }

    #[test]
    fn trailing_digits_follow_their_reading() {
        assert!(has_final_consonant("제3"));
        assert!(!has_liquid_final("제3"));
        assert!(has_liquid_final("COVID1"));
        assert!(has_final_consonant("10"));
        assert!(!has_final_consonant("제2"));
        assert!(!has_final_consonant("제9"));
    }

    #[test]
    fn picks_markers() {
        assert_eq!(object_marker("동물"), "을");
        assert_eq!(object_marker("학교"), "를");
        assert_eq!(instrumental_marker("학교"), "로");
        assert_eq!(instrumental_marker("동물"), "로");
        assert_eq!(instrumental_marker("학생"), "으로");
    }
}
