use regex::Regex;
use std::sync::LazyLock;

static EMPTY_PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"제+항").expect("EMPTY_PARAGRAPH_RE should compile"));
static CLAUSE_PERIOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.호").expect("CLAUSE_PERIOD_RE should compile"));
static SUB_ITEM_PERIOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([가-힣])\.목").expect("SUB_ITEM_PERIOD_RE should compile"));

const CIRCLED_ORDINALS: u32 = 20;

/// Numeric value of a single numeral glyph: ASCII and full-width digits, circled,
/// parenthesized and dotted numbers, Roman numerals and the basic CJK numerals.
fn numeral_value(ch: char) -> Option<u32> {
    if let Some(digit) = ch.to_digit(10) {
        return Some(digit);
    }
    let code = ch as u32;
    let value = match code {
        0xFF10..=0xFF19 => code - 0xFF10,
        0x2460..=0x2473 => code - 0x2460 + 1,
        0x2474..=0x2487 => code - 0x2474 + 1,
        0x2488..=0x249B => code - 0x2488 + 1,
        0x24EA => 0,
        0x3251..=0x325F => code - 0x3251 + 21,
        0x32B1..=0x32BF => code - 0x32B1 + 36,
        0x2776..=0x277F => code - 0x2776 + 1,
        0x2780..=0x2789 => code - 0x2780 + 1,
        0x278A..=0x2793 => code - 0x278A + 1,
        0x2160..=0x216B => code - 0x2160 + 1,
        _ => match ch {
            '〇' | '零' => 0,
            '一' => 1,
            '二' => 2,
            '三' => 3,
            '四' => 4,
            '五' => 5,
            '六' => 6,
            '七' => 7,
            '八' => 8,
            '九' => 9,
            '十' => 10,
            _ => return None,
        },
    };
    Some(value)
}

/// Converts a single numeral glyph (e.g. `②`) to its Arabic digits.
///
/// Anything that is not exactly one recognised glyph comes back unchanged, so
/// multi-digit numbers and empty strings pass straight through.
pub fn normalize_numeral(raw: &str) -> String {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => numeral_value(ch)
            .map(|value| value.to_string())
            .unwrap_or_else(|| raw.to_string()),
        _ => raw.to_string(),
    }
}

pub fn format_article_id(article_no: &str, branch_no: &str) -> String {
    if !branch_no.is_empty() && branch_no != "0" {
        format!("제{article_no}조의{branch_no}")
    } else {
        format!("제{article_no}조")
    }
}

/// Cleans up a raw citation: drops the `제` left behind by an empty paragraph
/// number and the periods carried over from clause (`1.`) and sub-item (`가.`) labels.
pub fn format_location(location: &str) -> String {
    let location = EMPTY_PARAGRAPH_RE.replace_all(location, "항");
    let location = CLAUSE_PERIOD_RE.replace_all(&location, "${1}호");
    SUB_ITEM_PERIOD_RE
        .replace_all(&location, "${1}목")
        .into_owned()
}

/// Marker placed before each law's block: ① through ⑳, then `(21)`, `(22)`, ...
pub fn law_ordinal(index: usize) -> String {
    match u32::try_from(index) {
        Ok(idx) if idx < CIRCLED_ORDINALS => char::from_u32(0x2460 + idx)
            .map(String::from)
            .unwrap_or_else(|| format!("({})", index + 1)),
        _ => format!("({})", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_numeral() {
        assert_eq!(normalize_numeral("①"), "1");
        assert_eq!(normalize_numeral("⑳"), "20");
        assert_eq!(normalize_numeral("㉑"), "21");
        assert_eq!(normalize_numeral("３"), "3");
        assert_eq!(normalize_numeral("7"), "7");
        assert_eq!(normalize_numeral("三"), "3");
    }

    #[test]
    fn test_normalize_numeral_fails_soft() {
        assert_eq!(normalize_numeral(""), "");
        assert_eq!(normalize_numeral("12"), "12");
        assert_eq!(normalize_numeral("가"), "가");
        assert_eq!(normalize_numeral("①의2"), "①의2");
    }

    #[test]
    fn test_format_article_id() {
        assert_eq!(format_article_id("12", "2"), "제12조의2");
        assert_eq!(format_article_id("12", "0"), "제12조");
        assert_eq!(format_article_id("12", ""), "제12조");
    }

    #[test]
    fn test_format_location() {
        assert_eq!(format_location("제5조제항제2.호"), "제5조항제2호");
        assert_eq!(format_location("제5조제2.호가.목"), "제5조제2호가목");
        assert_eq!(format_location("제12조의2제3항제4호"), "제12조의2제3항제4호");
        assert_eq!(format_location("제3조제1항제10의2.호"), "제3조제1항제10의2호");
    }

    #[test]
    fn test_format_location_is_idempotent() {
        let inputs = [
            "제5조제항제2.호",
            "제5조제2.호가.목",
            "제제항",
            "제1조제1.2.호나.목",
            "",
            "제7조",
        ];
        for input in inputs {
            let once = format_location(input);
            assert_eq!(format_location(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_law_ordinal() {
        assert_eq!(law_ordinal(0), "①");
        assert_eq!(law_ordinal(1), "②");
        assert_eq!(law_ordinal(19), "⑳");
        assert_eq!(law_ordinal(20), "(21)");
        assert_eq!(law_ordinal(21), "(22)");
    }
}
