//! The kanji numeral glyph tables.
//!
//! Fixed data, shared by every representation: the digit glyphs,
//! the sub-group multipliers marking position within a four-digit
//! myriad group, and the myriad-scale words marking powers of
//! 10^4. The tables end at 無量大数 (10^68), which bounds the
//! largest magnitude the crate can name at 10^72 - 1.

/// The glyph for zero, used only by the zero fast path.
pub(crate) const ZERO: &str = "〇";

/// Digit glyphs, indexed by digit value.
pub(crate) const DIGITS: [&str; 10] = [
    "〇", "一", "二", "三", "四", "五", "六", "七", "八", "九",
];

/// Sub-group multipliers, indexed by position within a group
/// (1 = tens, 2 = hundreds, 3 = thousands). Index 0 is unused.
pub(crate) const MULTIPLIERS: [&str; 4] = ["", "十", "百", "千"];

/// Myriad-scale words, indexed by group (1 = 10^4, 2 = 10^8, …).
/// Index 0 (the units group) is unused. The words past 載 are
/// multi-glyph.
pub(crate) const SCALES: [&str; 18] = [
    "",
    "万",
    "億",
    "兆",
    "京",
    "垓",
    "𥝱",
    "穣",
    "溝",
    "澗",
    "正",
    "載",
    "極",
    "恒河沙",
    "阿僧祇",
    "那由他",
    "不可思議",
    "無量大数",
];

/// Every digit glyph and multiplier is three UTF-8 bytes, so a
/// fully populated group (four digits plus 十百千) is 21 bytes.
const GROUP_MAX_LEN: usize = 21;

/// Returns the worst-case output length in bytes for a magnitude
/// with at most `max_digits` decimal digits.
pub(crate) const fn max_str_len(max_digits: usize) -> usize {
    let groups = (max_digits + 3) / 4;
    let mut n = groups * GROUP_MAX_LEN;
    // Scale words for groups 1 through `groups - 1`.
    let mut g = 1;
    while g < groups {
        n += SCALES[g].len();
        g += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_lengths() {
        for s in DIGITS {
            assert_eq!(s.len(), 3, "{s}");
        }
        for s in &MULTIPLIERS[1..] {
            assert_eq!(s.len(), 3, "{s}");
        }
        // 𥝱 is the only single-glyph scale word outside the BMP.
        assert_eq!(SCALES[6].len(), 4);
    }

    #[test]
    fn test_max_str_len() {
        // One group, no scale words.
        assert_eq!(max_str_len(3), 21);
        assert_eq!(max_str_len(4), 21);
        // Two groups plus 万.
        assert_eq!(max_str_len(5), 2 * 21 + 3);
        // u64: 20 digits, groups through 京.
        assert_eq!(max_str_len(20), 5 * 21 + 4 * 3);
    }
}
