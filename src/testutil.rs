//! Test support: an independent reference renderer.

use crate::glyphs::{DIGITS, MULTIPLIERS, SCALES};

/// Renders the decimal string `dec` as kanji.
///
/// Deliberately structured unlike the engine: it slices the
/// decimal string into four-digit groups and formats each group
/// on its own, so the two implementations share no arithmetic.
pub(crate) fn reference(dec: &str) -> String {
    if dec == "0" {
        return DIGITS[0].to_string();
    }

    let digits: Vec<usize> = dec.bytes().map(|b| usize::from(b - b'0')).collect();
    let len = digits.len();
    let top = (len - 1) / 4;

    let mut out = String::new();
    for man in (0..=top).rev() {
        // The value of group `man`, from its up-to-four digits.
        let mut group = 0usize;
        for ju in (0..4).rev() {
            let place = man * 4 + ju;
            if place < len {
                group = group * 10 + digits[len - 1 - place];
            }
        }
        if group == 0 {
            continue;
        }
        for ju in (0..4usize).rev() {
            let d = (group / 10usize.pow(ju as u32)) % 10;
            if d == 0 {
                continue;
            }
            if d > 1 || ju == 0 || man > 0 {
                out.push_str(DIGITS[d]);
            }
            if ju > 0 {
                out.push_str(MULTIPLIERS[ju]);
            }
        }
        if man > 0 {
            out.push_str(SCALES[man]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference() {
        assert_eq!(reference("0"), "〇");
        assert_eq!(reference("10"), "十");
        assert_eq!(reference("1234"), "千二百三十四");
        assert_eq!(reference("10000"), "一万");
        assert_eq!(reference("100000001"), "一億一");
    }
}
