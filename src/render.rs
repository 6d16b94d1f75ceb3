//! The rendering engine: zero fast path plus the myriad-group
//! state machine.

use crate::digits;
use crate::glyphs;
use crate::magnitude::Magnitude;

/// Writes `glyph` into `dst` at `at`, returning the glyph's
/// length in bytes.
#[allow(clippy::indexing_slicing)] // callers size `dst`, see `max_str_len`
fn put(dst: &mut [u8], at: usize, glyph: &str) -> usize {
    let s = glyph.as_bytes();
    dst[at..at + s.len()].copy_from_slice(s);
    s.len()
}

/// Renders `n` into `dst`, returning the number of bytes written.
///
/// `n` must be within the representation's maximum; the entry
/// points in `conv` establish that.
pub(crate) fn render<T: Magnitude>(n: T, dst: &mut [u8]) -> usize {
    if n.is_zero() {
        return put(dst, 0, glyphs::ZERO);
    }
    let msd = digits::msd_index(&n);
    grouped(n, msd, dst)
}

/// Walks decimal positions from `msd` down to zero, tracking the
/// myriad group `man` and the position `ju` within it, and emits
/// digit glyphs, sub-group multipliers, and scale words in
/// reading order.
#[allow(clippy::indexing_slicing)] // i <= msd < MAX_DIGITS; d, ju, man are in range
fn grouped<T: Magnitude>(n: T, msd: usize, dst: &mut [u8]) -> usize {
    let pow10 = T::pow10();

    let mut man = msd / 4;
    let mut ju = msd % 4;
    // Whether the current group has emitted a digit and so needs
    // its scale word.
    let mut pending = false;
    let mut len = 0;
    let mut rest = n;

    for i in (0..=msd).rev() {
        let (d, r) = rest.div_rem(&pow10[i]);
        rest = r;

        if d != 0 {
            // The leading 一 is elided before a multiplier, but
            // only in the units group: every higher group anchors
            // its scale word with an explicit digit.
            if d > 1 || ju == 0 || man > 0 {
                len += put(dst, len, glyphs::DIGITS[usize::from(d)]);
            }
            if ju > 0 {
                len += put(dst, len, glyphs::MULTIPLIERS[ju]);
            }
            pending = true;
        }

        if ju == 0 {
            // The group closed. An all-zero group contributes
            // nothing, not even its scale word.
            if man > 0 {
                if pending {
                    len += put(dst, len, glyphs::SCALES[man]);
                    pending = false;
                }
                if rest.is_zero() {
                    break;
                }
            }
            ju = 3;
            man = man.saturating_sub(1);
        } else {
            ju -= 1;
        }
    }

    len
}
