//! Digit-length resolution.
//!
//! The digit count of a positive magnitude is derived from its
//! bit length: a value `b` bits long has either
//! `floor(b * log10(2)) + 1` decimal digits or one fewer, so a
//! fixed table gives the upper candidate and a single comparison
//! against the power-of-ten table settles it. No loops, no
//! division.

use crate::magnitude::Magnitude;

/// Sized for the largest supported bit length; 10^72 - 1 is 240
/// bits.
const MAX_BITS: usize = 256;

/// Entry `p` is the digit index of the largest value whose
/// highest set bit is `p`, i.e. `floor((p + 1) * log10(2))`.
#[allow(clippy::indexing_slicing)] // b - 1 < MAX_BITS
static ESTIMATES: [u8; MAX_BITS] = {
    let mut t = [0u8; MAX_BITS];
    let mut b = 1;
    while b <= MAX_BITS {
        // 1233/4096 ~= log10(2)
        t[b - 1] = ((b * 1233) >> 12) as u8;
        b += 1;
    }
    t
};

/// Returns the zero-based index of the most significant decimal
/// digit of `n`, i.e. its digit count minus one.
///
/// `n` must be positive and within the representation's maximum,
/// which the entry points establish before calling.
pub(crate) fn msd_index<T: Magnitude>(n: &T) -> usize {
    debug_assert!(!n.is_zero());

    let bits = n.bit_len();
    debug_assert!(bits >= 1 && bits <= MAX_BITS);

    #[allow(clippy::indexing_slicing)] // bits <= MAX_BITS
    let mut est = usize::from(ESTIMATES[bits - 1]);
    if est > T::MAX_DIGITS - 1 {
        // Only values above the power table's top entry estimate
        // past it, so the clamped index is already exact.
        est = T::MAX_DIGITS - 1;
    }
    // The estimate is exact or one too high.
    #[allow(clippy::indexing_slicing)] // est < MAX_DIGITS
    if est > 0 && n.lt(&T::pow10()[est]) {
        est -= 1;
    }
    est
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msd_index_small() {
        for n in 1..=1_000_000u64 {
            assert_eq!(msd_index(&n), n.ilog10() as usize, "#{n}");
        }
    }

    #[test]
    fn test_msd_index_pow10_boundaries() {
        let pow10 = <u128 as Magnitude>::pow10().to_vec();
        for (i, &p) in pow10.iter().enumerate() {
            if p > 1 {
                assert_eq!(msd_index(&(p - 1)), i - 1, "10^{i} - 1");
            }
            assert_eq!(msd_index(&p), i, "10^{i}");
            assert_eq!(msd_index(&(p + 1)), i, "10^{i} + 1");
        }
    }

    #[test]
    fn test_msd_index_bit_boundaries() {
        for k in 0..128u32 {
            let v = 1u128 << k;
            assert_eq!(msd_index(&v), v.ilog10() as usize, "1 << {k}");
            if v > 1 {
                assert_eq!(msd_index(&(v - 1)), (v - 1).ilog10() as usize);
                assert_eq!(msd_index(&(v + 1)), (v + 1).ilog10() as usize);
            }
        }
        assert_eq!(msd_index(&u64::MAX), 19);
        assert_eq!(msd_index(&u128::MAX), 38);
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_msd_index_big() {
        use num_bigint::BigUint;
        use num_traits::Pow;

        for e in [0u32, 1, 4, 17, 38, 39, 67, 68, 71] {
            let p = BigUint::from(10u32).pow(e);
            assert_eq!(msd_index(&p), e as usize, "10^{e}");
            if e > 0 {
                assert_eq!(msd_index(&(&p - 1u32)), e as usize - 1, "10^{e} - 1");
            }
        }
        // The cap itself, one shy of estimating past the table.
        let max = BigUint::from(10u32).pow(72u32) - 1u32;
        assert_eq!(msd_index(&max), 71);
    }
}
