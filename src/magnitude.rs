//! Per-representation integer capabilities.
//!
//! Narrow fixed widths funnel through the `u64` and `u128`
//! engines, so only those two (and `BigUint` with the `bigint`
//! feature) carry a capability table.

/// An unsigned magnitude the rendering engine can decompose.
pub(crate) trait Magnitude: Sized + 'static {
    /// The number of decimal digits in the largest supported
    /// value.
    const MAX_DIGITS: usize;

    /// Returns the value ten, the base the power table is built
    /// from. The fixed-width tables bake it into their `const`
    /// builders instead.
    #[cfg_attr(not(feature = "bigint"), allow(dead_code))]
    fn ten() -> Self;

    /// Returns the table of successive powers of ten, 10^0
    /// through 10^(`MAX_DIGITS` - 1). Built once, immutable for
    /// the process lifetime.
    fn pow10() -> &'static [Self];

    /// Returns the bit length. The magnitude must be positive.
    fn bit_len(&self) -> usize;

    /// Divides by `div`, returning the quotient and remainder.
    ///
    /// `div` must be the power of ten at the magnitude's leading
    /// position, so the quotient is always a single digit.
    fn div_rem(&self, div: &Self) -> (u8, Self);

    /// Reports whether the magnitude is zero.
    fn is_zero(&self) -> bool;

    /// Reports whether `self < other`.
    fn lt(&self, other: &Self) -> bool;
}

macro_rules! impl_magnitude {
    ($ty:ty, $digits:literal, $table:ident) => {
        #[allow(clippy::indexing_slicing)] // i < $digits
        static $table: [$ty; $digits] = {
            let mut t: [$ty; $digits] = [1; $digits];
            let mut i = 1;
            while i < $digits {
                t[i] = t[i - 1] * 10;
                i += 1;
            }
            t
        };

        impl Magnitude for $ty {
            const MAX_DIGITS: usize = $digits;

            fn ten() -> Self {
                10
            }

            fn pow10() -> &'static [Self] {
                &$table
            }

            fn bit_len(&self) -> usize {
                (<$ty>::BITS - self.leading_zeros()) as usize
            }

            fn div_rem(&self, div: &Self) -> (u8, Self) {
                let q = self / div;
                debug_assert!(q < 10);
                (q as u8, self % div)
            }

            fn is_zero(&self) -> bool {
                *self == 0
            }

            fn lt(&self, other: &Self) -> bool {
                self < other
            }
        }
    };
}
impl_magnitude!(u64, 20, POW10_64);
impl_magnitude!(u128, 39, POW10_128);

#[cfg(feature = "bigint")]
mod big {
    use std::sync::OnceLock;

    use num_bigint::BigUint;
    use num_traits::{One, ToPrimitive, Zero};

    use super::Magnitude;
    use crate::glyphs;

    /// Policy cap for arbitrary-precision input: the scale-word
    /// table ends at 無量大数 (10^68), so the largest nameable
    /// magnitude has 72 digits.
    pub(crate) const BIG_MAX_DIGITS: usize = 72;

    const _: () = assert!(glyphs::SCALES.len() * 4 == BIG_MAX_DIGITS);

    impl Magnitude for BigUint {
        const MAX_DIGITS: usize = BIG_MAX_DIGITS;

        fn ten() -> Self {
            BigUint::from(10_u32)
        }

        fn pow10() -> &'static [Self] {
            static TABLE: OnceLock<Vec<BigUint>> = OnceLock::new();
            TABLE
                .get_or_init(|| {
                    let ten = Self::ten();
                    let mut t = Vec::with_capacity(Self::MAX_DIGITS);
                    t.push(BigUint::one());
                    for i in 1..Self::MAX_DIGITS {
                        #[allow(clippy::indexing_slicing)] // i - 1 was just pushed
                        let next = &t[i - 1] * &ten;
                        t.push(next);
                    }
                    t
                })
                .as_slice()
        }

        fn bit_len(&self) -> usize {
            self.bits() as usize
        }

        fn div_rem(&self, div: &Self) -> (u8, Self) {
            let (q, r) = num_integer::Integer::div_rem(self, div);
            debug_assert!(q.to_u8().is_some());
            (q.to_u8().unwrap_or(0), r)
        }

        fn is_zero(&self) -> bool {
            Zero::is_zero(self)
        }

        fn lt(&self, other: &Self) -> bool {
            self < other
        }
    }

    /// The largest supported `BigUint`, 10^72 - 1.
    pub(crate) fn big_max() -> &'static BigUint {
        static MAX: OnceLock<BigUint> = OnceLock::new();
        MAX.get_or_init(|| {
            let table = <BigUint as Magnitude>::pow10();
            #[allow(clippy::indexing_slicing)] // the table is never empty
            let top = &table[table.len() - 1];
            top * 10_u32 - 1_u32
        })
    }
}
#[cfg(feature = "bigint")]
pub(crate) use big::{big_max, BIG_MAX_DIGITS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10_tables() {
        let t64 = <u64 as Magnitude>::pow10();
        assert_eq!(t64.len(), u64::MAX.ilog10() as usize + 1);
        for (i, &p) in t64.iter().enumerate() {
            assert_eq!(p, 10u64.pow(i as u32), "#{i}");
        }

        let t128 = <u128 as Magnitude>::pow10();
        assert_eq!(t128.len(), u128::MAX.ilog10() as usize + 1);
        for w in t128.windows(2) {
            assert_eq!(w[1], w[0] * 10);
        }
    }

    #[test]
    fn test_div_rem_leading_digit() {
        let t = <u64 as Magnitude>::pow10();
        for n in [1u64, 9, 10, 99, 12345, u64::MAX] {
            let (d, r) = n.div_rem(&t[n.ilog10() as usize]);
            assert!(d >= 1 && d <= 9, "#{n}");
            assert!(r < t[n.ilog10() as usize], "#{n}");
        }
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_big_table() {
        use num_bigint::BigUint;
        use num_traits::Pow;

        let t = <BigUint as Magnitude>::pow10();
        assert_eq!(t.len(), BIG_MAX_DIGITS);
        for (i, p) in t.iter().enumerate() {
            assert_eq!(*p, BigUint::from(10u32).pow(i as u32), "#{i}");
        }
        assert_eq!(
            *big_max(),
            BigUint::from(10u32).pow(72u32) - 1u32,
        );
    }
}
