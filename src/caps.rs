//! The capability registry: a closed mapping from supported
//! integer representations to their rendering limits, for sizing
//! destination buffers ahead of a call.

use crate::conv::Error;
use crate::glyphs;

/// A supported integer representation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Repr {
    /// `u8`.
    U8,
    /// `i8`.
    I8,
    /// `u16`.
    U16,
    /// `i16`.
    I16,
    /// `u32`.
    U32,
    /// `i32`.
    I32,
    /// `u64`.
    U64,
    /// `i64`.
    I64,
    /// `u128`.
    U128,
    /// `i128`.
    I128,
    /// `usize`.
    Usize,
    /// `isize`.
    Isize,
    /// Arbitrary precision (`BigUint`/`BigInt`), capped at
    /// 10^72 - 1. Registered only with the `bigint` feature.
    Big,
}

/// Per-representation rendering limits.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Caps {
    /// The number of decimal digits in the largest renderable
    /// value.
    pub max_digits: u32,
    /// The worst-case rendered length in bytes.
    pub max_str_len: usize,
}

const fn decimal_digits(mut v: u128) -> u32 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

const fn fixed(max: u128) -> Caps {
    let max_digits = decimal_digits(max);
    Caps {
        max_digits,
        max_str_len: glyphs::max_str_len(max_digits as usize),
    }
}

/// Returns the capabilities registered for `repr`.
///
/// Fails with [`Error::UnsupportedType`] when the representation
/// has no registered capabilities, which is the case for
/// [`Repr::Big`] without the `bigint` feature.
#[allow(clippy::cast_lossless, clippy::cast_sign_loss)] // `From` is not const; MAX is non-negative
pub const fn caps(repr: Repr) -> Result<Caps, Error> {
    match repr {
        Repr::U8 => Ok(fixed(u8::MAX as u128)),
        Repr::I8 => Ok(fixed(i8::MAX as u128)),
        Repr::U16 => Ok(fixed(u16::MAX as u128)),
        Repr::I16 => Ok(fixed(i16::MAX as u128)),
        Repr::U32 => Ok(fixed(u32::MAX as u128)),
        Repr::I32 => Ok(fixed(i32::MAX as u128)),
        Repr::U64 => Ok(fixed(u64::MAX as u128)),
        Repr::I64 => Ok(fixed(i64::MAX as u128)),
        Repr::U128 => Ok(fixed(u128::MAX)),
        Repr::I128 => Ok(fixed(i128::MAX as u128)),
        Repr::Usize => Ok(fixed(usize::MAX as u128)),
        Repr::Isize => Ok(fixed(isize::MAX as u128)),
        Repr::Big => {
            #[cfg(feature = "bigint")]
            {
                let max_digits = crate::magnitude::BIG_MAX_DIGITS;
                Ok(Caps {
                    max_digits: max_digits as u32,
                    max_str_len: glyphs::max_str_len(max_digits),
                })
            }
            #[cfg(not(feature = "bigint"))]
            {
                Err(Error::UnsupportedType)
            }
        }
    }
}

/// Returns the worst-case rendered length in bytes for `repr`,
/// for sizing the destination passed to
/// [`to_kanji`][crate::to_kanji].
pub const fn max_str_len(repr: Repr) -> Result<usize, Error> {
    match caps(repr) {
        Ok(c) => Ok(c.max_str_len),
        Err(e) => Err(e),
    }
}
