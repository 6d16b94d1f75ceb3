//! The public rendering surface.

#[cfg(feature = "alloc")]
use alloc::string::String;
use core::fmt;
use core::str;

use crate::glyphs;
use crate::render;

mod private {
    use super::Error;

    pub trait Sealed {
        fn write(self, dst: &mut [u8]) -> Result<usize, Error>;
    }
}
use private::Sealed;

/// An integer that can be rendered as a kanji numeral.
///
/// Implemented for the primitive integers and, with the `bigint`
/// feature, for `BigUint` and `BigInt`. This trait is sealed and
/// cannot be implemented outside the crate.
pub trait Integer: Sealed {}

macro_rules! impl_narrow_unsigned {
    ($($ty:ty)*) => ($(
        impl Sealed for $ty {
            fn write(self, dst: &mut [u8]) -> Result<usize, Error> {
                Ok(render::render(u64::from(self), dst))
            }
        }
        impl Integer for $ty {}
    )*)
}
impl_narrow_unsigned! { u8 u16 u32 }

macro_rules! impl_narrow_signed {
    ($($ty:ty)*) => ($(
        impl Sealed for $ty {
            fn write(self, dst: &mut [u8]) -> Result<usize, Error> {
                if self < 0 {
                    return Err(Error::NegativeValue);
                }
                Ok(render::render(u64::from(self.unsigned_abs()), dst))
            }
        }
        impl Integer for $ty {}
    )*)
}
impl_narrow_signed! { i8 i16 i32 }

impl Sealed for u64 {
    fn write(self, dst: &mut [u8]) -> Result<usize, Error> {
        Ok(render::render(self, dst))
    }
}
impl Integer for u64 {}

impl Sealed for u128 {
    fn write(self, dst: &mut [u8]) -> Result<usize, Error> {
        Ok(render::render(self, dst))
    }
}
impl Integer for u128 {}

impl Sealed for usize {
    fn write(self, dst: &mut [u8]) -> Result<usize, Error> {
        Ok(render::render(self as u64, dst))
    }
}
impl Integer for usize {}

impl Sealed for i64 {
    fn write(self, dst: &mut [u8]) -> Result<usize, Error> {
        if self < 0 {
            return Err(Error::NegativeValue);
        }
        Ok(render::render(self.unsigned_abs(), dst))
    }
}
impl Integer for i64 {}

impl Sealed for i128 {
    fn write(self, dst: &mut [u8]) -> Result<usize, Error> {
        if self < 0 {
            return Err(Error::NegativeValue);
        }
        Ok(render::render(self.unsigned_abs(), dst))
    }
}
impl Integer for i128 {}

impl Sealed for isize {
    fn write(self, dst: &mut [u8]) -> Result<usize, Error> {
        if self < 0 {
            return Err(Error::NegativeValue);
        }
        Ok(render::render(self.unsigned_abs() as u64, dst))
    }
}
impl Integer for isize {}

#[cfg(feature = "bigint")]
mod big {
    use num_bigint::{BigInt, BigUint};

    use super::{private::Sealed, Error, Integer};
    use crate::{magnitude, render};

    impl Sealed for BigUint {
        fn write(self, dst: &mut [u8]) -> Result<usize, Error> {
            if &self > magnitude::big_max() {
                return Err(Error::ValueTooLarge);
            }
            Ok(render::render(self, dst))
        }
    }
    impl Integer for BigUint {}

    impl Sealed for BigInt {
        fn write(self, dst: &mut [u8]) -> Result<usize, Error> {
            match self.to_biguint() {
                Some(mag) => mag.write(dst),
                None => Err(Error::NegativeValue),
            }
        }
    }
    impl Integer for BigInt {}
}

/// Renders `x` into `dst` as a kanji numeral, returning the
/// number of bytes written.
///
/// # Panics
///
/// Panics if `dst` is too small for the rendered numeral. Size
/// `dst` from [`max_str_len`][crate::max_str_len], or use
/// [`Buffer`], which can never be undersized.
pub fn to_kanji<I: Integer>(x: I, dst: &mut [u8]) -> Result<usize, Error> {
    x.write(dst)
}

/// Renders `x` as an owned kanji numeral string.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn to_kanji_string<I: Integer>(x: I) -> Result<String, Error> {
    let mut buf = Buffer::new();
    let s = buf.format(x)?;
    Ok(String::from(s))
}

/// A buffer for rendering integers as kanji numerals.
#[derive(Copy, Clone, Debug)]
pub struct Buffer {
    buf: [u8; Self::MAX_STR_LEN],
}

impl Buffer {
    /// The length in bytes of the largest numeral any supported
    /// representation can produce.
    #[cfg(feature = "bigint")]
    pub const MAX_STR_LEN: usize = glyphs::max_str_len(crate::magnitude::BIG_MAX_DIGITS);
    /// The length in bytes of the largest numeral any supported
    /// representation can produce.
    #[cfg(not(feature = "bigint"))]
    pub const MAX_STR_LEN: usize =
        glyphs::max_str_len(<u128 as crate::magnitude::Magnitude>::MAX_DIGITS);

    /// Creates a `Buffer`.
    pub const fn new() -> Self {
        Self {
            buf: [0; Self::MAX_STR_LEN],
        }
    }

    /// Renders `x` into the buffer as a kanji numeral.
    pub fn format<I: Integer>(&mut self, x: I) -> Result<&str, Error> {
        let n = x.write(&mut self.buf)?;
        #[allow(clippy::indexing_slicing)] // n <= MAX_STR_LEN
        let s = &self.buf[..n];
        // SAFETY: the engine only writes whole UTF-8 glyphs.
        Ok(unsafe { str::from_utf8_unchecked(s) })
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

/// An error returned when a value cannot be rendered.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The value is negative.
    NegativeValue,
    /// The integer representation has no registered
    /// capabilities.
    UnsupportedType,
    /// The value exceeds the representation's registered
    /// maximum.
    ValueTooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeValue => write!(f, "cannot render a negative value"),
            Self::UnsupportedType => write!(f, "unsupported integer representation"),
            Self::ValueTooLarge => write!(f, "value exceeds the representation's maximum"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
