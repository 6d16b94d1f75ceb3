//! `kanjinum` is a pure Rust, no-std implementation of Japanese
//! kanji numeral formatting for integers.
//!
//! A magnitude is written into a caller-supplied buffer as the
//! kanji digits 〇–九, the sub-group multipliers 十/百/千, and the
//! myriad-scale words 万/億/兆/京/… without allocating:
//!
//! ```
//! let mut buf = kanjinum::Buffer::new();
//! assert_eq!(buf.format(123_u32).unwrap(), "百二十三");
//! assert_eq!(buf.format(10_001_u64).unwrap(), "一万一");
//! ```
//!
//! # Cargo Features
//!
//! - `alloc`: Include [`alloc`] support. Enables
//! [`to_kanji_string`].
//!
//! - `std`: Include [`std`] support. Implies the `alloc` feature.
//!
//! - `bigint`: Support arbitrary-precision input via
//! [`num-bigint`]. Implies the `std` feature.
//!
//! [`alloc`]: https://doc.rust-lang.org/alloc/
//! [`num-bigint`]: https://crates.io/crates/num-bigint
//! [`std`]: https://doc.rust-lang.org/std/

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_sign_loss)]
#![deny(clippy::expect_used)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::string_slice)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod caps;
mod conv;
mod digits;
mod glyphs;
mod magnitude;
mod render;
#[cfg(test)]
mod testutil;

pub use caps::{caps, max_str_len, Caps, Repr};
#[cfg(feature = "alloc")]
pub use conv::to_kanji_string;
pub use conv::{to_kanji, Buffer, Error, Integer};
