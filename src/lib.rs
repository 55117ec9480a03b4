//! A fixed-capacity, growable-length packed bit vector written in pure Rust.
//! `no_std` + `alloc`, no `unsafe`.
//!
//! [`BitVector`] is the main struct in this library. Its capacity is chosen
//! once, at creation; its length grows and shrinks within that capacity. Its
//! [features](#features) are listed below.
//!
//! # Examples
//! ```
//! use bounded_bitvec::{Bit, BitVector};
//!
//! let mut bv = BitVector::new(8).unwrap();
//! for bit in [true, false, true, true, false, false, true, false] {
//!     bv.append(bit).unwrap();
//! }
//! assert_eq!(bv.len(), 8);
//! assert_eq!(bv.get(3), Ok(Bit::One));
//!
//! bv.remove(2).unwrap();
//! assert_eq!(bv.len(), 7);
//!
//! bv.clear();
//! bv.destroy().unwrap();
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible (disable the default `std` feature)
//! - Single heap allocation of `ceil(capacity / 8)` bytes, never resized
//! - Fallible API: every operation reports [`Error`] instead of panicking
//! - Indexed `get` / `set`, `append`, `pop`, `remove` with shift-down, `clear`
//! - `destroy` refuses to discard a vector that still holds bits
//! - Iteration over the valid bits: `iter()`
//! - `count_ones`, `Debug` and a diagnostic `display` / `dump`
//!
//! # Logging
//!
//! Rejected operations are reported as `tracing` events at `debug` level.
//! Dropping a vector that still holds bits emits a `warn` event.
//!
//! # Thread Safety
//!
//! A [`BitVector`] is a plain owned value with no interior locking. Share it
//! across threads the usual way, e.g. behind a `Mutex`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod bit;
mod bitvec;
mod error;

pub use bit::Bit;
pub use bitvec::{BitVector, Dump, Iter, byte_count};
pub use error::{DestroyError, Error};
