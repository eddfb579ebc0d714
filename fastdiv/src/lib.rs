#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Granlund–Montgomery division by invariant integers.
//!
//! The crate is split in two halves. The deriver runs once, with arbitrary
//! precision, and computes a multiplier, a shift and a validity threshold for a
//! `(divisor, bits, slack)` configuration. The divider consumes those constants on
//! the hot path and replaces `x / d` with a double-width multiplication and a
//! logical shift.
//!
//! ```
//! use fastdiv::{Divisor, DivisionConstants};
//!
//! let by_five = DivisionConstants::<u128>::new(Divisor::Literal(5)).unwrap();
//! let x = 1_000_000_000_000_000_000_007u128;
//! assert!(by_five.fits(x));
//! assert_eq!(by_five.fast_divide(x), x / 5);
//! ```

pub mod arith;
pub mod decimal;
pub mod derive;
pub mod divider;
pub mod error;
pub mod tables;

mod primitive;

pub use derive::{derive, derive_divisor, DerivedConstants, Divisor};
pub use divider::DivisionConstants;
pub use error::DeriveError;
pub use primitive::{Bits, Operand, Widening};
