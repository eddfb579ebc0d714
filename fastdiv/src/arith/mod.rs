//! Define arithmetic operations and traits used by the deriver.

mod xgcd;

pub use xgcd::{mod_inverse, Xgcd};
