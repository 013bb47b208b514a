// float_cmp: only in tests where assert_eq! on f64 is intentional.
#![cfg_attr(test, allow(clippy::float_cmp))]
// Strike encoding truncates (floor) by design; the cast is the point.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod error;
pub mod orders;
pub mod symbols;

pub use error::OrderError;
pub use symbols::{ContractType, Expiration, OptionSymbol};
