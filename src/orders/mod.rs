pub mod builder;
pub mod common;
pub mod composites;
pub mod options;

pub use builder::{Instrument, Order, OrderBuilder, OrderLeg};
