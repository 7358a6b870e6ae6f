//! declgen CLI library for testing and reusability.

pub mod driver;
pub mod utils;

pub use declgen_utils::Config;
pub use driver::{Driver, Overrides};
