//! Controller modules.
//!
//! Each controller keeps its validation helper as a module-private type:
//! nothing outside the defining module can name or construct a probe. The
//! public surface is the two controllers and the peripherals error.

pub mod logger;
pub mod peripherals;

pub use logger::Logger;
pub use peripherals::{Peripherals, PeripheralsError};
