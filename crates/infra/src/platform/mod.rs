//! Platform-specific adapters
//!
//! Currently only the browser launcher behind the `Navigator` port.

pub mod browser;

pub use browser::{Opener, SystemNavigator};
