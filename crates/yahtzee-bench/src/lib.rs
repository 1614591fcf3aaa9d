#![deny(warnings)]
pub mod logging;
pub mod session;
pub mod stats;
