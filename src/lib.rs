//! greeter - tiny console greeter
//!
//! Prints a hello banner, a typed greeting constant, and the sum of two fixed
//! integers, as three lines on standard output. The behavior is exposed as a
//! library so the output contract can be exercised from integration tests.

pub mod constants;
pub mod math;
pub mod output;

pub use math::add;
pub use output::write_greeting;
