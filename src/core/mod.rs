//! Core algorithms: flight progress, hour bucketing, and map geometry.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Progress and bucketing never read the clock: `now` is always passed in.

pub mod demo;
pub mod flight;
pub mod geo;
pub mod progress;
pub mod timeline;

#[cfg(test)]
pub(crate) mod tests;
