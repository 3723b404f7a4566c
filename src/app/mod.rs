//! Board state, terminal events, and the key handler that ties them together.

pub mod event;
pub mod handler;
pub mod state;
