//! Outbound service clients.

pub mod hello;

pub use hello::{HelloClient, HelloError};
