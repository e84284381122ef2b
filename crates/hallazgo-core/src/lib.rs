//! Core types for the hallazgo campus reporting client.
//!
//! This crate is deliberately free of HTTP and terminal dependencies.
//! The client crate depends on it; it depends on nothing heavier than
//! serde and chrono.

pub mod error;
pub mod lifecycle;
pub mod report;
pub mod session;
pub mod stats;
pub mod user;

pub use error::{Error, Result};
