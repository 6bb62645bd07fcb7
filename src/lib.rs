//! Parley chat client library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod backend;
pub mod buffer;
pub mod config;
pub mod error;
pub mod events;
pub mod grouping;
pub mod labels;
pub mod logging;
pub mod model;
pub mod notify;
pub mod protocol;
pub mod state;
pub mod sync;
pub mod ui;

#[cfg(test)]
mod backend_tests;

pub use error::{ClientError, Result};
