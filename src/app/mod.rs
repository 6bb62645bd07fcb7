//! Application module structure for ParleyApp
//!
//! - `core`: ParleyApp struct, construction and per-frame state upkeep
//! - `events`: draining backend events
//! - `update`: the eframe update loop and global shortcuts

pub mod core;
pub mod events;
pub mod update;

// Re-export ParleyApp for public API
pub use self::core::ParleyApp;
