//! UI rendering modules for the Parley client.
//!
//! This module contains all egui-based UI rendering code, organized by component:
//! - `panels`: chat list, chat panel shell, loading placeholder
//! - `messages`: transcript rendering
//! - `toasts`: notification overlay
//! - `theme`: color schemes and styling utilities

pub mod messages;
pub mod panels;
pub mod theme;
pub mod toasts;

pub use messages::{render_transcript, FeedChange, TranscriptView};
pub use panels::{render_chat_list, render_chat_panel, render_loading_placeholder, ChatListResponse};
pub use theme::{apply_app_style, ParleyTheme};
pub use toasts::render_toasts;
