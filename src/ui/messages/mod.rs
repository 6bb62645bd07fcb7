//! Transcript rendering for the chat panel.
//! Features: sender runs, avatars with name tooltips, scroll-to-latest.

mod helpers;
mod render;

// Re-export public API
pub use helpers::{FeedChange, TranscriptView};
pub use render::render_transcript;
