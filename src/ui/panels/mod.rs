//! Side and central panels (chat list, chat panel, loading placeholder).

pub mod chat_list;
pub mod chat_panel;
pub mod loading;

pub use chat_list::{render_chat_list, ChatListResponse};
pub use chat_panel::render_chat_panel;
pub use loading::render_loading_placeholder;
