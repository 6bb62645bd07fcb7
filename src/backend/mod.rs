/// Backend submodules for REST access and the worker loop
///
/// - `api`: the `ChatApi` seam and its reqwest implementation
/// - `main_loop`: Tokio runtime that turns `BackendAction`s into `GuiEvent`s
mod api;
mod main_loop;

pub use api::{ChatApi, HttpChatApi};
pub use main_loop::{run_backend, spawn_backend};
