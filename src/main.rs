//! Parley Client - a desktop chat client built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI and owns the session state
//! - Backend thread: runs a Tokio runtime for REST calls
//! - Communication via crossbeam channels

use std::process::ExitCode;
use std::sync::Arc;

use eframe::egui;

use parley_client::app::ParleyApp;
use parley_client::backend::HttpChatApi;
use parley_client::{config, logging};

fn main() -> ExitCode {
    logging::init();

    let settings = config::load_settings();

    let user = match config::load_session() {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("No usable session found. Sign in with the web client first.");
            return ExitCode::from(2);
        }
    };

    let api = match HttpChatApi::new(settings.api_base_url.clone()) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            tracing::error!("failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 680.0])
            .with_min_inner_size([520.0, 360.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Parley",
        options,
        Box::new(move |cc| Ok(Box::new(ParleyApp::new(cc, settings, user, api)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("UI terminated: {}", e);
            ExitCode::FAILURE
        }
    }
}
