//! Event processing from backend

use super::ParleyApp;
use crate::events;

impl ParleyApp {
    /// Apply every event the backend has produced since the last frame.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            events::process_single_event(event, &mut self.sync, &mut self.transcript, &mut self.toasts);
        }
    }
}
