//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.

use ratatui::Frame;

use crate::features::{login, posts, registration};
use crate::state::{AppState, Screen};

/// Spinner frames for async indicators.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Picks the spinner glyph for an animation frame counter.
pub fn spinner_frame(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    match &app.screen {
        Screen::Login(screen) => login::render(screen, &app.tui, frame),
        Screen::Registration(screen) => registration::render(screen, &app.tui, frame),
        Screen::Posts(screen) => posts::render(screen, &app.tui, frame),
    }
}
