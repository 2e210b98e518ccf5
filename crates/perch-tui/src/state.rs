//! Application state composition.
//!
//! The top-level state hierarchy for the TUI:
//! - `AppState` - combined state (`TuiState` + active screen)
//! - `TuiState` - screen-independent state (config, session, tasks, focus)
//! - `Screen` - the currently mounted screen and its local state
//!
//! State is split between `TuiState` and `Screen` so screen handlers can
//! take `&mut` to their own state and to the shared state simultaneously
//! without borrow conflicts.

use perch_core::auth::Session;
use perch_core::config::Config;

use crate::common::{TaskSeq, Tasks};
use crate::features::login::LoginScreen;
use crate::features::posts::PostsScreen;
use crate::features::registration::RegistrationScreen;
use crate::focus::FocusTracker;

/// Terminal capabilities probed at startup and injected here, never read
/// from ambient globals.
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    /// Whether focus-change reporting could be enabled. When it couldn't,
    /// the form panels keep their raised position instead of waiting for
    /// focus signals that will never arrive.
    pub focus_change: bool,
}

impl Default for Platform {
    fn default() -> Self {
        Self { focus_change: true }
    }
}

/// The currently mounted screen.
#[derive(Debug)]
pub enum Screen {
    Login(LoginScreen),
    Registration(RegistrationScreen),
    Posts(PostsScreen),
}

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub screen: Screen,
}

impl AppState {
    /// Creates the app state mounted on the login screen.
    ///
    /// Callers that already hold a live session should follow up with
    /// `nav::navigate(.., Destination::Home { .. })`.
    pub fn new(config: Config, session: Option<Session>, platform: Platform) -> Self {
        let mut tui = TuiState::new(config, session, platform);
        // The login form is mounted first and listens for focus signals
        tui.focus.subscribe();
        Self {
            tui,
            screen: Screen::Login(LoginScreen::new()),
        }
    }
}

/// Screen-independent TUI state.
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Loaded configuration.
    pub config: Config,
    /// Established session, if any.
    pub session: Option<Session>,
    /// Subscription-gated terminal focus state.
    pub focus: FocusTracker,
    /// Terminal capabilities (injected at startup).
    pub platform: Platform,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl TuiState {
    fn new(config: Config, session: Option<Session>, platform: Platform) -> Self {
        Self {
            should_quit: false,
            config,
            session,
            focus: FocusTracker::default(),
            platform,
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
        }
    }
}
