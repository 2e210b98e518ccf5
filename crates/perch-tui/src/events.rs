//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal
//! input, the tick, and async results posted back through the runtime
//! inbox.

use perch_core::auth::{AuthError, Session};
use perch_core::posts::Post;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Events consumed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Animation/timer tick.
    Tick,

    /// Raw terminal event (keys, focus, resize, paste).
    Terminal(crossterm::event::Event),

    /// Resolved sign-in outcome.
    SignInResult {
        result: Result<Session, AuthError>,
    },

    /// Resolved sign-up outcome.
    SignUpResult {
        result: Result<Session, AuthError>,
    },

    /// Post feed load finished.
    PostsLoaded {
        result: Result<Vec<Post>, String>,
    },

    /// An async task was spawned.
    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },

    /// An async task finished; `result` is the event it produced.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}
