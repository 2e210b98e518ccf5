//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly. Effects that spawn a task
//! carry `task: None` out of the feature handlers; the reducer assigns an
//! id from the task sequence before the runtime sees them.

use perch_core::auth::Session;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn an async sign-in with the submitted credentials.
    SignIn {
        task: Option<TaskId>,
        email: String,
        password: String,
    },

    /// Spawn an async sign-up.
    SignUp {
        task: Option<TaskId>,
        display_name: String,
        email: String,
        password: String,
    },

    /// Spawn an async post feed load for the current session.
    LoadPosts { task: Option<TaskId> },

    /// Persist the established session to disk.
    SaveSession { session: Session },

    /// Remove the persisted session from disk.
    ClearSession,

    /// Cancel an in-progress task by cancelling its token.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}
