//! Full-screen TUI for perch.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod focus;
pub mod nav;
pub mod render;
pub mod render_utils;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use perch_core::auth::Session;
use perch_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive client.
///
/// Mounts the login screen, or jumps straight to the feed when a live
/// session is on disk. Must run inside the tokio runtime: effect handlers
/// are spawned as tasks.
pub async fn run(config: &Config) -> Result<()> {
    // The client requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "perch requires a terminal.\n\
             Use `perch login --email '...'` for non-interactive sign-in."
        );
    }

    let session = load_live_session();

    let mut runtime = TuiRuntime::new(config.clone(), session)?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}

/// Loads the persisted session, dropping expired or unreadable ones.
fn load_live_session() -> Option<Session> {
    match Session::load() {
        Ok(Some(session)) if !session.is_expired() => Some(session),
        Ok(Some(_)) => {
            tracing::info!("stored session expired, starting at the login screen");
            None
        }
        Ok(None) => None,
        Err(error) => {
            tracing::warn!(%error, "failed to load stored session");
            None
        }
    }
}
