//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{ScreenUpdate, login, posts, registration};
use crate::focus::FocusSignal;
use crate::nav::{self, Destination, HomeTab};
use crate::state::{AppState, Screen, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute. Spawnable effects leave here with a task id
/// assigned from the sequence.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let mut effects = match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::SignInResult { result } => match result {
            Ok(session) => {
                tracing::info!(email = %session.email, "signed in");
                app.tui.session = Some(session.clone());
                let mut effects = vec![UiEffect::SaveSession { session }];
                effects.extend(nav::navigate(app, Destination::Home { tab: HomeTab::Posts }));
                effects
            }
            Err(error) => {
                if let Screen::Login(screen) = &mut app.screen {
                    login::handle_sign_in_failure(screen, &error);
                }
                vec![]
            }
        },
        UiEvent::SignUpResult { result } => match result {
            Ok(session) => {
                tracing::info!(email = %session.email, "account created");
                app.tui.session = Some(session.clone());
                let mut effects = vec![UiEffect::SaveSession { session }];
                effects.extend(nav::navigate(app, Destination::Home { tab: HomeTab::Posts }));
                effects
            }
            Err(error) => {
                if let Screen::Registration(screen) = &mut app.screen {
                    registration::handle_sign_up_failure(screen, &error);
                }
                vec![]
            }
        },
        UiEvent::PostsLoaded { result } => {
            // Ignore late arrivals once the feed screen is gone
            if let Screen::Posts(screen) = &mut app.screen {
                screen.on_loaded(result);
            }
            vec![]
        }
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app.tui.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                vec![]
            }
        }
    };

    assign_task_ids(&mut app.tui, &mut effects);
    effects
}

/// Fills in task ids on spawnable effects that left a feature handler
/// with `task: None`.
fn assign_task_ids(tui: &mut TuiState, effects: &mut [UiEffect]) {
    for effect in effects {
        match effect {
            UiEffect::SignIn { task, .. }
            | UiEffect::SignUp { task, .. }
            | UiEffect::LoadPosts { task } => {
                if task.is_none() {
                    *task = Some(tui.task_seq.next_id());
                }
            }
            _ => {}
        }
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::FocusGained => {
            app.tui.focus.on_signal(FocusSignal::Gained);
            vec![]
        }
        Event::FocusLost => {
            app.tui.focus.on_signal(FocusSignal::Lost);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    let screen_update = match &mut app.screen {
        Screen::Login(screen) => login::handle_key(screen, &mut app.tui, key),
        Screen::Registration(screen) => registration::handle_key(screen, &mut app.tui, key),
        Screen::Posts(screen) => posts::handle_key(screen, &mut app.tui, key),
    };

    apply_screen_update(app, screen_update)
}

fn apply_screen_update(app: &mut AppState, update: ScreenUpdate) -> Vec<UiEffect> {
    let mut effects = update.effects;
    if let Some(destination) = update.nav {
        effects.extend(nav::navigate(app, destination));
    }
    effects
}
