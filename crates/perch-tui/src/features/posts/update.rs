//! Post feed reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::PostsScreen;
use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::features::ScreenUpdate;
use crate::nav::Destination;
use crate::state::TuiState;

pub fn handle_key(screen: &mut PostsScreen, tui: &mut TuiState, key: KeyEvent) -> ScreenUpdate {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Down | KeyCode::Char('j') if !ctrl => {
            screen.select_next();
            ScreenUpdate::stay()
        }
        KeyCode::Up | KeyCode::Char('k') if !ctrl => {
            screen.select_prev();
            ScreenUpdate::stay()
        }
        KeyCode::Char('r') if !ctrl => reload(screen, tui),
        // Sign out: drop the in-memory session, wipe the stored one,
        // cancel a feed load still in flight, and return to the login form.
        KeyCode::Char('o') if ctrl => {
            tui.session = None;
            let mut effects = vec![UiEffect::ClearSession];
            if tui.tasks.posts_load.is_running() {
                effects.push(UiEffect::CancelTask {
                    kind: TaskKind::PostsLoad,
                    token: tui.tasks.posts_load.cancel.clone(),
                });
            }
            ScreenUpdate::to(Destination::Login).with_effects(effects)
        }
        KeyCode::Char('q') | KeyCode::Esc => ScreenUpdate::stay().with_effects(vec![UiEffect::Quit]),
        _ => ScreenUpdate::stay(),
    }
}

fn reload(screen: &mut PostsScreen, tui: &TuiState) -> ScreenUpdate {
    if tui.tasks.posts_load.is_running() {
        return ScreenUpdate::stay();
    }
    screen.loading = true;
    screen.error = None;
    ScreenUpdate::stay().with_effects(vec![UiEffect::LoadPosts { task: None }])
}
