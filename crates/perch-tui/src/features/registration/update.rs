//! Registration screen reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use perch_core::auth::AuthError;
use perch_core::validate;

use super::state::RegistrationScreen;
use crate::effects::UiEffect;
use crate::features::ScreenUpdate;
use crate::features::login::sign_in_error_message;
use crate::nav::Destination;
use crate::state::TuiState;

pub fn handle_key(
    screen: &mut RegistrationScreen,
    tui: &mut TuiState,
    key: KeyEvent,
) -> ScreenUpdate {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            screen.focus_next();
            ScreenUpdate::stay()
        }
        KeyCode::BackTab | KeyCode::Up => {
            screen.focus_prev();
            ScreenUpdate::stay()
        }
        // First Esc blurs, second goes back to the login screen
        KeyCode::Esc => {
            if screen.focused_field().is_some() {
                screen.blur_all();
                ScreenUpdate::stay()
            } else {
                ScreenUpdate::to(Destination::Login)
            }
        }
        KeyCode::Enter => submit(screen, tui),
        KeyCode::Char('p') if ctrl => {
            screen.toggle_password_visibility();
            ScreenUpdate::stay()
        }
        KeyCode::Char('l') if ctrl => ScreenUpdate::to(Destination::Login),
        KeyCode::Backspace => {
            screen.delete_back();
            ScreenUpdate::stay()
        }
        KeyCode::Char(c) if !ctrl => {
            screen.insert_char(c);
            ScreenUpdate::stay()
        }
        _ => ScreenUpdate::stay(),
    }
}

fn submit(screen: &mut RegistrationScreen, tui: &TuiState) -> ScreenUpdate {
    if screen.submitting {
        return ScreenUpdate::stay();
    }

    let display_name = screen.display_name.trim().to_string();
    let email = screen.email.clone();
    let password = screen.password.clone();

    let checked = if display_name.is_empty() {
        Err("Enter your display name.".to_string())
    } else {
        validate::check_credentials(&email, &password).map_err(|reason| reason.to_string())
    };

    if checked.is_ok() || tui.config.clear_fields_on_submit {
        screen.clear_fields();
    }

    match checked {
        Ok(()) => {
            screen.error = None;
            screen.submitting = true;
            ScreenUpdate::stay().with_effects(vec![UiEffect::SignUp {
                task: None,
                display_name,
                email,
                password,
            }])
        }
        Err(message) => {
            screen.error = Some(message);
            ScreenUpdate::stay()
        }
    }
}

/// Applies a resolved sign-up failure to the screen.
pub fn handle_sign_up_failure(screen: &mut RegistrationScreen, error: &AuthError) {
    tracing::warn!(%error, "sign-up failed");
    screen.submitting = false;
    screen.error = Some(match error {
        AuthError::Service { message, .. } if message.starts_with("EMAIL_EXISTS") => {
            "An account with this email already exists.".to_string()
        }
        AuthError::Service { message, .. } if message.starts_with("WEAK_PASSWORD") => {
            "Password is too weak (6 characters minimum).".to_string()
        }
        other => sign_in_error_message(other),
    });
}
