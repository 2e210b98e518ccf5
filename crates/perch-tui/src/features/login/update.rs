//! Login screen reducer.
//!
//! Key handling, the submit predicate, and sign-in failure display.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use perch_core::auth::AuthError;
use perch_core::validate;

use super::state::LoginScreen;
use crate::effects::UiEffect;
use crate::features::ScreenUpdate;
use crate::nav::Destination;
use crate::state::TuiState;

pub fn handle_key(screen: &mut LoginScreen, tui: &mut TuiState, key: KeyEvent) -> ScreenUpdate {
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
        // Esc dismisses input focus (the keyboard, in mobile terms)
        KeyCode::Esc => {
            screen.blur_all();
            ScreenUpdate::stay()
        }
        KeyCode::Enter => submit(screen, tui),
        KeyCode::Char('p') if ctrl => {
            screen.toggle_password_visibility();
            ScreenUpdate::stay()
        }
        KeyCode::Char('r') if ctrl => ScreenUpdate::to(Destination::Registration),
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

/// The submit handler.
///
/// Validates the credential pair, clears the fields (always on a valid
/// submit, per config on a failed one), and emits a single sign-in effect
/// when the predicate holds. Navigation waits for the resolved result.
fn submit(screen: &mut LoginScreen, tui: &TuiState) -> ScreenUpdate {
    if screen.submitting {
        return ScreenUpdate::stay();
    }

    let email = screen.email.clone();
    let password = screen.password.clone();
    let checked = validate::check_credentials(&email, &password);

    if checked.is_ok() || tui.config.clear_fields_on_submit {
        screen.clear_fields();
    }

    match checked {
        Ok(()) => {
            screen.error = None;
            screen.submitting = true;
            ScreenUpdate::stay().with_effects(vec![UiEffect::SignIn {
                task: None,
                email,
                password,
            }])
        }
        Err(reason) => {
            screen.error = Some(reason.to_string());
            ScreenUpdate::stay()
        }
    }
}

/// Applies a resolved sign-in failure to the screen.
pub fn handle_sign_in_failure(screen: &mut LoginScreen, error: &AuthError) {
    tracing::warn!(%error, "sign-in failed");
    screen.submitting = false;
    screen.error = Some(sign_in_error_message(error));
}

/// User-facing message for each failure kind. The kinds stay distinct so
/// a wrong password never reads like an outage.
pub fn sign_in_error_message(error: &AuthError) -> String {
    match error {
        AuthError::InvalidCredentials => "Invalid email or password.".to_string(),
        AuthError::Transport(_) => {
            "Network error. Check your connection and try again.".to_string()
        }
        AuthError::Service { status, .. } => {
            format!("Service error (HTTP {status}). Try again later.")
        }
    }
}

#[cfg(test)]
mod tests {
    use perch_core::config::Config;

    use super::*;
    use crate::state::Platform;

    fn tui_state() -> TuiState {
        let app = crate::state::AppState::new(Config::default(), None, Platform::default());
        app.tui
    }

    fn press(screen: &mut LoginScreen, tui: &mut TuiState, code: KeyCode) -> ScreenUpdate {
        handle_key(screen, tui, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(screen: &mut LoginScreen, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            press(screen, tui, KeyCode::Char(c));
        }
    }

    #[test]
    fn valid_submit_emits_one_sign_in_with_pre_clear_values() {
        let mut tui = tui_state();
        let mut screen = LoginScreen::new();
        type_text(&mut screen, &mut tui, "a@b.c");
        press(&mut screen, &mut tui, KeyCode::Tab);
        type_text(&mut screen, &mut tui, "secret");

        let update = press(&mut screen, &mut tui, KeyCode::Enter);

        match update.effects.as_slice() {
            [UiEffect::SignIn { email, password, .. }] => {
                assert_eq!(email, "a@b.c");
                assert_eq!(password, "secret");
            }
            other => panic!("expected one SignIn effect, got {other:?}"),
        }
        // No optimistic navigation; the result event decides
        assert!(update.nav.is_none());
        assert!(screen.submitting);
        assert!(screen.error.is_none());
        // Fields are cleared even though the submit was valid
        assert!(screen.email.is_empty());
        assert!(screen.password.is_empty());
    }

    #[test]
    fn empty_password_submits_nothing_and_clears() {
        let mut tui = tui_state();
        let mut screen = LoginScreen::new();
        type_text(&mut screen, &mut tui, "a@b.c");

        let update = press(&mut screen, &mut tui, KeyCode::Enter);

        assert!(update.effects.is_empty());
        assert!(update.nav.is_none());
        assert!(!screen.submitting);
        assert!(screen.email.is_empty());
        assert!(screen.password.is_empty());
        assert_eq!(screen.error.as_deref(), Some("Enter your password."));
    }

    #[test]
    fn malformed_email_submits_nothing() {
        let mut tui = tui_state();
        let mut screen = LoginScreen::new();
        type_text(&mut screen, &mut tui, "not-an-email");
        press(&mut screen, &mut tui, KeyCode::Tab);
        type_text(&mut screen, &mut tui, "secret");

        let update = press(&mut screen, &mut tui, KeyCode::Enter);

        assert!(update.effects.is_empty());
        assert_eq!(screen.error.as_deref(), Some("Enter a valid email address."));
        assert!(screen.email.is_empty() && screen.password.is_empty());
    }

    #[test]
    fn failed_validation_keeps_fields_when_configured() {
        let mut tui = tui_state();
        tui.config.clear_fields_on_submit = false;
        let mut screen = LoginScreen::new();
        type_text(&mut screen, &mut tui, "not-an-email");

        press(&mut screen, &mut tui, KeyCode::Enter);

        assert_eq!(screen.email, "not-an-email");
        assert!(screen.error.is_some());
    }

    #[test]
    fn submit_is_ignored_while_a_sign_in_is_in_flight() {
        let mut tui = tui_state();
        let mut screen = LoginScreen::new();
        screen.submitting = true;
        type_text(&mut screen, &mut tui, "a@b.c");

        let update = press(&mut screen, &mut tui, KeyCode::Enter);
        assert!(update.effects.is_empty());
        // Fields untouched by the ignored submit
        assert_eq!(screen.email, "a@b.c");
    }

    #[test]
    fn ctrl_r_navigates_to_registration() {
        let mut tui = tui_state();
        let mut screen = LoginScreen::new();
        let update = handle_key(
            &mut screen,
            &mut tui,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        );
        assert_eq!(update.nav, Some(Destination::Registration));
    }

    #[test]
    fn failure_kinds_render_distinct_messages() {
        let invalid = sign_in_error_message(&AuthError::InvalidCredentials);
        let transport = sign_in_error_message(&AuthError::Transport("dns".to_string()));
        let service = sign_in_error_message(&AuthError::Service {
            status: 503,
            message: "down".to_string(),
        });
        assert_ne!(invalid, transport);
        assert_ne!(transport, service);
        assert_ne!(invalid, service);
        assert!(service.contains("503"));
    }

    #[test]
    fn sign_in_failure_unlocks_the_form() {
        let mut screen = LoginScreen::new();
        screen.submitting = true;

        handle_sign_in_failure(&mut screen, &AuthError::InvalidCredentials);

        assert!(!screen.submitting);
        assert_eq!(screen.error.as_deref(), Some("Invalid email or password."));
    }
}
