//! Login screen view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;

use super::state::{LoginField, LoginScreen};
use crate::render_utils::{
    FormField, InputHint, PanelConfig, render_form_field, render_message_line, render_panel,
};
use crate::state::TuiState;

const PANEL_WIDTH: u16 = 46;
const PANEL_HEIGHT: u16 = 13;

pub fn render(screen: &LoginScreen, tui: &TuiState, frame: &mut Frame) {
    let area = frame.area();

    // The panel rides up while a field is being edited or the terminal has
    // focus, the way a form dodges an on-screen keyboard. Without focus
    // reporting it just stays raised.
    let raised = !tui.platform.focus_change
        || tui.focus.is_focused()
        || screen.focused_field().is_some();

    let hints = [
        InputHint::new("Enter", "sign in"),
        InputHint::new("Tab", "next field"),
        InputHint::new("^P", "show/hide"),
        InputHint::new("^R", "register"),
    ];
    let layout = render_panel(
        frame,
        area,
        &PanelConfig {
            title: "Sign in to Perch",
            border_color: Color::Cyan,
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
            raised,
            hints: &hints,
        },
    );

    let body = layout.body;
    render_form_field(
        frame,
        Rect::new(body.x, body.y, body.width, 2),
        &FormField {
            label: "Email",
            value: &screen.email,
            placeholder: "you@example.com",
            focused: screen.fields[LoginField::Email].focused,
            touched: screen.fields[LoginField::Email].touched,
            masked: false,
        },
    );

    render_form_field(
        frame,
        Rect::new(body.x, body.y + 3, body.width, 2),
        &FormField {
            label: if screen.password_hidden {
                "Password"
            } else {
                "Password (visible)"
            },
            value: &screen.password,
            placeholder: "password",
            focused: screen.fields[LoginField::Password].focused,
            touched: screen.fields[LoginField::Password].touched,
            masked: screen.password_hidden,
        },
    );

    if screen.submitting {
        let spinner = crate::render::spinner_frame(tui.spinner_frame);
        render_message_line(
            frame,
            body,
            6,
            &format!("{spinner} Signing in..."),
            Color::Yellow,
        );
    } else if let Some(error) = &screen.error {
        render_message_line(frame, body, 6, error, Color::Red);
    } else {
        render_message_line(
            frame,
            body,
            6,
            "No account? ^R to register.",
            Color::DarkGray,
        );
    }
}
