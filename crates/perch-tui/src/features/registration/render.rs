//! Registration screen view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;

use super::state::{RegistrationField, RegistrationScreen};
use crate::render_utils::{
    FormField, InputHint, PanelConfig, render_form_field, render_message_line, render_panel,
};
use crate::state::TuiState;

const PANEL_WIDTH: u16 = 46;
const PANEL_HEIGHT: u16 = 16;

pub fn render(screen: &RegistrationScreen, tui: &TuiState, frame: &mut Frame) {
    let area = frame.area();
    let raised = !tui.platform.focus_change
        || tui.focus.is_focused()
        || screen.focused_field().is_some();

    let hints = [
        InputHint::new("Enter", "register"),
        InputHint::new("Tab", "next field"),
        InputHint::new("^P", "show/hide"),
        InputHint::new("^L", "sign in"),
    ];
    let layout = render_panel(
        frame,
        area,
        &PanelConfig {
            title: "Create a Perch account",
            border_color: Color::Green,
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
            raised,
            hints: &hints,
        },
    );

    let body = layout.body;
    let flags = |field: RegistrationField| screen.fields[field];

    render_form_field(
        frame,
        Rect::new(body.x, body.y, body.width, 2),
        &FormField {
            label: "Display name",
            value: &screen.display_name,
            placeholder: "How the feed shows you",
            focused: flags(RegistrationField::DisplayName).focused,
            touched: flags(RegistrationField::DisplayName).touched,
            masked: false,
        },
    );

    render_form_field(
        frame,
        Rect::new(body.x, body.y + 3, body.width, 2),
        &FormField {
            label: "Email",
            value: &screen.email,
            placeholder: "you@example.com",
            focused: flags(RegistrationField::Email).focused,
            touched: flags(RegistrationField::Email).touched,
            masked: false,
        },
    );

    render_form_field(
        frame,
        Rect::new(body.x, body.y + 6, body.width, 2),
        &FormField {
            label: if screen.password_hidden {
                "Password"
            } else {
                "Password (visible)"
            },
            value: &screen.password,
            placeholder: "password",
            focused: flags(RegistrationField::Password).focused,
            touched: flags(RegistrationField::Password).touched,
            masked: screen.password_hidden,
        },
    );

    if screen.submitting {
        let spinner = crate::render::spinner_frame(tui.spinner_frame);
        render_message_line(
            frame,
            body,
            9,
            &format!("{spinner} Creating account..."),
            Color::Yellow,
        );
    } else if let Some(error) = &screen.error {
        render_message_line(frame, body, 9, error, Color::Red);
    } else {
        render_message_line(
            frame,
            body,
            9,
            "Already registered? ^L to sign in.",
            Color::DarkGray,
        );
    }
}
