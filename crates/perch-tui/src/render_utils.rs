//! Shared rendering utilities for the screens.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::truncate_with_ellipsis;

/// Panel configuration for a form screen.
pub struct PanelConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    /// Raised panels sit in the upper half; otherwise they hug the bottom.
    pub raised: bool,
    pub hints: &'a [InputHint<'a>],
}

/// Layout rectangles for a rendered panel.
pub struct PanelLayout {
    pub panel: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Computes the panel area: centered horizontally, anchored vertically.
///
/// `raised` shifts the panel up (the position used while input focus is
/// live, when an on-screen keyboard would cover the bottom); otherwise it
/// hugs the bottom edge.
pub fn panel_area(area: Rect, width: u16, height: u16, raised: bool) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let x = (area.width.saturating_sub(width)) / 2;
    let y = if raised {
        (area.height.saturating_sub(height)) / 3
    } else {
        area.height.saturating_sub(height)
    };
    Rect::new(x, y, width, height)
}

/// Renders the panel container and returns its layout.
pub fn render_panel(frame: &mut Frame, area: Rect, config: &PanelConfig<'_>) -> PanelLayout {
    let panel = panel_area(area, config.width, config.height, config.raised);

    frame.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.border_color))
        .title(format!(" {} ", config.title))
        .title_style(
            Style::default()
                .fg(config.border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, panel);

    let inner = Rect::new(
        panel.x + 2,
        panel.y + 1,
        panel.width.saturating_sub(4),
        panel.height.saturating_sub(2),
    );

    if !config.hints.is_empty() {
        render_hints(frame, inner, config.hints, config.border_color);
    }

    let footer_height = u16::from(!config.hints.is_empty());
    let body_height = inner.height.saturating_sub(footer_height);
    let footer = Rect::new(inner.x, inner.y + body_height, inner.width, footer_height);
    let body = Rect::new(inner.x, inner.y, inner.width, body_height);

    PanelLayout { panel, body, footer }
}

/// A labeled single-line form field.
pub struct FormField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub touched: bool,
    /// Render the value as mask glyphs instead of text.
    pub masked: bool,
}

/// Renders a form field as two rows: label, then the input line.
///
/// Focus turns the label and cursor on; touched fields keep a warmer text
/// color (a cosmetic trace that the field was edited).
pub fn render_form_field(frame: &mut Frame, area: Rect, field: &FormField<'_>) {
    let label_color = if field.focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let label = Paragraph::new(Line::from(Span::styled(
        field.label.to_string(),
        Style::default().fg(label_color),
    )));
    frame.render_widget(label, Rect::new(area.x, area.y, area.width, 1));

    if area.height < 2 {
        return;
    }

    let masked_value;
    let shown_value = if field.masked {
        masked_value = "•".repeat(field.value.chars().count());
        masked_value.as_str()
    } else {
        field.value
    };

    let is_placeholder = shown_value.is_empty();
    let max_text_width = area.width.saturating_sub(3) as usize;
    let display_text = if is_placeholder {
        truncate_with_ellipsis(field.placeholder, max_text_width)
    } else {
        truncate_with_ellipsis(shown_value, max_text_width)
    };

    let text_color = if is_placeholder {
        Color::DarkGray
    } else if field.touched {
        Color::Yellow
    } else {
        Color::White
    };

    let mut spans = vec![
        Span::styled("> ", Style::default().fg(Color::DarkGray)),
        Span::styled(display_text, Style::default().fg(text_color)),
    ];
    if field.focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );
}

/// Helper struct for keyboard hints.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Renders a line of keyboard hints at the bottom of the panel.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    let hints_y = area.y + area.height.saturating_sub(1);
    let hints_area = Rect::new(area.x, hints_y, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let line = Line::from(spans);
    let para = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}

/// Renders a status/error line inside `area` at `y_offset`.
pub fn render_message_line(frame: &mut Frame, area: Rect, y_offset: u16, text: &str, color: Color) {
    if y_offset >= area.height {
        return;
    }
    let line_area = Rect::new(area.x, area.y + y_offset, area.width, 1);
    let text = truncate_with_ellipsis(text, area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color)))),
        line_area,
    );
}
