//! Post feed view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::PostsScreen;
use crate::common::truncate_with_ellipsis;
use crate::render_utils::{InputHint, render_hints};
use crate::state::TuiState;

pub fn render(screen: &PostsScreen, tui: &TuiState, frame: &mut Frame) {
    let area = frame.area();

    let who = tui
        .session
        .as_ref()
        .map(|session| session.email.as_str())
        .unwrap_or("not signed in");
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(format!(" Posts — {who} "));
    frame.render_widget(block, area);

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );
    let list_height = inner.height.saturating_sub(2) as usize;

    if screen.loading {
        let spinner = crate::render::spinner_frame(tui.spinner_frame);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{spinner} Loading posts..."),
                Style::default().fg(Color::Yellow),
            ))),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );
    } else if let Some(error) = &screen.error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                truncate_with_ellipsis(&format!("Couldn't load posts: {error}"), inner.width as usize),
                Style::default().fg(Color::Red),
            ))),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );
    } else if screen.posts.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No posts yet.",
                Style::default().fg(Color::DarkGray),
            ))),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );
    } else {
        // Keep the selection visible by sliding the window over the feed
        let first = screen
            .selected
            .saturating_sub(list_height.saturating_sub(1));
        for (row, (index, post)) in screen
            .posts
            .iter()
            .enumerate()
            .skip(first)
            .take(list_height)
            .enumerate()
        {
            let selected = index == screen.selected;
            let marker = if selected { "▸ " } else { "  " };
            let when = post
                .created_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_default();

            let mut spans = vec![
                Span::styled(
                    marker,
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(
                    truncate_with_ellipsis(&post.title, inner.width.saturating_sub(30) as usize),
                    if selected {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    },
                ),
            ];
            if !post.author.is_empty() {
                spans.push(Span::styled(
                    format!("  by {}", post.author),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(
                format!("  ♥ {}", post.likes),
                Style::default().fg(Color::Magenta),
            ));
            if !when.is_empty() {
                spans.push(Span::styled(
                    format!("  {when}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            frame.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect::new(inner.x, inner.y + row as u16, inner.width, 1),
            );
        }
    }

    let hints = [
        InputHint::new("↑/↓", "select"),
        InputHint::new("r", "reload"),
        InputHint::new("^O", "sign out"),
        InputHint::new("q", "quit"),
    ];
    render_hints(frame, inner, &hints, Color::Blue);
}
