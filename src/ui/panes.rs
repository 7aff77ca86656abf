//! Stateless render functions for the panel

use crate::runtime::keys::{Key, KeyBindings};
use crate::runtime::DisplayState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

/// Rows the display pane needs, borders included
pub const DISPLAY_PANE_HEIGHT: u16 = 5;

/// Render the seven-segment display
pub fn render_display_pane(frame: &mut Frame, area: Rect, display: &DisplayState) {
    let block = Block::default()
        .title(" Display ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 0, 0, 0));

    let lines: Vec<Line> = display
        .render()
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(DEFAULT_THEME.segment))))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the keypad legend: each key with the characters bound to it
pub fn render_keypad_pane(frame: &mut Frame, area: Rect, bindings: &KeyBindings, latched: Key) {
    let block = Block::default()
        .title(" Keypad ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.comment))
        .padding(Padding::new(1, 0, 0, 0));

    let items: Vec<ListItem> = Key::all()
        .filter(|key| !matches!(key, Key::Digit(1..=9)))
        .map(|key| {
            let label = match key {
                Key::Digit(_) => "0-9".to_string(),
                Key::Equal => "= / Enter".to_string(),
                _ => {
                    let chars: String = bindings.chars_for(key).into_iter().collect();
                    if chars.is_empty() {
                        "-".to_string()
                    } else {
                        chars
                    }
                }
            };
            let is_latched = match (key, latched) {
                (Key::Digit(_), Key::Digit(_)) => true,
                _ => key == latched,
            };
            let style = if is_latched {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            let name = match key {
                Key::Digit(_) => "digit".to_string(),
                _ => key.to_string(),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", label), Style::default().fg(DEFAULT_THEME.primary)),
                Span::styled(name, style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, latched: Key, is_error: bool) {
    let spans = vec![
        Span::styled(
            format!(" KEY {:>2} ", latched.code()),
            Style::default()
                .bg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
        Span::styled(
            " Esc quit ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
    ];

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}
