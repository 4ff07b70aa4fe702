//! Status bar and help overlay rendering

use super::colors;
use crate::app::App;
use crate::config::Action;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Create a centered rect with percentage width and absolute height
#[must_use]
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// How far down the page the viewport is, as a whole percentage
fn scroll_percent(app: &App) -> i32 {
    let max = app.viewport.max_scroll();
    if max == 0 {
        100
    } else {
        app.viewport.scroll_y * 100 / max
    }
}

/// Text shown at the right of the status bar
#[must_use]
pub fn status_right(app: &App) -> String {
    let percent = scroll_percent(app);
    if app.ui.past_experience {
        let key = app
            .config
            .keys
            .keys_for_action(Action::ScrollTop)
            .into_iter()
            .next()
            .unwrap_or_default();
        format!("[{key}]back to top  {percent:>3}%")
    } else {
        format!("{percent:>3}%")
    }
}

/// Render the one-row status bar
pub fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let surface = Style::default().bg(colors::STATUS_BG.into());
    let dim = surface.fg(colors::STATUS_TEXT.into());

    let right = status_right(app);
    let right_width = u16::try_from(right.chars().count().saturating_add(2))
        .unwrap_or(0)
        .min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    let hints = Span::styled(format!(" {} ", app.config.keys.status_hints()), dim);
    frame.render_widget(Paragraph::new(Line::from(hints)).style(surface), chunks[0]);

    let right_style = if app.ui.past_experience {
        surface
            .fg(app.ui.nav.into())
            .add_modifier(Modifier::BOLD)
    } else {
        dim
    };
    let right = Paragraph::new(Line::from(Span::styled(format!(" {right} "), right_style)))
        .style(surface)
        .alignment(Alignment::Right);
    frame.render_widget(right, chunks[1]);
}

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame<'_>, app: &App) {
    let modal = Style::default().bg(colors::MODAL_BG.into());
    let text = modal.fg(colors::MODAL_TEXT.into());
    let dim = modal.fg(colors::STATUS_TEXT.into());

    let mut help_text = vec![
        Line::from(Span::styled("Keybindings", text.add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];

    let mut current_group = None;
    for &action in Action::ALL_FOR_HELP {
        let group = action.group();
        if current_group != Some(group) {
            if current_group.is_some() {
                help_text.push(Line::from(""));
            }
            help_text.push(Line::from(Span::styled(group.title(), dim)));
            current_group = Some(group);
        }
        help_text.push(Line::from(Span::styled(
            app.config.keys.help_line(action),
            text,
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "Mouse: wheel scrolls, click a section to jump",
        dim,
    )));
    help_text.push(Line::from(Span::styled("Any key closes", dim)));

    let max_height = frame.area().height.saturating_sub(2);
    let desired_height = u16::try_from(help_text.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let height = desired_height.min(max_height);
    let area = centered_rect_absolute(60, height, frame.area());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(help_text).style(modal).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(text)
                .title(" Help ")
                .style(modal),
        ),
        area,
    );
}
