use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Shown when the session is missing or rejected; the TUI stand-in for the
/// login redirect.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Signed out ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let base_url = &state.config.server.base_url;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Your session is missing or has expired.",
            Theme::value(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Sign in at ", Theme::label()),
            Span::styled(format!("{}/auth", base_url), Theme::tab_active()),
            Span::styled(
                " and copy the `session` cookie into the",
                Theme::label(),
            ),
        ]),
        Line::from(Span::styled(
            "  [server] section of your config file.",
            Theme::label(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  r ", Theme::badge_success()),
            Span::styled("retry    ", Theme::value()),
            Span::styled("q ", Theme::badge_error()),
            Span::styled("quit", Theme::value()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
