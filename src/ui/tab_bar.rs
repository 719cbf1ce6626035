use crate::app::state::{nav_target, AppState, NavTarget, Route, Tab};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Tab strip. The highlighted entry is the active pane, or the tab whose
/// dedicated screen is currently open.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    for (i, tab) in Tab::ALL.iter().enumerate() {
        let active = match state.route {
            Route::Screen(screen) => nav_target(*tab) == NavTarget::Screen(screen),
            _ => state.active_tab == *tab,
        };
        let style = if active {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        parts.push(Span::styled(format!(" F{}", i + 1), Theme::muted()));
        parts.push(Span::styled(format!(" {} ", tab.title()), style));
        if i + 1 < Tab::ALL.len() {
            parts.push(Span::styled("│", Theme::border()));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
