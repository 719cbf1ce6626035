use crate::app::state::{AlertKind, AppState};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

/// Overlay transient alerts in the top-right corner, newest at the top, and
/// the points notification beneath them. They expire on their own; there is
/// nothing to dismiss.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    if area.height < 3 {
        return;
    }

    let mut row = area.y + 1;
    for alert in state.alerts.iter().rev() {
        if row >= area.bottom().saturating_sub(1) {
            break;
        }
        let style = match alert.kind {
            AlertKind::Success => Theme::alert_success(),
            AlertKind::Error => Theme::alert_error(),
        };
        let text = format!(" {} ", alert.text);
        let width = (text.len() as u16).min(area.width.saturating_sub(2));
        let rect = Rect {
            x: area.right().saturating_sub(width + 1),
            y: row,
            width,
            height: 1,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(text).style(style), rect);
        row += 1;
    }

    if let Some(note) = &state.points_note {
        let text = format!(" ★ +{} Points Earned! ", note.amount);
        let width = (text.len() as u16).min(area.width.saturating_sub(2));
        let rect = Rect {
            x: area.right().saturating_sub(width + 1),
            y: row,
            width,
            height: 1,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(text).style(Theme::points_note()), rect);
    }
}
