use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Top line: app name plus the profile mirror (name, points, counters).
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![Span::styled(" StudyHall ", Theme::title())];

    if let Some(user) = &state.user {
        parts.push(Span::styled(format!(" {} ", user.name), Theme::value()));
        parts.push(Span::styled(
            format!(" ★ {} pts ", user.points),
            Theme::header_points(),
        ));
        parts.push(Span::styled(
            format!(" doubts: {} ", user.doubts_asked),
            Theme::muted(),
        ));
        parts.push(Span::styled(
            format!(" quizzes: {} ", user.qna_sessions),
            Theme::muted(),
        ));
    } else {
        parts.push(Span::styled(" loading profile... ", Theme::muted()));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
