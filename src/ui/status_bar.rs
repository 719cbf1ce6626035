use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", hint_for(state)),
        Theme::status_bar(),
    ));

    let busy = state.has_animation() && state.alerts.is_empty() && state.points_note.is_none();
    if busy {
        parts.push(Span::styled(
            format!(" {} working... ", crate::ui::spinner_frame(state.tick_count)),
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }

    let right = " F10 logout | Ctrl+C quit ";
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(right, Theme::status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn hint_for(state: &AppState) -> &'static str {
    match state.route {
        Route::SignedOut => "r retry | q quit",
        Route::Screen(Screen::Assistant) => "Enter send | Up/Down history | Esc back",
        Route::Screen(Screen::Quiz) => "Esc back",
        Route::Dashboard => match state.active_tab {
            Tab::Topics => "Tab field | Enter add topic | Up/Down scroll",
            Tab::Doubts => {
                if state.doubts.feedback_form.is_some() {
                    "Up/Down rating | Enter submit | Esc cancel"
                } else if state.doubts.focus == PaneFocus::List {
                    "Up/Down select | u upvote | d downvote | f final rating | Tab form"
                } else {
                    "Up/Down field | Enter submit | Tab list"
                }
            }
            Tab::Flashcards => {
                if state.flashcards.focus == PaneFocus::List {
                    "Left/Right select | Enter flip | Tab topic"
                } else {
                    "Enter generate | Tab cards"
                }
            }
            Tab::Points => "Up/Down scroll",
            Tab::Assistant | Tab::Quiz => "",
        },
    }
}
