mod alert;
mod assistant;
mod doubts;
mod flashcards;
mod header;
mod input_box;
mod layout;
mod points;
mod quiz;
mod signed_out;
mod status_bar;
mod tab_bar;
mod theme;
mod topics;

use crate::app::state::{AppState, Route, Screen, Tab};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    match state.route {
        Route::SignedOut => signed_out::render(frame, area, state),
        Route::Screen(Screen::Assistant) => assistant::render(frame, area, state),
        Route::Screen(Screen::Quiz) => quiz::render(frame, area, state),
        Route::Dashboard => {
            let app_layout = layout::compute_layout(area);
            header::render(frame, app_layout.header, state);
            tab_bar::render(frame, app_layout.tab_bar, state);
            match state.active_tab {
                Tab::Topics => topics::render(frame, app_layout.content, state),
                Tab::Doubts => doubts::render(frame, app_layout.content, state),
                Tab::Flashcards => flashcards::render(frame, app_layout.content, state),
                Tab::Points => points::render(frame, app_layout.content, state),
                // Screen tabs never stay active on the dashboard.
                Tab::Assistant | Tab::Quiz => {}
            }
            status_bar::render(frame, app_layout.status_bar, state);
        }
    }

    // Transient messages overlay whatever view is up.
    alert::render(frame, state);
}

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub fn spinner_frame(tick: u64) -> &'static str {
    // Ticks arrive at 20 Hz; slow the spinner to 5 Hz.
    SPINNER_FRAMES[(tick / 4) as usize % SPINNER_FRAMES.len()]
}

/// Render a server ISO-8601 timestamp for display. Server dates come without
/// a timezone suffix; fall back through the RFC 3339 form before giving up.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return "Unknown date".to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    "Invalid date".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-05-01T10:30:00"), "2024-05-01 10:30");
        assert_eq!(format_date("2024-05-01T10:30:00.123456"), "2024-05-01 10:30");
        assert_eq!(format_date("2024-05-01T10:30:00+00:00"), "2024-05-01 10:30");
        assert_eq!(format_date(""), "Unknown date");
        assert_eq!(format_date("yesterday"), "Invalid date");
    }
}
