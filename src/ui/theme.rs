use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn value() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn tab_active() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn badge_success() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn badge_warning() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn badge_error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn alert_success() -> Style {
        Style::default().fg(Color::Black).bg(Color::Green)
    }

    pub fn alert_error() -> Style {
        Style::default().fg(Color::White).bg(Color::Red)
    }

    pub fn points_note() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn chat_student() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn chat_assistant() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn selected_row() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn correct() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn incorrect() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn answer_text() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn waiting() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn header_points() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }
}
