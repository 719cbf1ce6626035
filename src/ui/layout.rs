use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header (user + points)
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Active pane
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        tab_bar: chunks[1],
        content: chunks[2],
        status_bar: chunks[3],
    }
}

/// Vertical split for panes with a submission form above a list.
pub fn form_over_list(area: Rect, form_height: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(form_height), Constraint::Min(3)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Horizontal split for the doubts pane: list of doubts | selected detail.
pub fn list_beside_detail(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(40)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Full-screen views: body | status/hint line.
pub fn screen_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}
