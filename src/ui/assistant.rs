use crate::app::state::{AppState, ChatSender};
use crate::ui::theme::Theme;
use crate::ui::{input_box, layout, spinner_frame};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Dedicated assistant chat view.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (body, status) = layout::screen_layout(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(body);

    render_messages(frame, chunks[0], state);
    input_box::render(frame, chunks[1], "Message", &state.assistant.input, true);

    let hint = " Enter send | Up/Down history | PgUp/PgDn scroll | Esc back ";
    frame.render_widget(
        Paragraph::new(hint).style(Theme::status_bar()),
        status,
    );
}

fn render_messages(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Assistant ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if state.assistant.messages.is_empty() {
        lines.push(Line::from(Span::styled(
            "Ask the assistant anything about what you're studying.",
            Theme::muted(),
        )));
    }
    for msg in &state.assistant.messages {
        let (who, style) = match msg.sender {
            ChatSender::Student => ("you", Theme::chat_student()),
            ChatSender::Assistant => ("assistant", Theme::chat_assistant()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", msg.timestamp), Theme::timestamp()),
            Span::styled(format!("<{}> ", who), style),
            Span::styled(msg.text.clone(), Theme::value()),
        ]));
    }
    if state.assistant.waiting {
        lines.push(Line::from(Span::styled(
            format!("{} thinking...", spinner_frame(state.tick_count)),
            Theme::waiting(),
        )));
    }

    // Stick to the bottom unless the user scrolled up.
    let height = inner.height as usize;
    let skip = lines
        .len()
        .saturating_sub(height + state.assistant.scroll_offset);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

    let paragraph = Paragraph::new(visible).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
