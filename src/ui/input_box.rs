use crate::app::state::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Render a single-line labeled input. When focused, the terminal cursor is
/// placed at the input's edit position.
pub fn render(frame: &mut Frame, area: Rect, label: &str, input: &InputState, focused: bool) {
    let block = Block::default()
        .title(format!(" {} ", label))
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(input.text.as_str()).style(Theme::input_text());
    frame.render_widget(paragraph, inner);

    if focused {
        let cursor_x = inner.x + input.text[..input.cursor].width() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }
}
