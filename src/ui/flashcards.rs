use crate::app::state::{AppState, PaneFocus};
use crate::ui::theme::Theme;
use crate::ui::{input_box, layout, spinner_frame};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (form_area, cards_area) = layout::form_over_list(area, 3);

    input_box::render(
        frame,
        form_area,
        "Flashcard topic",
        &state.flashcards.topic_input,
        state.flashcards.focus == PaneFocus::Form,
    );

    let block = Block::default()
        .title(" Flashcards ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(if state.flashcards.focus == PaneFocus::List {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(cards_area);
    frame.render_widget(block, cards_area);

    if state.flashcards.loading {
        let spinner = format!("{} Generating...", spinner_frame(state.tick_count));
        frame.render_widget(
            Paragraph::new(spinner).style(Theme::waiting()),
            inner,
        );
        return;
    }

    if state.flashcards.cards.is_empty() {
        frame.render_widget(
            Paragraph::new("Enter a topic above to generate revision flashcards.")
                .style(Theme::muted()),
            inner,
        );
        return;
    }

    // Cards side by side, three per row of the grid.
    let per_row = 3usize;
    let rows = state.flashcards.cards.len().div_ceil(per_row);
    let row_constraints: Vec<Constraint> = (0..rows).map(|_| Constraint::Length(6)).collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    for (i, card) in state.flashcards.cards.iter().enumerate() {
        let row = i / per_row;
        let col = i % per_row;
        let Some(row_area) = row_areas.get(row) else {
            break;
        };
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(33),
                Constraint::Percentage(34),
            ])
            .split(*row_area);

        let flipped = state.flashcards.flipped.get(i).copied().unwrap_or(false);
        let selected = state.flashcards.selected == i;

        let border = if selected {
            Theme::border_focused()
        } else {
            Theme::border()
        };
        let title = if flipped { " definition " } else { " term " };
        let card_block = Block::default()
            .title(title)
            .title_style(Theme::muted())
            .borders(Borders::ALL)
            .border_style(border);
        let card_inner = card_block.inner(col_areas[col]);
        frame.render_widget(card_block, col_areas[col]);

        let (text, style) = if flipped {
            (card.definition.as_str(), Theme::label())
        } else {
            (card.term.as_str(), Theme::value())
        };
        frame.render_widget(
            Paragraph::new(text).style(style).wrap(Wrap { trim: true }),
            card_inner,
        );
    }
}
