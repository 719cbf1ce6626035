use crate::app::state::{AppState, TopicsField};
use crate::ui::theme::Theme;
use crate::ui::{format_date, input_box, layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (form_area, list_area) = layout::form_over_list(area, 3);

    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(form_area);

    input_box::render(
        frame,
        fields[0],
        "New topic",
        &state.topics.topic_input,
        state.topics.field == TopicsField::Topic,
    );
    input_box::render(
        frame,
        fields[1],
        "Description",
        &state.topics.description_input,
        state.topics.field == TopicsField::Description,
    );

    let block = Block::default()
        .title(" Learning Topics ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut items: Vec<ListItem> = Vec::new();

    match &state.topics.topics {
        None if state.topics.loading => {
            items.push(ListItem::new(Span::styled(" Loading...", Theme::muted())));
        }
        None => {
            items.push(ListItem::new(Span::styled(" Not loaded", Theme::muted())));
        }
        Some(topics) if topics.is_empty() => {
            items.push(ListItem::new(Span::styled(
                " No learning topics yet. Add your first topic above!",
                Theme::muted(),
            )));
        }
        Some(topics) => {
            for topic in topics.iter().skip(state.topics.scroll) {
                let (badge, badge_style) = if topic.completed {
                    ("Completed", Theme::badge_success())
                } else {
                    ("In Progress", Theme::badge_warning())
                };
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", topic.topic), Theme::value()),
                    Span::styled(format!("[{}] ", badge), badge_style),
                    Span::styled(format!("+{} pts ", topic.points_earned), Theme::header_points()),
                    Span::styled(format_date(&topic.created_at), Theme::timestamp()),
                ])));
                let description = topic
                    .description
                    .as_deref()
                    .unwrap_or("No description available");
                items.push(ListItem::new(Span::styled(
                    format!("   {}", description),
                    Theme::label(),
                )));
            }
        }
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, list_area);
}
