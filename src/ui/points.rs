use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::ui::format_date;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Points History ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut items: Vec<ListItem> = Vec::new();

    match &state.points.transactions {
        None if state.points.loading => {
            items.push(ListItem::new(Span::styled(" Loading...", Theme::muted())));
        }
        None => {
            items.push(ListItem::new(Span::styled(" Not loaded", Theme::muted())));
        }
        Some(transactions) if transactions.is_empty() => {
            items.push(ListItem::new(Span::styled(
                " No points transactions yet.",
                Theme::muted(),
            )));
        }
        Some(transactions) => {
            for tx in transactions.iter().skip(state.points.scroll) {
                let amount_style = if tx.amount > 0 {
                    Theme::badge_success()
                } else {
                    Theme::badge_warning()
                };
                let sign = if tx.amount > 0 { "+" } else { "" };
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(format!(" {}{} ", sign, tx.amount), amount_style),
                    Span::styled(format!("{} ", tx.reason), Theme::value()),
                    Span::styled(format_date(&tx.created_at), Theme::timestamp()),
                ])));
            }
        }
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
