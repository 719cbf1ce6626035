use crate::api::types::Doubt;
use crate::app::feedback::{stage, FeedbackStage};
use crate::app::state::{AppState, DoubtField, FeedbackForm, PaneFocus};
use crate::ui::theme::Theme;
use crate::ui::{format_date, input_box, layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (form_area, lower) = layout::form_over_list(area, 3);
    render_form(frame, form_area, state);

    let (list_area, detail_area) = layout::list_beside_detail(lower);
    render_list(frame, list_area, state);
    render_detail(frame, detail_area, state);
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.doubts.focus == PaneFocus::Form && state.doubts.feedback_form.is_none();
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Percentage(30),
        ])
        .split(area);

    input_box::render(
        frame,
        fields[0],
        "Topic",
        &state.doubts.topic_input,
        focused && state.doubts.field == DoubtField::Topic,
    );
    input_box::render(
        frame,
        fields[1],
        "Question",
        &state.doubts.question_input,
        focused && state.doubts.field == DoubtField::Question,
    );
    input_box::render(
        frame,
        fields[2],
        "Attachment path (optional)",
        &state.doubts.attachment_input,
        focused && state.doubts.field == DoubtField::Attachment,
    );
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.doubts.focus == PaneFocus::List && state.doubts.feedback_form.is_none();
    let block = Block::default()
        .title(" My Doubts ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let mut items: Vec<ListItem> = Vec::new();

    match &state.doubts.doubts {
        None if state.doubts.loading => {
            items.push(ListItem::new(Span::styled(" Loading...", Theme::muted())));
        }
        None => {
            items.push(ListItem::new(Span::styled(" Not loaded", Theme::muted())));
        }
        Some(doubts) if doubts.is_empty() => {
            items.push(ListItem::new(Span::styled(" No doubts yet", Theme::muted())));
            items.push(ListItem::new(Span::styled(
                " Submit your first doubt above!",
                Theme::muted(),
            )));
        }
        Some(doubts) => {
            for (i, doubt) in doubts.iter().enumerate() {
                let selected = i == state.doubts.selected;
                let marker = if selected { "▸" } else { " " };
                let row_style = if selected {
                    Theme::selected_row()
                } else {
                    Theme::value()
                };
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(format!("{} {} ", marker, doubt.topic), row_style),
                    status_badge(doubt),
                ])));
            }
        }
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn status_badge(doubt: &Doubt) -> Span<'static> {
    match stage(doubt) {
        FeedbackStage::AwaitingAnswer => Span::styled("pending", Theme::badge_warning()),
        FeedbackStage::Answered => Span::styled("answered", Theme::badge_success()),
        FeedbackStage::Upvoted | FeedbackStage::FinalRated => {
            Span::styled("✓ resolved", Theme::badge_success())
        }
        FeedbackStage::CommentSubmitted => Span::styled("feedback sent", Theme::badge_warning()),
        FeedbackStage::ReplyReceived => Span::styled("reply received", Theme::badge_warning()),
    }
}

fn render_detail(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Doubt ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(doubt) = state.doubts.selected_doubt() else {
        frame.render_widget(
            Paragraph::new("Select a doubt to see the exchange.").style(Theme::muted()),
            inner,
        );
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("Q: ", Theme::label()),
        Span::styled(doubt.question.clone(), Theme::value()),
    ]));
    if let Some(image) = &doubt.question_image {
        lines.push(Line::from(Span::styled(
            format!("   attachment: {}", image),
            Theme::muted(),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("   submitted {}", format_date(&doubt.created_at)),
        Theme::timestamp(),
    )));
    lines.push(Line::from(""));

    match stage(doubt) {
        FeedbackStage::AwaitingAnswer => {
            lines.push(Line::from(Span::styled(
                "Waiting for teacher response...",
                Theme::waiting(),
            )));
        }
        other => {
            push_answer_lines(&mut lines, doubt);
            push_feedback_lines(&mut lines, state, doubt, other);
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn push_answer_lines(lines: &mut Vec<Line>, doubt: &Doubt) {
    if let Some(answer) = &doubt.answer {
        lines.push(Line::from(vec![
            Span::styled("A: ", Theme::label()),
            Span::styled(answer.clone(), Theme::answer_text()),
        ]));
        if let Some(image) = &doubt.answer_image {
            lines.push(Line::from(Span::styled(
                format!("   attachment: {}", image),
                Theme::muted(),
            )));
        }
        if let Some(at) = &doubt.answered_at {
            lines.push(Line::from(Span::styled(
                format!("   answered {}", format_date(at)),
                Theme::timestamp(),
            )));
        }
        lines.push(Line::from(""));
    }
}

fn push_feedback_lines(
    lines: &mut Vec<Line>,
    state: &AppState,
    doubt: &Doubt,
    stage: FeedbackStage,
) {
    match stage {
        FeedbackStage::Answered => match &state.doubts.feedback_form {
            Some(FeedbackForm::Comment {
                doubt_id,
                rating,
                comment,
            }) if *doubt_id == doubt.id => {
                lines.push(Line::from(Span::styled(
                    "Why wasn't the answer helpful?",
                    Theme::title(),
                )));
                lines.push(Line::from(vec![
                    Span::styled("Rating: ", Theme::label()),
                    Span::styled(stars(*rating), Theme::header_points()),
                    Span::styled("  (Up/Down to change)", Theme::muted()),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Comment: ", Theme::label()),
                    Span::styled(format!("{}▏", comment.text), Theme::input_text()),
                ]));
                lines.push(Line::from(Span::styled(
                    "Enter submit · Esc cancel",
                    Theme::muted(),
                )));
            }
            _ => {
                lines.push(Line::from(Span::styled(
                    "Was this answer helpful?",
                    Theme::title(),
                )));
                lines.push(Line::from(vec![
                    Span::styled("  u ", Theme::badge_success()),
                    Span::styled("Yes, upvote    ", Theme::value()),
                    Span::styled("d ", Theme::badge_warning()),
                    Span::styled("No, leave feedback", Theme::value()),
                ]));
            }
        },
        FeedbackStage::Upvoted => {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Theme::badge_success()),
                Span::styled(
                    "Thank you for the upvote! Teacher earned 10 points.",
                    Theme::value(),
                ),
            ]));
        }
        FeedbackStage::CommentSubmitted | FeedbackStage::ReplyReceived => {
            lines.push(Line::from(Span::styled(
                "Communication with teacher",
                Theme::title(),
            )));
            if let Some(comment) = &doubt.student_comment {
                lines.push(Line::from(vec![
                    Span::styled("You: ", Theme::chat_student()),
                    Span::styled(comment.clone(), Theme::value()),
                ]));
            }
            match &doubt.teacher_reply {
                Some(reply) => {
                    lines.push(Line::from(vec![
                        Span::styled("Teacher: ", Theme::chat_assistant()),
                        Span::styled(reply.clone(), Theme::value()),
                    ]));
                    lines.push(Line::from(""));
                    match &state.doubts.feedback_form {
                        Some(FeedbackForm::Final { doubt_id, rating })
                            if *doubt_id == doubt.id =>
                        {
                            lines.push(Line::from(vec![
                                Span::styled("Final rating: ", Theme::label()),
                                Span::styled(stars(*rating), Theme::header_points()),
                                Span::styled(
                                    "  (Up/Down change · Enter submit · Esc cancel)",
                                    Theme::muted(),
                                ),
                            ]));
                        }
                        _ => {
                            lines.push(Line::from(vec![
                                Span::styled("f ", Theme::badge_warning()),
                                Span::styled("Rate the final solution", Theme::value()),
                            ]));
                        }
                    }
                }
                None => {
                    lines.push(Line::from(Span::styled(
                        "Waiting for the teacher's reply...",
                        Theme::waiting(),
                    )));
                }
            }
        }
        FeedbackStage::FinalRated => {
            let rating = doubt.final_rating.unwrap_or(0);
            lines.push(Line::from(vec![
                Span::styled("Final rating: ", Theme::label()),
                Span::styled(stars(rating), Theme::header_points()),
                Span::styled("  ✓ Resolved", Theme::badge_success()),
            ]));
        }
        FeedbackStage::AwaitingAnswer => {}
    }
}

fn stars(rating: u8) -> String {
    let filled = "★".repeat(rating as usize);
    let empty = "☆".repeat(5usize.saturating_sub(rating as usize));
    format!("{}{} {}/5", filled, empty, rating)
}
