use crate::api::types::{Difficulty, QuizOutcome};
use crate::app::state::{ActiveQuiz, AppState, QuizField, QuizPhase, UNANSWERED};
use crate::ui::theme::Theme;
use crate::ui::{input_box, layout, spinner_frame};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Dedicated quiz view: setup form, loading, the running quiz, results.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (body, status) = layout::screen_layout(area);

    let hint = match &state.quiz.phase {
        QuizPhase::Setup => " Tab field | Enter start quiz | Esc back ",
        QuizPhase::Loading => " Generating questions... | Esc back ",
        QuizPhase::Active(_) => " Up/Down question | 1-4 answer | Enter submit | Esc abandon ",
        QuizPhase::Results(_) => " n new quiz | Esc back ",
    };
    frame.render_widget(Paragraph::new(hint).style(Theme::status_bar()), status);

    match &state.quiz.phase {
        QuizPhase::Setup => render_setup(frame, body, state),
        QuizPhase::Loading => {
            let spinner = format!(
                "{} Generating {} questions...",
                spinner_frame(state.tick_count),
                state.quiz.difficulty.label().to_lowercase()
            );
            frame.render_widget(Paragraph::new(spinner).style(Theme::waiting()), body);
        }
        QuizPhase::Active(quiz) => render_active(frame, body, quiz),
        QuizPhase::Results(outcome) => render_results(frame, body, outcome),
    }
}

fn render_setup(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" QnA Quiz Session ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("Test your knowledge with MCQ questions on any topic. 10 points per correct answer.")
            .style(Theme::label())
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    input_box::render(
        frame,
        chunks[1],
        "Topic",
        &state.quiz.topic_input,
        state.quiz.field == QuizField::Topic,
    );

    let difficulty_focused = state.quiz.field == QuizField::Difficulty;
    let mut parts: Vec<Span> = vec![Span::styled(
        " Difficulty: ",
        if difficulty_focused {
            Theme::title()
        } else {
            Theme::label()
        },
    )];
    for d in Difficulty::ALL {
        let style = if d == state.quiz.difficulty {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        parts.push(Span::styled(format!(" {} ", d.label()), style));
    }
    if difficulty_focused {
        parts.push(Span::styled("  (Left/Right to change)", Theme::muted()));
    }
    frame.render_widget(Paragraph::new(Line::from(parts)), chunks[2]);
}

fn render_active(frame: &mut Frame, area: Rect, quiz: &ActiveQuiz) {
    let answered = quiz.answers.len() - quiz.unanswered_count();
    let title = format!(
        " Quiz — {}/{} answered — {} ",
        answered,
        quiz.session.questions.len(),
        quiz.session.difficulty.label()
    );
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, question) in quiz.session.questions.iter().enumerate() {
        let selected = i == quiz.selected;
        let marker = if selected { "▸" } else { " " };
        let q_style = if selected {
            Theme::selected_row()
        } else {
            Theme::value()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} Q{}. ", marker, i + 1), q_style),
            Span::styled(question.question.clone(), q_style),
        ]));
        for (oi, option) in question.options.iter().enumerate() {
            let picked = quiz.answers[i] == oi as i64;
            let mark = if picked { "(•)" } else { "( )" };
            let style = if picked {
                Theme::badge_success()
            } else {
                Theme::label()
            };
            lines.push(Line::from(Span::styled(
                format!("     {} {}. {}", mark, oi + 1, option),
                style,
            )));
        }
        if quiz.answers[i] == UNANSWERED && selected {
            lines.push(Line::from(Span::styled(
                "     press 1-4 to answer",
                Theme::muted(),
            )));
        }
        lines.push(Line::from(""));
    }

    // Keep the selected question in view.
    let height = inner.height as usize;
    let per_question = lines.len() / quiz.session.questions.len().max(1);
    let first_line = quiz.selected * per_question;
    let skip = first_line.saturating_sub(height / 3);

    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(visible).wrap(Wrap { trim: false }), inner);
}

fn render_results(frame: &mut Frame, area: Rect, outcome: &QuizOutcome) {
    let block = Block::default()
        .title(" Quiz Results ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("Score: ", Theme::label()),
        Span::styled(
            format!("{}/{} ", outcome.score, outcome.total_questions),
            Theme::value(),
        ),
        Span::styled(format!("({}%)  ", outcome.percentage), Theme::value()),
        Span::styled(
            format!("+{} points  ", outcome.points_earned),
            Theme::header_points(),
        ),
        Span::styled(format!("[{}]", outcome.difficulty), Theme::muted()),
    ]));
    lines.push(Line::from(""));

    for (i, result) in outcome.results.iter().enumerate() {
        let (mark, style) = if result.is_correct {
            ("✓", Theme::correct())
        } else {
            ("✗", Theme::incorrect())
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} Q{}. ", mark, i + 1), style),
            Span::styled(result.question.clone(), Theme::value()),
        ]));
        for (oi, option) in result.options.iter().enumerate() {
            let oi = oi as i64;
            let annotation = if oi == result.correct_answer {
                " ✓"
            } else if oi == result.user_answer && !result.is_correct {
                " ✗ your answer"
            } else {
                ""
            };
            let style = if oi == result.correct_answer {
                Theme::correct()
            } else if oi == result.user_answer && !result.is_correct {
                Theme::incorrect()
            } else {
                Theme::label()
            };
            lines.push(Line::from(Span::styled(
                format!("     {}. {}{}", oi + 1, option, annotation),
                style,
            )));
        }
        // Explanations only where the answer was wrong.
        if !result.is_correct && !result.explanation.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("     Explanation: ", Theme::label()),
                Span::styled(result.explanation.clone(), Theme::value()),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
