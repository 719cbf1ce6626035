use std::path::Path;
use std::time::Instant;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::api::upload;
use crate::api::ApiError;
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::feedback::{self, FeedbackStage, MAX_RATING, MIN_RATING, UPVOTE_RATING};
use crate::app::state::*;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Profile(result) => handle_profile(state, result),
        AppEvent::LoggedOut(result) => {
            if let Err(e) = result {
                warn!(%e, "logout failed");
            }
            // Even a failed logout drops back to the signed-out screen.
            state.route = Route::SignedOut;
            state.dirty = true;
            vec![]
        }
        AppEvent::Topics(result) => {
            state.topics.loading = false;
            match result {
                Ok(topics) => {
                    state.topics.scroll = 0;
                    state.topics.topics = Some(topics);
                    state.dirty = true;
                }
                Err(e) => report_failure(state, "Failed to load learning topics", &e),
            }
            vec![]
        }
        AppEvent::TopicAdded(result) => match result {
            Ok(()) => {
                state.success_alert("Topic added successfully!");
                state.topics.topic_input.clear();
                state.topics.description_input.clear();
                state.topics.loading = true;
                vec![Action::LoadTopics]
            }
            Err(e) => {
                report_failure(state, "Failed to add topic", &e);
                vec![]
            }
        },
        AppEvent::Doubts(result) => {
            state.doubts.loading = false;
            match result {
                Ok(doubts) => {
                    if state.doubts.selected >= doubts.len() {
                        state.doubts.selected = doubts.len().saturating_sub(1);
                    }
                    // A refreshed list may no longer contain the doubt a form
                    // was opened for.
                    if let Some(form) = &state.doubts.feedback_form {
                        let id = match form {
                            FeedbackForm::Comment { doubt_id, .. } => *doubt_id,
                            FeedbackForm::Final { doubt_id, .. } => *doubt_id,
                        };
                        if !doubts.iter().any(|d| d.id == id) {
                            state.doubts.feedback_form = None;
                        }
                    }
                    state.doubts.doubts = Some(doubts);
                    state.dirty = true;
                }
                Err(e) => report_failure(state, "Failed to load doubts", &e),
            }
            vec![]
        }
        AppEvent::DoubtSubmitted(result) => match result {
            Ok(()) => {
                state.success_alert("Doubt submitted successfully!");
                state.doubts.topic_input.clear();
                state.doubts.question_input.clear();
                state.doubts.attachment_input.clear();
                state.doubts.loading = true;
                vec![Action::LoadDoubts]
            }
            Err(e) => {
                report_failure(state, "Failed to submit doubt", &e);
                vec![]
            }
        },
        AppEvent::ChatReply(result) => {
            state.assistant.waiting = false;
            state.assistant.scroll_offset = 0;
            match result {
                Ok(reply) => state.push_chat(ChatSender::Assistant, reply),
                Err(e) => {
                    // The assistant apologizes in-channel instead of alerting.
                    warn!(%e, "chat request failed");
                    state.push_chat(
                        ChatSender::Assistant,
                        "Sorry, I encountered an error. Please try again.".to_string(),
                    );
                }
            }
            vec![]
        }
        AppEvent::Flashcards(result) => {
            state.flashcards.loading = false;
            match result {
                Ok(cards) => {
                    if !cards.is_empty() {
                        state.flashcards.focus = PaneFocus::List;
                    }
                    state.flashcards.set_cards(cards);
                    state.dirty = true;
                }
                Err(e) => report_failure(state, "Failed to generate flashcards", &e),
            }
            vec![]
        }
        AppEvent::QuizStarted(result) => {
            match result {
                Ok(session) => {
                    state.quiz.phase = QuizPhase::Active(ActiveQuiz::new(session));
                    state.dirty = true;
                }
                Err(e) => {
                    state.quiz.phase = QuizPhase::Setup;
                    report_failure(state, "Failed to start quiz", &e);
                }
            }
            vec![]
        }
        AppEvent::QuizScored(result) => match result {
            Ok(outcome) => {
                if outcome.points_earned > 0 {
                    state.show_points_note(outcome.points_earned);
                }
                state.quiz.phase = QuizPhase::Results(outcome);
                state.dirty = true;
                // The score changed the profile's point balance server-side.
                vec![Action::LoadProfile]
            }
            Err(e) => {
                if let QuizPhase::Active(quiz) = &mut state.quiz.phase {
                    quiz.submitting = false;
                }
                report_failure(state, "Failed to submit answers", &e);
                vec![]
            }
        },
        AppEvent::PointsHistory(result) => {
            state.points.loading = false;
            match result {
                Ok(transactions) => {
                    state.points.scroll = 0;
                    state.points.transactions = Some(transactions);
                    state.dirty = true;
                }
                Err(e) => report_failure(state, "Failed to load points history", &e),
            }
            vec![]
        }
        AppEvent::AnswerRated { upvoted, result } => {
            state.doubts.rate_request.finish();
            match result {
                Ok(()) => {
                    if upvoted {
                        state.success_alert("Thank you for the upvote! Teacher earned 10 points.");
                    } else {
                        state.success_alert("Feedback submitted. Teacher will reply soon.");
                    }
                    state.doubts.feedback_form = None;
                    state.doubts.loading = true;
                    vec![Action::LoadDoubts]
                }
                Err(e) => {
                    let context = if upvoted {
                        "Failed to submit rating"
                    } else {
                        "Failed to submit feedback"
                    };
                    report_failure(state, context, &e);
                    vec![]
                }
            }
        }
        AppEvent::FinalRatingSaved { rating, result } => {
            state.doubts.final_request.finish();
            match result {
                Ok(()) => {
                    if feedback::implies_final_upvote(rating) {
                        state.success_alert("Final rating submitted! Teacher earned 10 points.");
                    } else {
                        state.success_alert("Final rating submitted.");
                    }
                    state.doubts.feedback_form = None;
                    state.doubts.loading = true;
                    vec![Action::LoadDoubts]
                }
                Err(e) => {
                    report_failure(state, "Failed to submit final rating", &e);
                    vec![]
                }
            }
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_profile(state: &mut AppState, result: Result<crate::api::types::UserProfile, ApiError>) -> Vec<Action> {
    match result {
        Ok(user) => {
            state.user = Some(user);
            if state.route == Route::SignedOut {
                state.route = Route::Dashboard;
            }
            state.dirty = true;
        }
        Err(e) => {
            // Any failure to establish who we are sends us to the
            // signed-out screen, not an alert.
            warn!(%e, "profile fetch failed");
            state.route = Route::SignedOut;
            state.dirty = true;
        }
    }
    vec![]
}

/// Log an API failure and surface it. 401 switches to the signed-out screen;
/// everything else becomes a transient error alert. Never retried.
fn report_failure(state: &mut AppState, context: &str, err: &ApiError) {
    warn!(%err, context, "api request failed");
    if matches!(err, ApiError::Unauthorized) {
        state.route = Route::SignedOut;
    } else {
        state.error_alert(format!("{}: {}", context, err));
    }
    state.dirty = true;
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    if state.prune_expired(Instant::now()) || state.has_animation() {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.route {
        Route::SignedOut => handle_signed_out_key(key),
        Route::Screen(Screen::Assistant) => handle_assistant_key(state, key),
        Route::Screen(Screen::Quiz) => handle_quiz_key(state, key),
        Route::Dashboard => handle_dashboard_key(state, key),
    }
}

fn handle_signed_out_key(key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('r') => vec![Action::LoadProfile],
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_dashboard_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::F(10) {
        return vec![Action::Logout];
    }

    // F1..F6 select tabs, routed through the navigation table.
    if let KeyCode::F(n) = key.code {
        if (1..=Tab::ALL.len() as u8).contains(&n) {
            return activate_tab(state, Tab::ALL[(n - 1) as usize]);
        }
        return vec![];
    }

    match state.active_tab {
        Tab::Topics => handle_topics_key(state, key),
        Tab::Doubts => handle_doubts_key(state, key),
        Tab::Flashcards => handle_flashcards_key(state, key),
        Tab::Points => handle_points_key(state, key),
        // Screen tabs never stay active on the dashboard.
        Tab::Assistant | Tab::Quiz => vec![],
    }
}

/// Switch to a tab and kick off its data load, per the navigation table.
pub fn activate_tab(state: &mut AppState, tab: Tab) -> Vec<Action> {
    state.dirty = true;
    match nav_target(tab) {
        NavTarget::Screen(screen) => {
            state.route = Route::Screen(screen);
            vec![]
        }
        NavTarget::Pane(tab) => {
            state.route = Route::Dashboard;
            state.active_tab = tab;
            match tab {
                Tab::Topics => {
                    state.topics.loading = true;
                    vec![Action::LoadTopics]
                }
                Tab::Doubts => {
                    state.doubts.loading = true;
                    vec![Action::LoadDoubts]
                }
                Tab::Points => {
                    state.points.loading = true;
                    vec![Action::LoadPointsHistory]
                }
                Tab::Flashcards => {
                    state.flashcards.clear();
                    vec![]
                }
                Tab::Assistant | Tab::Quiz => vec![],
            }
        }
    }
}

fn edit_input(input: &mut InputState, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert_char(c);
            true
        }
        KeyCode::Backspace => {
            input.delete_back();
            true
        }
        KeyCode::Delete => {
            input.delete_forward();
            true
        }
        KeyCode::Left => {
            input.move_left();
            true
        }
        KeyCode::Right => {
            input.move_right();
            true
        }
        KeyCode::Home => {
            input.move_home();
            true
        }
        KeyCode::End => {
            input.move_end();
            true
        }
        _ => false,
    }
}

fn handle_topics_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Tab => {
            state.topics.field = match state.topics.field {
                TopicsField::Topic => TopicsField::Description,
                TopicsField::Description => TopicsField::Topic,
            };
            vec![]
        }
        KeyCode::Up => {
            state.topics.scroll = state.topics.scroll.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            let len = state.topics.topics.as_ref().map(Vec::len).unwrap_or(0);
            if state.topics.scroll + 1 < len {
                state.topics.scroll += 1;
            }
            vec![]
        }
        KeyCode::Enter => {
            let topic = state.topics.topic_input.text.trim().to_string();
            if topic.is_empty() {
                state.error_alert("Topic is required");
                return vec![];
            }
            let description = state.topics.description_input.text.trim().to_string();
            vec![Action::AddTopic { topic, description }]
        }
        _ => {
            edit_input(state.topics.active_input(), &key);
            vec![]
        }
    }
}

fn handle_doubts_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // An open feedback form captures all input
    if state.doubts.feedback_form.is_some() {
        return handle_feedback_form_key(state, key);
    }

    if key.code == KeyCode::Tab {
        state.doubts.focus = match state.doubts.focus {
            PaneFocus::Form => PaneFocus::List,
            PaneFocus::List => PaneFocus::Form,
        };
        return vec![];
    }

    match state.doubts.focus {
        PaneFocus::Form => handle_doubt_form_key(state, key),
        PaneFocus::List => handle_doubt_list_key(state, key),
    }
}

fn handle_doubt_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.doubts.field = match state.doubts.field {
                DoubtField::Topic => DoubtField::Attachment,
                DoubtField::Question => DoubtField::Topic,
                DoubtField::Attachment => DoubtField::Question,
            };
            vec![]
        }
        KeyCode::Down => {
            state.doubts.field = match state.doubts.field {
                DoubtField::Topic => DoubtField::Question,
                DoubtField::Question => DoubtField::Attachment,
                DoubtField::Attachment => DoubtField::Topic,
            };
            vec![]
        }
        KeyCode::Enter => {
            let topic = state.doubts.topic_input.text.trim().to_string();
            let question = state.doubts.question_input.text.trim().to_string();
            if topic.is_empty() || question.is_empty() {
                state.error_alert("Topic and question are required");
                return vec![];
            }

            // Attachment constraints are enforced before any request exists.
            let path_text = state.doubts.attachment_input.text.trim().to_string();
            let attachment = if path_text.is_empty() {
                None
            } else {
                match upload::validate_attachment(Path::new(&path_text)) {
                    Ok(att) => Some(att),
                    Err(e) => {
                        state.error_alert(e.to_string());
                        return vec![];
                    }
                }
            };

            vec![Action::SubmitDoubt {
                topic,
                question,
                attachment,
            }]
        }
        _ => {
            edit_input(state.doubts.active_input(), &key);
            vec![]
        }
    }
}

fn handle_doubt_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.doubts.select_prev();
            vec![]
        }
        KeyCode::Down => {
            state.doubts.select_next();
            vec![]
        }
        KeyCode::Char('u') => {
            let Some(doubt) = state.doubts.selected_doubt() else {
                return vec![];
            };
            if feedback::stage(doubt) != FeedbackStage::Answered {
                return vec![];
            }
            // Suppress a second press while the first is still in flight.
            if state.doubts.rate_request.is_in_flight() {
                return vec![];
            }
            let doubt_id = doubt.id;
            state.doubts.rate_request.begin();
            vec![Action::RateAnswer {
                doubt_id,
                rating: UPVOTE_RATING,
                upvoted: true,
                comment: String::new(),
            }]
        }
        KeyCode::Char('d') => {
            if let Some(doubt) = state.doubts.selected_doubt() {
                if feedback::stage(doubt) == FeedbackStage::Answered {
                    state.doubts.feedback_form = Some(FeedbackForm::Comment {
                        doubt_id: doubt.id,
                        rating: 3,
                        comment: InputState::new(),
                    });
                }
            }
            vec![]
        }
        KeyCode::Char('f') => {
            if let Some(doubt) = state.doubts.selected_doubt() {
                if feedback::stage(doubt) == FeedbackStage::ReplyReceived {
                    state.doubts.feedback_form = Some(FeedbackForm::Final {
                        doubt_id: doubt.id,
                        rating: MIN_RATING,
                    });
                }
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_feedback_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Esc {
        // Cancelling the comment form restores the card by re-fetching, not
        // by patching local state.
        let was_comment = matches!(
            state.doubts.feedback_form,
            Some(FeedbackForm::Comment { .. })
        );
        state.doubts.feedback_form = None;
        if was_comment {
            state.doubts.loading = true;
            return vec![Action::LoadDoubts];
        }
        return vec![];
    }

    if key.code == KeyCode::Enter {
        return submit_feedback_form(state);
    }

    if let Some(form) = state.doubts.feedback_form.as_mut() {
        match form {
            FeedbackForm::Comment {
                rating, comment, ..
            } => match key.code {
                KeyCode::Up => *rating = (*rating + 1).min(MAX_RATING),
                KeyCode::Down => *rating = rating.saturating_sub(1).max(MIN_RATING),
                _ => {
                    edit_input(comment, &key);
                }
            },
            FeedbackForm::Final { rating, .. } => match key.code {
                KeyCode::Up => *rating = (*rating + 1).min(MAX_RATING),
                KeyCode::Down => *rating = rating.saturating_sub(1).max(MIN_RATING),
                _ => {}
            },
        }
    }
    vec![]
}

fn submit_feedback_form(state: &mut AppState) -> Vec<Action> {
    let Some(form) = &state.doubts.feedback_form else {
        return vec![];
    };

    match form {
        FeedbackForm::Comment {
            doubt_id,
            rating,
            comment,
        } => {
            let (doubt_id, rating) = (*doubt_id, *rating);
            let text = comment.text.trim().to_string();
            if let Err(e) = feedback::validate_downvote(&text, rating) {
                state.error_alert(e.to_string());
                return vec![];
            }
            if state.doubts.rate_request.is_in_flight() {
                return vec![];
            }
            state.doubts.rate_request.begin();
            vec![Action::RateAnswer {
                doubt_id,
                rating,
                upvoted: false,
                comment: text,
            }]
        }
        FeedbackForm::Final { doubt_id, rating } => {
            let (doubt_id, rating) = (*doubt_id, *rating);
            if let Err(e) = feedback::validate_rating(rating) {
                state.error_alert(e.to_string());
                return vec![];
            }
            if state.doubts.final_request.is_in_flight() {
                return vec![];
            }
            state.doubts.final_request.begin();
            vec![Action::SubmitFinalRating {
                doubt_id,
                rating,
                upvoted: feedback::implies_final_upvote(rating),
            }]
        }
    }
}

fn handle_flashcards_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Tab {
        state.flashcards.focus = match state.flashcards.focus {
            PaneFocus::Form if !state.flashcards.cards.is_empty() => PaneFocus::List,
            PaneFocus::Form => PaneFocus::Form,
            PaneFocus::List => PaneFocus::Form,
        };
        return vec![];
    }

    match state.flashcards.focus {
        PaneFocus::Form => match key.code {
            KeyCode::Enter => {
                let topic = state.flashcards.topic_input.text.trim().to_string();
                if topic.is_empty() {
                    return vec![];
                }
                state.flashcards.clear();
                state.flashcards.loading = true;
                vec![Action::GenerateFlashcards { topic }]
            }
            _ => {
                edit_input(&mut state.flashcards.topic_input, &key);
                vec![]
            }
        },
        PaneFocus::List => match key.code {
            KeyCode::Left => {
                state.flashcards.selected = state.flashcards.selected.saturating_sub(1);
                vec![]
            }
            KeyCode::Right => {
                if state.flashcards.selected + 1 < state.flashcards.cards.len() {
                    state.flashcards.selected += 1;
                }
                vec![]
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                state.flashcards.flip_selected();
                vec![]
            }
            _ => vec![],
        },
    }
}

fn handle_points_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.points.scroll = state.points.scroll.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            let len = state
                .points
                .transactions
                .as_ref()
                .map(Vec::len)
                .unwrap_or(0);
            if state.points.scroll + 1 < len {
                state.points.scroll += 1;
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_assistant_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => {
            state.route = Route::Dashboard;
            vec![]
        }
        KeyCode::Enter => {
            if state.assistant.input.text.trim().is_empty() {
                return vec![];
            }
            let message = state.assistant.input.take_text().trim().to_string();
            state.push_chat(ChatSender::Student, message.clone());
            state.assistant.waiting = true;
            state.assistant.scroll_offset = 0;
            vec![Action::SendChat { message }]
        }
        KeyCode::Up => {
            state.assistant.input.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.assistant.input.history_down();
            vec![]
        }
        KeyCode::PageUp => {
            state.assistant.scroll_offset += 5;
            vec![]
        }
        KeyCode::PageDown => {
            state.assistant.scroll_offset = state.assistant.scroll_offset.saturating_sub(5);
            vec![]
        }
        _ => {
            edit_input(&mut state.assistant.input, &key);
            vec![]
        }
    }
}

fn handle_quiz_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match &mut state.quiz.phase {
        QuizPhase::Setup => match key.code {
            KeyCode::Esc => {
                state.route = Route::Dashboard;
                vec![]
            }
            KeyCode::Tab => {
                state.quiz.field = match state.quiz.field {
                    QuizField::Topic => QuizField::Difficulty,
                    QuizField::Difficulty => QuizField::Topic,
                };
                vec![]
            }
            KeyCode::Enter => {
                let topic = state.quiz.topic_input.text.trim().to_string();
                if topic.is_empty() {
                    return vec![];
                }
                state.quiz.phase = QuizPhase::Loading;
                vec![Action::StartQuiz {
                    topic,
                    difficulty: state.quiz.difficulty,
                }]
            }
            _ => {
                match state.quiz.field {
                    QuizField::Topic => {
                        edit_input(&mut state.quiz.topic_input, &key);
                    }
                    QuizField::Difficulty => match key.code {
                        KeyCode::Left | KeyCode::Up => {
                            state.quiz.difficulty = state.quiz.difficulty.prev();
                        }
                        KeyCode::Right | KeyCode::Down => {
                            state.quiz.difficulty = state.quiz.difficulty.next();
                        }
                        _ => {}
                    },
                }
                vec![]
            }
        },
        QuizPhase::Loading => match key.code {
            KeyCode::Esc => {
                state.route = Route::Dashboard;
                vec![]
            }
            _ => vec![],
        },
        QuizPhase::Active(quiz) => match key.code {
            KeyCode::Esc => {
                state.quiz.phase = QuizPhase::Setup;
                vec![]
            }
            KeyCode::Up => {
                quiz.selected = quiz.selected.saturating_sub(1);
                vec![]
            }
            KeyCode::Down => {
                if quiz.selected + 1 < quiz.session.questions.len() {
                    quiz.selected += 1;
                }
                vec![]
            }
            KeyCode::Char(c @ '1'..='9') => {
                let option = (c as u8 - b'1') as usize;
                let options = quiz
                    .session
                    .questions
                    .get(quiz.selected)
                    .map(|q| q.options.len())
                    .unwrap_or(0);
                if option < options {
                    quiz.answers[quiz.selected] = option as i64;
                }
                vec![]
            }
            KeyCode::Enter => {
                if quiz.submitting {
                    return vec![];
                }
                let unanswered = quiz.unanswered_count();
                if unanswered > 0 {
                    state.error_alert(format!(
                        "Please answer all {} remaining questions before submitting.",
                        unanswered
                    ));
                    return vec![];
                }
                quiz.submitting = true;
                vec![Action::SubmitQuiz {
                    session_id: quiz.session.session_id.clone(),
                    answers: quiz.answers.clone(),
                }]
            }
            _ => vec![],
        },
        QuizPhase::Results(_) => match key.code {
            KeyCode::Char('n') => {
                state.quiz.phase = QuizPhase::Setup;
                state.quiz.topic_input.clear();
                state.quiz.difficulty = crate::api::types::Difficulty::Medium;
                vec![]
            }
            KeyCode::Esc => {
                // Results are consumed by this render; leaving discards them.
                state.quiz.phase = QuizPhase::Setup;
                state.quiz.topic_input.clear();
                state.route = Route::Dashboard;
                vec![]
            }
            _ => vec![],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::*;
    use crate::config::AppConfig;

    fn test_state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn answered_doubt(id: DoubtId) -> Doubt {
        Doubt {
            id,
            topic: "Maths".into(),
            question: "What is a derivative?".into(),
            question_image: None,
            status: DoubtStatus::Answered,
            answer: Some("The rate of change.".into()),
            answer_image: None,
            answered_at: Some("2024-05-01T10:00:00".into()),
            rating: None,
            upvoted: false,
            downvoted: false,
            student_comment: None,
            teacher_reply: None,
            final_upvoted: false,
            final_rating: None,
            created_at: "2024-04-30T09:00:00".into(),
        }
    }

    fn with_answered_doubt() -> AppState {
        let mut state = test_state();
        state.doubts.doubts = Some(vec![answered_doubt(1)]);
        state.doubts.focus = PaneFocus::List;
        state.active_tab = Tab::Doubts;
        state
    }

    fn quiz_session(n: usize) -> QuizSession {
        QuizSession {
            session_id: "quiz_1".into(),
            difficulty: Difficulty::Medium,
            questions: (0..n)
                .map(|i| QuizQuestion {
                    question: format!("Question {}", i),
                    options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    correct_answer: 0,
                    explanation: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_double_upvote_sends_one_request() {
        let mut state = with_answered_doubt();

        let first = handle_event(&mut state, key(KeyCode::Char('u')));
        assert_eq!(first.len(), 1);
        assert!(matches!(
            first[0],
            Action::RateAnswer { upvoted: true, rating: 5, .. }
        ));

        // Second press while the request is pending is suppressed.
        let second = handle_event(&mut state, key(KeyCode::Char('u')));
        assert!(second.is_empty());
    }

    #[test]
    fn test_upvote_guard_released_after_response() {
        let mut state = with_answered_doubt();
        let _ = handle_event(&mut state, key(KeyCode::Char('u')));

        let actions = handle_event(
            &mut state,
            AppEvent::AnswerRated {
                upvoted: true,
                result: Ok(()),
            },
        );
        // Acknowledged mutations re-fetch instead of patching local state.
        assert!(matches!(actions[0], Action::LoadDoubts));
        assert!(!state.doubts.rate_request.is_in_flight());
    }

    #[test]
    fn test_empty_comment_rejected_locally() {
        let mut state = with_answered_doubt();
        let _ = handle_event(&mut state, key(KeyCode::Char('d')));
        assert!(state.doubts.feedback_form.is_some());

        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert!(actions.is_empty());
        assert!(state.alerts[0].text.contains("comment"));
        assert!(!state.doubts.rate_request.is_in_flight());
    }

    #[test]
    fn test_downvote_with_comment_submits() {
        let mut state = with_answered_doubt();
        let _ = handle_event(&mut state, key(KeyCode::Char('d')));
        for c in "too short".chars() {
            let _ = handle_event(&mut state, key(KeyCode::Char(c)));
        }

        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            &actions[0],
            Action::RateAnswer { upvoted: false, rating: 3, comment, .. } if comment == "too short"
        ));
    }

    #[test]
    fn test_final_rating_double_submit_suppressed() {
        let mut state = with_answered_doubt();
        {
            let doubts = state.doubts.doubts.as_mut().unwrap();
            doubts[0].downvoted = true;
            doubts[0].student_comment = Some("unclear".into());
            doubts[0].teacher_reply = Some("see the worked example".into());
        }

        let _ = handle_event(&mut state, key(KeyCode::Char('f')));
        assert!(state.doubts.feedback_form.is_some());

        let first = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(first.len(), 1);
        assert!(matches!(
            first[0],
            Action::SubmitFinalRating { rating: 1, upvoted: false, .. }
        ));

        // Re-open the form; the in-flight guard still blocks a second send.
        state.doubts.feedback_form = Some(FeedbackForm::Final {
            doubt_id: 1,
            rating: 5,
        });
        let second = handle_event(&mut state, key(KeyCode::Enter));
        assert!(second.is_empty());
    }

    #[test]
    fn test_quiz_submit_rejected_with_unanswered_count() {
        let mut state = test_state();
        state.route = Route::Screen(Screen::Quiz);
        let mut quiz = ActiveQuiz::new(quiz_session(3));
        quiz.answers = vec![0, UNANSWERED, UNANSWERED];
        state.quiz.phase = QuizPhase::Active(quiz);

        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert!(actions.is_empty());
        assert!(state.alerts[0].text.contains('2'));
    }

    #[test]
    fn test_quiz_submit_with_all_answers() {
        let mut state = test_state();
        state.route = Route::Screen(Screen::Quiz);
        let mut quiz = ActiveQuiz::new(quiz_session(2));
        quiz.answers = vec![1, 3];
        state.quiz.phase = QuizPhase::Active(quiz);

        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(actions.len(), 1);
        match &actions[0] {
            Action::SubmitQuiz {
                session_id,
                answers,
            } => {
                assert_eq!(session_id, "quiz_1");
                assert_eq!(answers, &[1, 3]);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_quiz_score_with_points_shows_notification() {
        let mut state = test_state();
        state.quiz.phase = QuizPhase::Loading;

        let outcome = QuizOutcome {
            results: vec![],
            score: 3,
            total_questions: 5,
            percentage: 60.0,
            points_earned: 30,
            difficulty: "medium".into(),
        };
        let actions = handle_event(&mut state, AppEvent::QuizScored(Ok(outcome)));

        let note = state.points_note.as_ref().expect("points note");
        assert_eq!(note.amount, 30);
        assert!(matches!(actions[0], Action::LoadProfile));
    }

    #[test]
    fn test_server_error_text_reaches_alert() {
        let mut state = test_state();
        let _ = handle_event(
            &mut state,
            AppEvent::Topics(Err(ApiError::Api("X".into()))),
        );
        assert!(state.alerts[0].text.contains('X'));
    }

    #[test]
    fn test_unauthorized_switches_to_signed_out() {
        let mut state = test_state();
        let _ = handle_event(&mut state, AppEvent::Doubts(Err(ApiError::Unauthorized)));
        assert_eq!(state.route, Route::SignedOut);
        assert!(state.alerts.is_empty());
    }

    #[test]
    fn test_navigation_table_routes_screen_tabs() {
        let mut state = test_state();

        let actions = activate_tab(&mut state, Tab::Assistant);
        assert!(actions.is_empty());
        assert_eq!(state.route, Route::Screen(Screen::Assistant));

        let actions = activate_tab(&mut state, Tab::Doubts);
        assert!(matches!(actions[0], Action::LoadDoubts));
        assert_eq!(state.route, Route::Dashboard);
        assert_eq!(state.active_tab, Tab::Doubts);
    }
}
