use std::time::{Duration, Instant};

use crate::api::types::*;
use crate::config::AppConfig;

pub const ALERT_TTL: Duration = Duration::from_secs(5);
pub const POINTS_NOTE_TTL: Duration = Duration::from_secs(3);

/// Sentinel for a quiz question with no option selected yet.
pub const UNANSWERED: i64 = -1;

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Topics,
    Doubts,
    Assistant,
    Flashcards,
    Quiz,
    Points,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Topics,
        Tab::Doubts,
        Tab::Assistant,
        Tab::Flashcards,
        Tab::Quiz,
        Tab::Points,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Topics => "Learnings",
            Tab::Doubts => "Doubts",
            Tab::Assistant => "Assistant",
            Tab::Flashcards => "Flashcards",
            Tab::Quiz => "QnA Quiz",
            Tab::Points => "Points",
        }
    }
}

/// Full-screen views that take over from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Assistant,
    Quiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Pane(Tab),
    Screen(Screen),
}

/// Navigation table: which tabs render inline on the dashboard and which
/// open a dedicated full-screen view.
pub fn nav_target(tab: Tab) -> NavTarget {
    match tab {
        Tab::Assistant => NavTarget::Screen(Screen::Assistant),
        Tab::Quiz => NavTarget::Screen(Screen::Quiz),
        other => NavTarget::Pane(other),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Screen(Screen),
    /// The session is gone; the TUI equivalent of the login redirect.
    SignedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Transient, auto-expiring user-facing message.
#[derive(Debug)]
pub struct Alert {
    pub text: String,
    pub kind: AlertKind,
    pub raised_at: Instant,
}

#[derive(Debug)]
pub struct PointsNote {
    pub amount: i64,
    pub raised_at: Instant,
}

/// Explicit request state for an action that must not be double-submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
}

impl RequestState {
    pub fn is_in_flight(self) -> bool {
        self == RequestState::InFlight
    }

    pub fn begin(&mut self) {
        *self = RequestState::InFlight;
    }

    pub fn finish(&mut self) {
        *self = RequestState::Idle;
    }
}

/// Single-line text editor backing every form field.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    /// Take the current text, pushing it onto the recall history.
    pub fn take_text(&mut self) -> String {
        let text = self.text.clone();
        self.clear();
        if !text.is_empty() {
            self.history.push(text.clone());
        }
        text
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }
}

/// Which half of a dashboard pane owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneFocus {
    Form,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicsField {
    Topic,
    Description,
}

#[derive(Debug)]
pub struct TopicsView {
    pub topics: Option<Vec<LearningTopic>>,
    pub loading: bool,
    pub field: TopicsField,
    pub topic_input: InputState,
    pub description_input: InputState,
    pub scroll: usize,
}

impl TopicsView {
    fn new() -> Self {
        Self {
            topics: None,
            loading: false,
            field: TopicsField::Topic,
            topic_input: InputState::new(),
            description_input: InputState::new(),
            scroll: 0,
        }
    }

    pub fn active_input(&mut self) -> &mut InputState {
        match self.field {
            TopicsField::Topic => &mut self.topic_input,
            TopicsField::Description => &mut self.description_input,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubtField {
    Topic,
    Question,
    Attachment,
}

/// The one feedback form open at a time, anchored to a doubt by id so a
/// refreshed list cannot re-target it.
#[derive(Debug)]
pub enum FeedbackForm {
    Comment {
        doubt_id: DoubtId,
        rating: u8,
        comment: InputState,
    },
    Final {
        doubt_id: DoubtId,
        rating: u8,
    },
}

#[derive(Debug)]
pub struct DoubtsView {
    pub doubts: Option<Vec<Doubt>>,
    pub loading: bool,
    pub focus: PaneFocus,
    pub field: DoubtField,
    pub topic_input: InputState,
    pub question_input: InputState,
    pub attachment_input: InputState,
    pub selected: usize,
    pub feedback_form: Option<FeedbackForm>,
    /// In-flight guards for the two feedback submissions (upvote/rate-answer
    /// and final rating); a duplicate press while one is pending is dropped.
    pub rate_request: RequestState,
    pub final_request: RequestState,
}

impl DoubtsView {
    fn new() -> Self {
        Self {
            doubts: None,
            loading: false,
            focus: PaneFocus::Form,
            field: DoubtField::Topic,
            topic_input: InputState::new(),
            question_input: InputState::new(),
            attachment_input: InputState::new(),
            selected: 0,
            feedback_form: None,
            rate_request: RequestState::Idle,
            final_request: RequestState::Idle,
        }
    }

    pub fn active_input(&mut self) -> &mut InputState {
        match self.field {
            DoubtField::Topic => &mut self.topic_input,
            DoubtField::Question => &mut self.question_input,
            DoubtField::Attachment => &mut self.attachment_input,
        }
    }

    pub fn selected_doubt(&self) -> Option<&Doubt> {
        self.doubts.as_ref().and_then(|d| d.get(self.selected))
    }

    pub fn select_next(&mut self) {
        let len = self.doubts.as_ref().map(Vec::len).unwrap_or(0);
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
            self.feedback_form = None;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.feedback_form = None;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    Student,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug)]
pub struct AssistantView {
    pub messages: Vec<ChatMessage>,
    pub input: InputState,
    pub waiting: bool,
    pub scroll_offset: usize,
}

impl AssistantView {
    fn new() -> Self {
        Self {
            messages: Vec::new(),
            input: InputState::new(),
            waiting: false,
            scroll_offset: 0,
        }
    }
}

#[derive(Debug)]
pub struct FlashcardsView {
    pub topic_input: InputState,
    pub cards: Vec<Flashcard>,
    pub flipped: Vec<bool>,
    pub selected: usize,
    pub loading: bool,
    pub focus: PaneFocus,
}

impl FlashcardsView {
    fn new() -> Self {
        Self {
            topic_input: InputState::new(),
            cards: Vec::new(),
            flipped: Vec::new(),
            selected: 0,
            loading: false,
            focus: PaneFocus::Form,
        }
    }

    pub fn set_cards(&mut self, cards: Vec<Flashcard>) {
        self.flipped = vec![false; cards.len()];
        self.cards = cards;
        self.selected = 0;
    }

    /// Flip the selected card. Pure local UI state; nothing is persisted.
    pub fn flip_selected(&mut self) {
        if let Some(f) = self.flipped.get_mut(self.selected) {
            *f = !*f;
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.flipped.clear();
        self.selected = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizField {
    Topic,
    Difficulty,
}

#[derive(Debug)]
pub struct ActiveQuiz {
    pub session: QuizSession,
    /// One entry per question; [`UNANSWERED`] until an option is picked.
    pub answers: Vec<i64>,
    pub selected: usize,
    pub submitting: bool,
}

impl ActiveQuiz {
    pub fn new(session: QuizSession) -> Self {
        let answers = vec![UNANSWERED; session.questions.len()];
        Self {
            session,
            answers,
            selected: 0,
            submitting: false,
        }
    }

    pub fn unanswered_count(&self) -> usize {
        self.answers.iter().filter(|a| **a == UNANSWERED).count()
    }
}

#[derive(Debug)]
pub enum QuizPhase {
    Setup,
    Loading,
    Active(ActiveQuiz),
    Results(QuizOutcome),
}

#[derive(Debug)]
pub struct QuizView {
    pub phase: QuizPhase,
    pub topic_input: InputState,
    pub difficulty: Difficulty,
    pub field: QuizField,
}

impl QuizView {
    fn new() -> Self {
        Self {
            phase: QuizPhase::Setup,
            topic_input: InputState::new(),
            difficulty: Difficulty::Medium,
            field: QuizField::Topic,
        }
    }
}

#[derive(Debug)]
pub struct PointsView {
    pub transactions: Option<Vec<PointsTransaction>>,
    pub loading: bool,
    pub scroll: usize,
}

impl PointsView {
    fn new() -> Self {
        Self {
            transactions: None,
            loading: false,
            scroll: 0,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub route: Route,
    pub active_tab: Tab,
    pub user: Option<UserProfile>,
    pub alerts: Vec<Alert>,
    pub points_note: Option<PointsNote>,
    pub topics: TopicsView,
    pub doubts: DoubtsView,
    pub assistant: AssistantView,
    pub flashcards: FlashcardsView,
    pub quiz: QuizView,
    pub points: PointsView,
    /// Chat lines not yet written to the transcript log; drained by the main
    /// loop after each event.
    pub new_chat_messages: Vec<ChatMessage>,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            route: Route::Dashboard,
            active_tab: Tab::Topics,
            user: None,
            alerts: Vec::new(),
            points_note: None,
            topics: TopicsView::new(),
            doubts: DoubtsView::new(),
            assistant: AssistantView::new(),
            flashcards: FlashcardsView::new(),
            quiz: QuizView::new(),
            points: PointsView::new(),
            new_chat_messages: Vec::new(),
            should_quit: false,
            dirty: true,
            tick_count: 0,
            timestamp_format,
        }
    }

    pub fn success_alert(&mut self, text: impl Into<String>) {
        self.push_alert(text.into(), AlertKind::Success);
    }

    pub fn error_alert(&mut self, text: impl Into<String>) {
        self.push_alert(text.into(), AlertKind::Error);
    }

    fn push_alert(&mut self, text: String, kind: AlertKind) {
        self.alerts.push(Alert {
            text,
            kind,
            raised_at: Instant::now(),
        });
        self.dirty = true;
    }

    pub fn show_points_note(&mut self, amount: i64) {
        self.points_note = Some(PointsNote {
            amount,
            raised_at: Instant::now(),
        });
        self.dirty = true;
    }

    /// Drop expired alerts and the points notification. Returns true if
    /// anything changed.
    pub fn prune_expired(&mut self, now: Instant) -> bool {
        let before = self.alerts.len();
        self.alerts
            .retain(|a| now.duration_since(a.raised_at) < ALERT_TTL);
        let mut changed = self.alerts.len() != before;

        if let Some(note) = &self.points_note {
            if now.duration_since(note.raised_at) >= POINTS_NOTE_TTL {
                self.points_note = None;
                changed = true;
            }
        }
        changed
    }

    /// Append a chat line, capping scrollback, and queue it for the
    /// transcript log.
    pub fn push_chat(&mut self, sender: ChatSender, text: String) {
        let msg = ChatMessage {
            sender,
            text,
            timestamp: chrono::Local::now()
                .format(&self.timestamp_format)
                .to_string(),
        };
        self.assistant.messages.push(msg.clone());
        let max = self.config.ui.max_chat_scrollback;
        if self.assistant.messages.len() > max {
            let excess = self.assistant.messages.len() - max;
            self.assistant.messages.drain(..excess);
        }
        self.new_chat_messages.push(msg);
        self.dirty = true;
    }

    /// True while anything on screen animates (spinners, countdowns), so the
    /// tick handler knows to redraw.
    pub fn has_animation(&self) -> bool {
        self.topics.loading
            || self.doubts.loading
            || self.points.loading
            || self.flashcards.loading
            || self.assistant.waiting
            || matches!(self.quiz.phase, QuizPhase::Loading)
            || !self.alerts.is_empty()
            || self.points_note.is_some()
            || self.doubts.rate_request.is_in_flight()
            || self.doubts.final_request.is_in_flight()
    }
}
