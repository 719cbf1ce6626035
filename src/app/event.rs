use crossterm::event::Event as CrosstermEvent;

use crate::api::types::{
    Doubt, Flashcard, LearningTopic, PointsTransaction, QuizOutcome, QuizSession, UserProfile,
};
use crate::api::ApiError;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Completion of a spawned API request. Exactly one of these arrives per
    /// dispatched action; there is no progress or cancellation signal.
    Profile(Result<UserProfile, ApiError>),
    LoggedOut(Result<(), ApiError>),
    Topics(Result<Vec<LearningTopic>, ApiError>),
    TopicAdded(Result<(), ApiError>),
    Doubts(Result<Vec<Doubt>, ApiError>),
    DoubtSubmitted(Result<(), ApiError>),
    ChatReply(Result<String, ApiError>),
    Flashcards(Result<Vec<Flashcard>, ApiError>),
    QuizStarted(Result<QuizSession, ApiError>),
    QuizScored(Result<QuizOutcome, ApiError>),
    PointsHistory(Result<Vec<PointsTransaction>, ApiError>),

    /// Feedback submissions carry back what was submitted so the handler can
    /// word the confirmation and release the right in-flight guard.
    AnswerRated {
        upvoted: bool,
        result: Result<(), ApiError>,
    },
    FinalRatingSaved {
        rating: u8,
        result: Result<(), ApiError>,
    },

    /// Tick for UI refresh (alert expiry, spinners)
    Tick,
}
