use crate::api::types::{Difficulty, DoubtId};
use crate::api::upload::Attachment;

#[derive(Debug)]
pub enum Action {
    LoadProfile,
    Logout,
    LoadTopics,
    AddTopic { topic: String, description: String },
    LoadDoubts,
    SubmitDoubt { topic: String, question: String, attachment: Option<Attachment> },
    SendChat { message: String },
    GenerateFlashcards { topic: String },
    StartQuiz { topic: String, difficulty: Difficulty },
    SubmitQuiz { session_id: String, answers: Vec<i64> },
    LoadPointsHistory,
    RateAnswer { doubt_id: DoubtId, rating: u8, upvoted: bool, comment: String },
    SubmitFinalRating { doubt_id: DoubtId, rating: u8, upvoted: bool },
    Quit,
}
