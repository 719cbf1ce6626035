//! Request and response payloads for the platform REST API.
//!
//! Every endpoint returns an envelope with a `success` flag and an optional
//! `error` string alongside the domain payload. Response structs mirror that
//! shape one-to-one; [`check`] converts a failed envelope into an
//! [`ApiError`](super::ApiError) carrying the server's error text verbatim.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ApiError;

pub type DoubtId = i64;

/// Read-only mirror of the signed-in user's server-side profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub points: i64,
    #[serde(default)]
    pub doubts_asked: i64,
    #[serde(default)]
    pub qna_sessions: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoubtStatus {
    Pending,
    Answered,
}

impl fmt::Display for DoubtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoubtStatus::Pending => write!(f, "pending"),
            DoubtStatus::Answered => write!(f, "answered"),
        }
    }
}

/// A student question and everything the teacher-feedback exchange has
/// attached to it so far. The client never derives any of these fields
/// locally; they always come from a fresh `GET /api/doubts`.
#[derive(Debug, Clone, Deserialize)]
pub struct Doubt {
    pub id: DoubtId,
    pub topic: String,
    pub question: String,
    #[serde(default)]
    pub question_image: Option<String>,
    pub status: DoubtStatus,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub answer_image: Option<String>,
    #[serde(default)]
    pub answered_at: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub upvoted: bool,
    #[serde(default)]
    pub downvoted: bool,
    #[serde(default)]
    pub student_comment: Option<String>,
    #[serde(default)]
    pub teacher_reply: Option<String>,
    #[serde(default)]
    pub final_upvoted: bool,
    #[serde(default)]
    pub final_rating: Option<u8>,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LearningTopic {
    pub id: i64,
    pub topic: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub points_earned: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsTransaction {
    pub reason: String,
    pub amount: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i64,
    #[serde(default)]
    pub explanation: String,
}

/// One started quiz, consumed exactly once by a submit.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub session_id: String,
    pub difficulty: Difficulty,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionResult {
    pub question: String,
    pub options: Vec<String>,
    pub user_answer: i64,
    pub correct_answer: i64,
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub results: Vec<QuestionResult>,
    pub score: i64,
    pub total_questions: i64,
    pub percentage: f64,
    pub points_earned: i64,
    pub difficulty: String,
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct NewTopicRequest {
    pub topic: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct FlashcardsRequest {
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct QuizStartRequest {
    pub topic: String,
    pub difficulty: Difficulty,
}

/// Answers are keyed by question index rendered as a string, matching the
/// server's lookup (`answers["0"]`, `answers["1"]`, ...).
#[derive(Debug, Serialize)]
pub struct QuizSubmitRequest {
    pub session_id: String,
    pub answers: BTreeMap<String, i64>,
}

impl QuizSubmitRequest {
    pub fn new(session_id: String, answers: &[i64]) -> Self {
        let answers = answers
            .iter()
            .enumerate()
            .map(|(i, a)| (i.to_string(), *a))
            .collect();
        Self { session_id, answers }
    }
}

#[derive(Debug, Serialize)]
pub struct RateAnswerRequest {
    pub doubt_id: DoubtId,
    pub rating: u8,
    pub upvoted: bool,
    pub comment: String,
}

#[derive(Debug, Serialize)]
pub struct FinalRatingRequest {
    pub doubt_id: DoubtId,
    pub final_rating: u8,
    pub final_upvoted: bool,
}

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

/// Reject a `success: false` envelope, preserving the server's error string.
pub fn check(success: bool, error: Option<String>) -> Result<(), ApiError> {
    if success {
        Ok(())
    } else {
        Err(ApiError::Api(
            error.unwrap_or_else(|| "Unknown error".to_string()),
        ))
    }
}

/// Extract a payload field that must be present on a successful response.
pub fn require<T>(field: Option<T>, name: &str) -> Result<T, ApiError> {
    field.ok_or_else(|| ApiError::Decode(format!("response missing `{}`", name)))
}

#[derive(Debug, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
pub struct TopicsResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<LearningTopic>>,
}

#[derive(Debug, Deserialize)]
pub struct DoubtsResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub doubts: Option<Vec<Doubt>>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FlashcardsResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub flashcards: Option<Vec<Flashcard>>,
}

#[derive(Debug, Deserialize)]
pub struct QuizStartResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub questions: Option<Vec<QuizQuestion>>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Deserialize)]
pub struct QuizSubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<QuestionResult>>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub total_questions: Option<i64>,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub points_earned: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionsResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub transactions: Option<Vec<PointsTransaction>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_carries_server_error_text() {
        let err = check(false, Some("Topic is required".into())).unwrap_err();
        assert!(err.to_string().contains("Topic is required"));

        let err = check(false, None).unwrap_err();
        assert_eq!(err.to_string(), "Unknown error");

        assert!(check(true, None).is_ok());
    }

    #[test]
    fn test_doubt_deserializes_with_null_feedback_fields() {
        let raw = r#"{
            "id": 7,
            "topic": "Algebra",
            "question": "Why is x squared?",
            "question_image": null,
            "status": "answered",
            "answer": "Because it is multiplied by itself.",
            "answer_image": null,
            "answered_at": "2024-05-01T10:00:00",
            "rating": null,
            "upvoted": false,
            "downvoted": false,
            "student_comment": null,
            "teacher_reply": null,
            "final_rating": null,
            "final_upvoted": false,
            "points_awarded": false,
            "created_at": "2024-04-30T09:00:00"
        }"#;
        let doubt: Doubt = serde_json::from_str(raw).unwrap();
        assert_eq!(doubt.id, 7);
        assert_eq!(doubt.status, DoubtStatus::Answered);
        assert!(!doubt.upvoted);
        assert!(doubt.final_rating.is_none());
    }

    #[test]
    fn test_quiz_submit_request_keys_answers_by_index_string() {
        let req = QuizSubmitRequest::new("quiz_1".into(), &[2, -1, 0]);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["answers"]["0"], 2);
        assert_eq!(json["answers"]["1"], -1);
        assert_eq!(json["answers"]["2"], 0);
    }
}
