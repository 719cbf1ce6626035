//! Thin typed client over the platform REST API.
//!
//! One method per endpoint, each returning the domain payload or an
//! [`ApiError`]. Requests carry the session cookie from configuration and are
//! never retried; there is deliberately no request timeout, matching the
//! backend contract (a hung request simply leaves its view loading).

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::api::types::*;
use crate::api::upload::Attachment;
use crate::api::ApiError;
use crate::config::ServerConfig;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ServerConfig) -> Self {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.session_cookie {
            if let Ok(value) = HeaderValue::from_str(&format!("session={}", cookie)) {
                headers.insert(COOKIE, value);
            }
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a built request and apply the shared status policy: 401 means the
    /// session is gone, any other non-2xx is an HTTP failure.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            debug!(status = status.as_u16(), "request failed");
            return Err(ApiError::Http(status.as_u16()));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = self.send(self.http.get(self.url(path))).await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        let resp: ProfileResponse = self.get_json("/api/user/profile").await?;
        check(resp.success, resp.error)?;
        require(resp.user, "user")
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let resp: AckResponse = self.get_json("/api/logout").await?;
        check(resp.success, resp.error)
    }

    pub async fn learning_topics(&self) -> Result<Vec<LearningTopic>, ApiError> {
        let resp: TopicsResponse = self.get_json("/api/learning-topics").await?;
        check(resp.success, resp.error)?;
        require(resp.topics, "topics")
    }

    pub async fn add_learning_topic(&self, request: &NewTopicRequest) -> Result<(), ApiError> {
        let resp: AckResponse = self.post_json("/api/learning-topics", request).await?;
        check(resp.success, resp.error)
    }

    pub async fn doubts(&self) -> Result<Vec<Doubt>, ApiError> {
        let resp: DoubtsResponse = self.get_json("/api/doubts").await?;
        check(resp.success, resp.error)?;
        require(resp.doubts, "doubts")
    }

    /// Submit a doubt as multipart form data, with the optional attachment as
    /// a file part. The attachment has already passed
    /// [`validate_attachment`](crate::api::upload::validate_attachment).
    pub async fn submit_doubt(
        &self,
        topic: String,
        question: String,
        attachment: Option<Attachment>,
    ) -> Result<(), ApiError> {
        let mut form = reqwest::multipart::Form::new()
            .text("topic", topic)
            .text("question", question);

        if let Some(att) = attachment {
            let bytes = tokio::fs::read(&att.path)
                .await
                .map_err(|e| ApiError::Io(format!("failed to read {}: {}", att.path.display(), e)))?;
            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name(att.file_name)
                .mime_str(att.mime)
                .map_err(|e| ApiError::Io(e.to_string()))?;
            form = form.part("question_image", part);
        }

        debug!("POST /api/doubts (multipart)");
        let response = self
            .send(self.http.post(self.url("/api/doubts")).multipart(form))
            .await?;
        let resp: AckResponse = Self::decode(response).await?;
        check(resp.success, resp.error)
    }

    pub async fn chat(&self, message: String) -> Result<String, ApiError> {
        let resp: ChatResponse = self
            .post_json("/api/doubtbot/chat", &ChatRequest { message })
            .await?;
        check(resp.success, resp.error)?;
        require(resp.response, "response")
    }

    pub async fn generate_flashcards(&self, topic: String) -> Result<Vec<Flashcard>, ApiError> {
        let resp: FlashcardsResponse = self
            .post_json("/api/flashcards/generate", &FlashcardsRequest { topic })
            .await?;
        check(resp.success, resp.error)?;
        require(resp.flashcards, "flashcards")
    }

    pub async fn start_quiz(
        &self,
        topic: String,
        difficulty: Difficulty,
    ) -> Result<QuizSession, ApiError> {
        let resp: QuizStartResponse = self
            .post_json("/api/qna/start", &QuizStartRequest { topic, difficulty })
            .await?;
        check(resp.success, resp.error)?;
        Ok(QuizSession {
            session_id: require(resp.session_id, "session_id")?,
            difficulty: resp.difficulty.unwrap_or(difficulty),
            questions: require(resp.questions, "questions")?,
        })
    }

    pub async fn submit_quiz(
        &self,
        session_id: String,
        answers: &[i64],
    ) -> Result<QuizOutcome, ApiError> {
        let request = QuizSubmitRequest::new(session_id, answers);
        let resp: QuizSubmitResponse = self.post_json("/api/qna/submit", &request).await?;
        check(resp.success, resp.error)?;
        Ok(QuizOutcome {
            results: require(resp.results, "results")?,
            score: require(resp.score, "score")?,
            total_questions: require(resp.total_questions, "total_questions")?,
            percentage: resp.percentage.unwrap_or(0.0),
            points_earned: resp.points_earned.unwrap_or(0),
            difficulty: resp.difficulty.unwrap_or_else(|| "medium".to_string()),
        })
    }

    pub async fn points_transactions(&self) -> Result<Vec<PointsTransaction>, ApiError> {
        let resp: TransactionsResponse = self.get_json("/api/points/transactions").await?;
        check(resp.success, resp.error)?;
        require(resp.transactions, "transactions")
    }

    pub async fn rate_answer(&self, request: &RateAnswerRequest) -> Result<(), ApiError> {
        let resp: AckResponse = self.post_json("/api/student/rate-answer", request).await?;
        check(resp.success, resp.error)
    }

    pub async fn final_rating(&self, request: &FinalRatingRequest) -> Result<(), ApiError> {
        let resp: AckResponse = self.post_json("/api/student/final-rating", request).await?;
        check(resp.success, resp.error)
    }
}
