//! Bridges actions to API requests.
//!
//! Each dispatched action spawns one tokio task that performs the request and
//! posts exactly one [`AppEvent`] with the outcome back to the main loop.
//! Requests are fire-and-forget: no cancellation, no timeout, no retry.

use tokio::sync::mpsc;
use tracing::debug;

use crate::api::types::{FinalRatingRequest, NewTopicRequest, RateAnswerRequest};
use crate::api::ApiClient;
use crate::app::action::Action;
use crate::app::event::AppEvent;

pub struct ApiManager {
    client: ApiClient,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl ApiManager {
    pub fn new(client: ApiClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { client, event_tx }
    }

    pub fn dispatch(&self, action: Action) {
        debug!(?action, "dispatching");
        let client = self.client.clone();
        let tx = self.event_tx.clone();

        match action {
            Action::LoadProfile => {
                tokio::spawn(async move {
                    let _ = tx.send(AppEvent::Profile(client.profile().await));
                });
            }
            Action::Logout => {
                tokio::spawn(async move {
                    let _ = tx.send(AppEvent::LoggedOut(client.logout().await));
                });
            }
            Action::LoadTopics => {
                tokio::spawn(async move {
                    let _ = tx.send(AppEvent::Topics(client.learning_topics().await));
                });
            }
            Action::AddTopic { topic, description } => {
                tokio::spawn(async move {
                    let request = NewTopicRequest { topic, description };
                    let _ = tx.send(AppEvent::TopicAdded(
                        client.add_learning_topic(&request).await,
                    ));
                });
            }
            Action::LoadDoubts => {
                tokio::spawn(async move {
                    let _ = tx.send(AppEvent::Doubts(client.doubts().await));
                });
            }
            Action::SubmitDoubt {
                topic,
                question,
                attachment,
            } => {
                tokio::spawn(async move {
                    let _ = tx.send(AppEvent::DoubtSubmitted(
                        client.submit_doubt(topic, question, attachment).await,
                    ));
                });
            }
            Action::SendChat { message } => {
                tokio::spawn(async move {
                    let _ = tx.send(AppEvent::ChatReply(client.chat(message).await));
                });
            }
            Action::GenerateFlashcards { topic } => {
                tokio::spawn(async move {
                    let _ = tx.send(AppEvent::Flashcards(client.generate_flashcards(topic).await));
                });
            }
            Action::StartQuiz { topic, difficulty } => {
                tokio::spawn(async move {
                    let _ = tx.send(AppEvent::QuizStarted(
                        client.start_quiz(topic, difficulty).await,
                    ));
                });
            }
            Action::SubmitQuiz {
                session_id,
                answers,
            } => {
                tokio::spawn(async move {
                    let _ = tx.send(AppEvent::QuizScored(
                        client.submit_quiz(session_id, &answers).await,
                    ));
                });
            }
            Action::LoadPointsHistory => {
                tokio::spawn(async move {
                    let _ = tx.send(AppEvent::PointsHistory(client.points_transactions().await));
                });
            }
            Action::RateAnswer {
                doubt_id,
                rating,
                upvoted,
                comment,
            } => {
                tokio::spawn(async move {
                    let request = RateAnswerRequest {
                        doubt_id,
                        rating,
                        upvoted,
                        comment,
                    };
                    let result = client.rate_answer(&request).await;
                    let _ = tx.send(AppEvent::AnswerRated { upvoted, result });
                });
            }
            Action::SubmitFinalRating {
                doubt_id,
                rating,
                upvoted,
            } => {
                tokio::spawn(async move {
                    let request = FinalRatingRequest {
                        doubt_id,
                        final_rating: rating,
                        final_upvoted: upvoted,
                    };
                    let result = client.final_rating(&request).await;
                    let _ = tx.send(AppEvent::FinalRatingSaved { rating, result });
                });
            }
            // Handled by the main loop, never dispatched here.
            Action::Quit => {}
        }
    }
}
