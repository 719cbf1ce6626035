//! Doubt feedback lifecycle.
//!
//! A doubt moves through feedback stages only on server acknowledgment of a
//! submitted action; the client classifies the stage from the fields of a
//! freshly fetched [`Doubt`] and never mutates it locally:
//!
//! ```text
//! pending -> answered -> upvoted                      (resolved)
//!                     \-> downvoted+comment -> reply -> final rating (resolved)
//! ```

use thiserror::Error;

use crate::api::types::{Doubt, DoubtStatus};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// An upvote is an implicit five-star rating.
pub const UPVOTE_RATING: u8 = 5;

/// A final rating of four or more counts as a second upvote, rewarding the
/// teacher for the follow-up exchange.
pub const FINAL_UPVOTE_THRESHOLD: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStage {
    /// Waiting for a teacher answer.
    AwaitingAnswer,
    /// Answered; upvote or downvote available, exactly once.
    Answered,
    /// Upvoted. Terminal.
    Upvoted,
    /// Downvoted with a comment; waiting for the teacher's reply.
    CommentSubmitted,
    /// Teacher replied; the final rating is available.
    ReplyReceived,
    /// Final rating submitted. Terminal.
    FinalRated,
}

impl FeedbackStage {
    pub fn is_resolved(self) -> bool {
        matches!(self, FeedbackStage::Upvoted | FeedbackStage::FinalRated)
    }
}

/// Classify a doubt by what the server has recorded so far.
pub fn stage(doubt: &Doubt) -> FeedbackStage {
    if doubt.status == DoubtStatus::Pending || doubt.answer.is_none() {
        return FeedbackStage::AwaitingAnswer;
    }
    if doubt.upvoted {
        return FeedbackStage::Upvoted;
    }
    if doubt.downvoted {
        if doubt.final_rating.is_some() {
            FeedbackStage::FinalRated
        } else if doubt.teacher_reply.is_some() {
            FeedbackStage::ReplyReceived
        } else {
            FeedbackStage::CommentSubmitted
        }
    } else {
        FeedbackStage::Answered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Please provide a comment explaining your feedback")]
    EmptyComment,
    #[error("Please enter a valid rating between 1 and 5")]
    RatingOutOfRange,
}

pub fn validate_rating(rating: u8) -> Result<(), FeedbackError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(FeedbackError::RatingOutOfRange)
    }
}

/// A downvote needs both an explanation and an in-range rating; checked
/// before any request is built.
pub fn validate_downvote(comment: &str, rating: u8) -> Result<(), FeedbackError> {
    if comment.trim().is_empty() {
        return Err(FeedbackError::EmptyComment);
    }
    validate_rating(rating)
}

pub fn implies_final_upvote(rating: u8) -> bool {
    rating >= FINAL_UPVOTE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doubt() -> Doubt {
        Doubt {
            id: 1,
            topic: "Physics".into(),
            question: "Why is the sky blue?".into(),
            question_image: None,
            status: DoubtStatus::Pending,
            answer: None,
            answer_image: None,
            answered_at: None,
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

    fn answered() -> Doubt {
        let mut d = doubt();
        d.status = DoubtStatus::Answered;
        d.answer = Some("Rayleigh scattering.".into());
        d.answered_at = Some("2024-05-01T10:00:00".into());
        d
    }

    #[test]
    fn test_stage_pending() {
        assert_eq!(stage(&doubt()), FeedbackStage::AwaitingAnswer);
    }

    #[test]
    fn test_stage_answered_offers_feedback() {
        assert_eq!(stage(&answered()), FeedbackStage::Answered);
    }

    #[test]
    fn test_stage_upvote_is_terminal() {
        let mut d = answered();
        d.upvoted = true;
        d.rating = Some(5);
        let s = stage(&d);
        assert_eq!(s, FeedbackStage::Upvoted);
        assert!(s.is_resolved());
    }

    #[test]
    fn test_stage_downvote_path() {
        let mut d = answered();
        d.downvoted = true;
        d.student_comment = Some("The formula is wrong".into());
        assert_eq!(stage(&d), FeedbackStage::CommentSubmitted);

        d.teacher_reply = Some("Corrected, see the second term".into());
        assert_eq!(stage(&d), FeedbackStage::ReplyReceived);

        d.final_rating = Some(4);
        d.final_upvoted = true;
        let s = stage(&d);
        assert_eq!(s, FeedbackStage::FinalRated);
        assert!(s.is_resolved());
    }

    #[test]
    fn test_validate_downvote_rejects_empty_comment() {
        assert_eq!(
            validate_downvote("", 3),
            Err(FeedbackError::EmptyComment)
        );
        assert_eq!(
            validate_downvote("   ", 3),
            Err(FeedbackError::EmptyComment)
        );
        assert!(validate_downvote("not helpful", 3).is_ok());
    }

    #[test]
    fn test_validate_rating_range() {
        assert_eq!(validate_rating(0), Err(FeedbackError::RatingOutOfRange));
        assert_eq!(validate_rating(6), Err(FeedbackError::RatingOutOfRange));
        for r in MIN_RATING..=MAX_RATING {
            assert!(validate_rating(r).is_ok());
        }
    }

    #[test]
    fn test_final_upvote_threshold() {
        assert!(!implies_final_upvote(3));
        assert!(implies_final_upvote(4));
        assert!(implies_final_upvote(5));
    }
}
