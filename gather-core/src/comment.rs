//! Event comments and the gate deciding who may leave one.

use serde::{Deserialize, Serialize};

use crate::error::{GatherError, GatherResult};

/// A rating and comment left on a passed event.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub user_id: i64,
    pub event_id: i64,
    pub comment: String,
    pub rating: u8,
    pub created_at: String,
    /// Author display name, denormalized by the server.
    pub name: String,
}

/// Whether the current user already has a comment in a fetched list.
///
/// The server enforces nothing here, so this is only as correct as the
/// freshness of the list. Callers re-fetch after every submission.
pub fn has_commented(comments: &[Comment], user_id: i64) -> bool {
    comments.iter().any(|c| c.user_id == user_id)
}

/// What the comment section offers the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentPrompt {
    /// Attendance marked and no prior comment: open the composition form.
    Compose,
    /// Attendance not marked yet. Takes priority over `AlreadyCommented`.
    AttendanceRequired,
    /// A comment by this user is already in the fetched list.
    AlreadyCommented,
}

/// Decide the comment affordance from the attendance flag and a freshly
/// fetched comment list.
pub fn gate(attended: bool, comments: &[Comment], user_id: i64) -> CommentPrompt {
    if !attended {
        CommentPrompt::AttendanceRequired
    } else if has_commented(comments, user_id) {
        CommentPrompt::AlreadyCommented
    } else {
        CommentPrompt::Compose
    }
}

/// A locally validated comment submission.
///
/// Construction runs the pre-network checks: an unset rating (0) fails
/// differently from an empty comment, the rating is checked first, and
/// either failure must prevent the request from being sent at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDraft {
    pub rating: u8,
    pub comment: String,
}

impl CommentDraft {
    pub fn new(rating: u8, comment: &str) -> GatherResult<Self> {
        if !(1..=5).contains(&rating) {
            return Err(GatherError::RatingOutOfRange);
        }
        if comment.trim().is_empty() {
            return Err(GatherError::EmptyComment);
        }
        Ok(CommentDraft {
            rating,
            comment: comment.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment_by(user_id: i64) -> Comment {
        Comment {
            id: user_id * 10,
            user_id,
            event_id: 7,
            comment: "Great night".to_string(),
            rating: 5,
            created_at: "2026-03-21T10:00:00".to_string(),
            name: "Someone".to_string(),
        }
    }

    #[test]
    fn test_gate_opens_for_attendee_without_comment() {
        assert_eq!(gate(true, &[comment_by(1)], 2), CommentPrompt::Compose);
    }

    #[test]
    fn test_gate_requires_attendance_first() {
        // Attendance-unmarked wins even when a comment already exists.
        assert_eq!(
            gate(false, &[comment_by(2)], 2),
            CommentPrompt::AttendanceRequired
        );
        assert_eq!(gate(false, &[], 2), CommentPrompt::AttendanceRequired);
    }

    #[test]
    fn test_gate_closes_after_own_comment() {
        assert_eq!(
            gate(true, &[comment_by(1), comment_by(2)], 2),
            CommentPrompt::AlreadyCommented
        );
    }

    #[test]
    fn test_draft_rejects_unset_rating_before_empty_text() {
        assert_eq!(
            CommentDraft::new(0, "   ").unwrap_err(),
            GatherError::RatingOutOfRange
        );
        assert_eq!(
            CommentDraft::new(6, "fine").unwrap_err(),
            GatherError::RatingOutOfRange
        );
    }

    #[test]
    fn test_draft_rejects_whitespace_only_text() {
        assert_eq!(
            CommentDraft::new(4, " \t\n").unwrap_err(),
            GatherError::EmptyComment
        );
    }

    #[test]
    fn test_draft_accepts_valid_submission() {
        let draft = CommentDraft::new(4, "Great venue").unwrap();
        assert_eq!(draft.rating, 4);
        assert_eq!(draft.comment, "Great venue");
    }
}
