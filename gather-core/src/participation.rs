//! Participation records linking users to events.

use serde::{Deserialize, Deserializer, Serialize};

/// The stated intent of a participation. The client only ever submits
/// `Yes`; the other answers exist so foreign records still decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    #[default]
    Yes,
    No,
    Maybe,
}

/// A (user, event) pairing with its RSVP status and attendance flag.
///
/// Created when a user joins, deleted when they cancel before the event,
/// and patched in place when attendance is marked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user_id: i64,
    pub event_id: i64,
    #[serde(default)]
    pub rsvp_status: RsvpStatus,
    /// One-way flag, set after the event has passed. The server has
    /// represented this as a boolean, an integer and a numeric string, so
    /// decoding accepts all three.
    #[serde(default, deserialize_with = "attended_flag")]
    pub attended: bool,
}

/// Whether `user_id` appears in a fetched participant list.
pub fn is_participating(participants: &[Participation], user_id: i64) -> bool {
    participants.iter().any(|p| p.user_id == user_id)
}

fn attended_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(n)) => n != 0,
        Some(Flag::Text(s)) => s == "1" || s.eq_ignore_ascii_case("true"),
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attended_decodes_integer_and_bool_and_string() {
        for (body, expected) in [
            (r#"{"user_id":2,"event_id":7,"attended":1}"#, true),
            (r#"{"user_id":2,"event_id":7,"attended":0}"#, false),
            (r#"{"user_id":2,"event_id":7,"attended":true}"#, true),
            (r#"{"user_id":2,"event_id":7,"attended":"1"}"#, true),
            (r#"{"user_id":2,"event_id":7,"attended":null}"#, false),
            (r#"{"user_id":2,"event_id":7}"#, false),
        ] {
            let p: Participation = serde_json::from_str(body).unwrap();
            assert_eq!(p.attended, expected, "body: {body}");
        }
    }

    #[test]
    fn test_rsvp_defaults_to_yes() {
        let p: Participation = serde_json::from_str(r#"{"user_id":2,"event_id":7}"#).unwrap();
        assert_eq!(p.rsvp_status, RsvpStatus::Yes);
    }

    #[test]
    fn test_is_participating_scans_by_user_id() {
        let participants: Vec<Participation> =
            serde_json::from_str(r#"[{"user_id":1,"event_id":7},{"user_id":2,"event_id":7}]"#)
                .unwrap();
        assert!(is_participating(&participants, 2));
        assert!(!is_participating(&participants, 3));
    }
}
