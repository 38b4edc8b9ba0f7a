//! Event detail state machine.
//!
//! Given an event record, the current user and the freshly fetched
//! participation data, exactly one of five mutually exclusive views
//! applies. Successful mutations transition the local state immediately,
//! without waiting for a re-fetch; the server remains the source of truth
//! and the next fetch replaces everything here.

use chrono::NaiveDateTime;

use crate::error::{GatherError, GatherResult};
use crate::event::Event;
use crate::participation::{is_participating, Participation};

/// The five mutually exclusive display states of the event detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventView {
    /// Current user organizes this event. No join, attendance or comment
    /// affordances, whatever the timing.
    Organizer,
    /// Event has passed and the user has not marked attendance yet.
    PassedUnattended,
    /// Event has passed and attendance is marked; the comment gate takes
    /// over from here.
    PassedAttended,
    /// Event is upcoming and the user is on the participant list.
    UpcomingJoined,
    /// Event is upcoming and the user is not participating.
    UpcomingOpen,
}

impl EventView {
    pub fn label(&self) -> &'static str {
        match self {
            EventView::Organizer => "organizer",
            EventView::PassedUnattended => "passed (attendance pending)",
            EventView::PassedAttended => "passed (attended)",
            EventView::UpcomingJoined => "upcoming (joined)",
            EventView::UpcomingOpen => "upcoming (open)",
        }
    }
}

/// The one mutating action each non-organizer view may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Join,
    Cancel,
    MarkAttendance,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::Join => "join",
            Action::Cancel => "cancel participation",
            Action::MarkAttendance => "mark attendance",
        }
    }

    /// The only view the action may be started from.
    fn required_view(&self) -> EventView {
        match self {
            Action::Join => EventView::UpcomingOpen,
            Action::Cancel => EventView::UpcomingJoined,
            Action::MarkAttendance => EventView::PassedUnattended,
        }
    }
}

/// Client-side state for one event detail screen.
///
/// Holds the snapshot from the last fetch plus any provisional local
/// transitions. At most one action may be in flight at a time; a failed
/// action leaves the prior state untouched.
#[derive(Debug, Clone)]
pub struct EventDetail {
    event: Event,
    user_id: i64,
    participating: bool,
    attended: bool,
    in_flight: Option<Action>,
}

impl EventDetail {
    /// Build from the event record and the two participation fetches.
    pub fn new(
        event: Event,
        user_id: i64,
        participants: &[Participation],
        my_participation: Option<&Participation>,
    ) -> Self {
        let participating = is_participating(participants, user_id);
        let attended = my_participation.map(|p| p.attended).unwrap_or(false);

        EventDetail {
            event,
            user_id,
            participating,
            attended,
            in_flight: None,
        }
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn attended(&self) -> bool {
        self.attended
    }

    /// Derive the single view that applies at `now`.
    pub fn view(&self, now: NaiveDateTime) -> EventView {
        if self.user_id == self.event.organizer_id {
            return EventView::Organizer;
        }

        if self.event.schedule().is_passed(now) {
            if self.attended {
                EventView::PassedAttended
            } else {
                EventView::PassedUnattended
            }
        } else if self.participating {
            EventView::UpcomingJoined
        } else {
            EventView::UpcomingOpen
        }
    }

    /// Start `action`, refusing while another request is pending or when
    /// the current view does not offer it.
    pub fn begin(&mut self, action: Action, now: NaiveDateTime) -> GatherResult<()> {
        if self.in_flight.is_some() {
            return Err(GatherError::ActionInFlight);
        }

        let view = self.view(now);
        if view != action.required_view() {
            return Err(GatherError::IllegalAction {
                action: action.label(),
                state: view.label(),
            });
        }

        self.in_flight = Some(action);
        Ok(())
    }

    /// Record the outcome of a started action. Success applies the local
    /// transition; failure leaves the prior state exactly as it was. The
    /// in-flight slot is released either way so the user can retry.
    pub fn finish(&mut self, action: Action, succeeded: bool) {
        if self.in_flight != Some(action) {
            return;
        }
        self.in_flight = None;

        if !succeeded {
            return;
        }

        match action {
            Action::Join => self.participating = true,
            Action::Cancel => self.participating = false,
            Action::MarkAttendance => self.attended = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn event(date: &str, time: &str, organizer_id: i64) -> Event {
        Event {
            id: Some(7),
            title: "Neighborhood picnic".to_string(),
            description: "Bring something to share".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            location: "Riverside park".to_string(),
            organizer_id,
            created_at: None,
        }
    }

    fn participant(user_id: i64) -> Participation {
        serde_json::from_str(&format!(r#"{{"user_id":{user_id},"event_id":7}}"#)).unwrap()
    }

    fn attendee(user_id: i64) -> Participation {
        serde_json::from_str(&format!(
            r#"{{"user_id":{user_id},"event_id":7,"attended":1}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_organizer_view_wins_regardless_of_timing() {
        // Passed event, organizer also on the participant list.
        let detail = EventDetail::new(event("2026-08-01", "10:00", 1), 1, &[participant(1)], None);
        assert_eq!(detail.view(now()), EventView::Organizer);

        // Upcoming event.
        let detail = EventDetail::new(event("2026-08-20", "10:00", 1), 1, &[], None);
        assert_eq!(detail.view(now()), EventView::Organizer);
    }

    #[test]
    fn test_passed_splits_on_attendance_flag() {
        let passed = event("2026-08-01", "10:00", 1);

        let detail = EventDetail::new(passed.clone(), 2, &[participant(2)], Some(&participant(2)));
        assert_eq!(detail.view(now()), EventView::PassedUnattended);

        let detail = EventDetail::new(passed, 2, &[participant(2)], Some(&attendee(2)));
        assert_eq!(detail.view(now()), EventView::PassedAttended);
    }

    #[test]
    fn test_upcoming_splits_on_participant_list() {
        let upcoming = event("2026-08-20", "19:00", 1);

        let detail = EventDetail::new(upcoming.clone(), 2, &[participant(3)], None);
        assert_eq!(detail.view(now()), EventView::UpcomingOpen);

        let detail = EventDetail::new(upcoming, 2, &[participant(3), participant(2)], None);
        assert_eq!(detail.view(now()), EventView::UpcomingJoined);
    }

    #[test]
    fn test_event_at_the_exact_instant_is_still_upcoming() {
        let detail = EventDetail::new(event("2026-08-05", "12:00", 1), 2, &[], None);
        assert_eq!(detail.view(now()), EventView::UpcomingOpen);
    }

    #[test]
    fn test_malformed_date_fails_open_to_upcoming() {
        let detail = EventDetail::new(event("not-a-date", "10:00", 1), 2, &[], None);
        assert_eq!(detail.view(now()), EventView::UpcomingOpen);
    }

    #[test]
    fn test_join_transitions_without_refetch() {
        let mut detail = EventDetail::new(event("2026-08-20", "19:00", 1), 2, &[], None);

        detail.begin(Action::Join, now()).unwrap();
        detail.finish(Action::Join, true);
        assert_eq!(detail.view(now()), EventView::UpcomingJoined);
    }

    #[test]
    fn test_cancel_transitions_without_refetch() {
        let mut detail =
            EventDetail::new(event("2026-08-20", "19:00", 1), 2, &[participant(2)], None);

        detail.begin(Action::Cancel, now()).unwrap();
        detail.finish(Action::Cancel, true);
        assert_eq!(detail.view(now()), EventView::UpcomingOpen);
    }

    #[test]
    fn test_mark_attendance_is_one_shot() {
        let mut detail = EventDetail::new(
            event("2026-08-01", "10:00", 1),
            2,
            &[participant(2)],
            Some(&participant(2)),
        );

        detail.begin(Action::MarkAttendance, now()).unwrap();
        detail.finish(Action::MarkAttendance, true);
        assert_eq!(detail.view(now()), EventView::PassedAttended);

        // Once marked, the action is never offered again for this pair.
        assert_eq!(
            detail.begin(Action::MarkAttendance, now()).unwrap_err(),
            GatherError::IllegalAction {
                action: "mark attendance",
                state: "passed (attended)",
            }
        );
    }

    #[test]
    fn test_in_flight_guard_blocks_double_submission() {
        let mut detail = EventDetail::new(event("2026-08-20", "19:00", 1), 2, &[], None);

        detail.begin(Action::Join, now()).unwrap();
        assert_eq!(
            detail.begin(Action::Join, now()).unwrap_err(),
            GatherError::ActionInFlight
        );
    }

    #[test]
    fn test_failed_action_leaves_state_untouched() {
        let mut detail = EventDetail::new(event("2026-08-20", "19:00", 1), 2, &[], None);

        detail.begin(Action::Join, now()).unwrap();
        detail.finish(Action::Join, false);
        assert_eq!(detail.view(now()), EventView::UpcomingOpen);

        // The slot is free again, so the user can retry.
        detail.begin(Action::Join, now()).unwrap();
    }

    #[test]
    fn test_actions_are_rejected_outside_their_view() {
        let mut upcoming = EventDetail::new(event("2026-08-20", "19:00", 1), 2, &[], None);
        assert!(matches!(
            upcoming.begin(Action::MarkAttendance, now()),
            Err(GatherError::IllegalAction { .. })
        ));
        assert!(matches!(
            upcoming.begin(Action::Cancel, now()),
            Err(GatherError::IllegalAction { .. })
        ));

        let mut passed = EventDetail::new(event("2026-08-01", "10:00", 1), 2, &[], None);
        assert!(matches!(
            passed.begin(Action::Join, now()),
            Err(GatherError::IllegalAction { .. })
        ));
    }
}
