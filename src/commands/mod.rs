pub mod attend;
pub mod cancel;
pub mod comment;
pub mod delete;
pub mod edit;
pub mod events;
pub mod join;
pub mod login;
pub mod logout;
pub mod new;
pub mod register;
pub mod show;

use anyhow::Result;
use gather_core::detail::EventDetail;
use gather_core::participation::Participation;

use crate::client::ApiClient;
use crate::spinner::create_spinner;

/// Fetch everything the detail state machine needs for one event.
///
/// The caller has already resolved the user's identity; these fetches are
/// scoped by it. The three requests are independent, so they are joined
/// rather than chained.
pub(crate) async fn fetch_detail(
    client: &ApiClient,
    event_id: i64,
    user_id: i64,
) -> Result<(EventDetail, Vec<Participation>)> {
    let spinner = create_spinner("Fetching event".to_string());
    let (event, participants, mine) = tokio::join!(
        client.get_event(event_id),
        client.list_participants(event_id),
        client.my_participation(event_id),
    );
    spinner.finish_and_clear();

    let participants = participants?;
    let detail = EventDetail::new(event?, user_id, &participants, mine?.as_ref());

    Ok((detail, participants))
}
