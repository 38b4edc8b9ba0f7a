use anyhow::Result;
use chrono::Local;
use gather_core::detail::Action;

use super::fetch_detail;
use crate::client::ApiClient;
use crate::config::GlobalConfig;
use crate::session::Session;

pub async fn run(session: &Session, id: i64) -> Result<()> {
    let config = GlobalConfig::load()?;
    let client = ApiClient::new(&config.server_url, &session.token);

    let (mut detail, _) = fetch_detail(&client, id, session.user.id).await?;

    // Cancellation is only offered while the event is still upcoming; the
    // controller rejects it for passed events.
    detail.begin(Action::Cancel, Local::now().naive_local())?;
    let result = client.cancel_participation(id).await;
    detail.finish(Action::Cancel, result.is_ok());
    result?;

    println!(
        "You canceled your participation in \"{}\".",
        detail.event().title
    );

    Ok(())
}
