use anyhow::Result;
use chrono::Local;
use gather_core::detail::Action;
use owo_colors::OwoColorize;

use super::fetch_detail;
use crate::client::ApiClient;
use crate::config::GlobalConfig;
use crate::session::Session;

pub async fn run(session: &Session, id: i64) -> Result<()> {
    let config = GlobalConfig::load()?;
    let client = ApiClient::new(&config.server_url, &session.token);

    let (mut detail, _) = fetch_detail(&client, id, session.user.id).await?;

    detail.begin(Action::Join, Local::now().naive_local())?;
    let result = client.join_event(id, session.user.id).await;
    detail.finish(Action::Join, result.is_ok());
    result?;

    println!(
        "{}",
        format!("Joined \"{}\"!", detail.event().title).green()
    );

    Ok(())
}
