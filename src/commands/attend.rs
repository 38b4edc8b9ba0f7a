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

    detail.begin(Action::MarkAttendance, Local::now().naive_local())?;
    let result = client.mark_attendance(id, session.user.id).await;
    detail.finish(Action::MarkAttendance, result.is_ok());
    result?;

    println!("{}", "Attendance marked!".green());
    println!("You can now rate the event with `gather comment {id}`.");

    Ok(())
}
