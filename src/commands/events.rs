use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use gather_core::event::Schedule;
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::config::GlobalConfig;
use crate::session::Session;
use crate::spinner::create_spinner;

pub async fn run(session: &Session) -> Result<()> {
    let config = GlobalConfig::load()?;
    let client = ApiClient::new(&config.server_url, &session.token);

    let spinner = create_spinner("Fetching events".to_string());
    let result = client.list_events().await;
    spinner.finish_and_clear();

    let mut events = result?;

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Sort by schedule; unparsable schedules sink to the end.
    events.sort_by_key(|e| match e.schedule() {
        Schedule::At(instant) => (0, instant),
        Schedule::Invalid => (1, NaiveDateTime::MAX),
    });

    let now = Local::now().naive_local();

    for event in &events {
        let id = event.id.map(|id| format!("#{id}")).unwrap_or_default();
        let when = format!("{} {}", event.date, event.time);

        let mut line = format!("  {:>4}  {}  {}", id, when, event.title);
        if event.organizer_id == session.user.id {
            line = format!("{}  {}", line, "(yours)".cyan());
        }

        if event.schedule().is_passed(now) {
            println!("{}", line.dimmed());
        } else {
            println!("{line}");
        }
    }

    println!();
    println!("{}", "See one with `gather show <id>`".dimmed());

    Ok(())
}
