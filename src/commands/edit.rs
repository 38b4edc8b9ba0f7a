use anyhow::Result;
use dialoguer::Input;
use gather_core::event::{Event, Schedule};
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::config::GlobalConfig;
use crate::session::Session;
use crate::spinner::create_spinner;

pub async fn run(session: &Session, id: i64) -> Result<()> {
    let config = GlobalConfig::load()?;
    let client = ApiClient::new(&config.server_url, &session.token);

    let spinner = create_spinner("Fetching event".to_string());
    let result = client.get_event(id).await;
    spinner.finish_and_clear();
    let event = result?;

    if event.organizer_id != session.user.id {
        anyhow::bail!("Only the organizer can edit this event.");
    }

    // Prompt every field, pre-filled with the current value.
    let title: String = Input::new()
        .with_prompt("  Title")
        .default(event.title.clone())
        .interact_text()?;

    let date = prompt_schedule_field("  Date (YYYY-MM-DD)", &event.date, |input| {
        Schedule::parse(input, "00:00") != Schedule::Invalid
    })?;

    let time = prompt_schedule_field("  Time (HH:MM)", &event.time, |input| {
        Schedule::parse("2000-01-01", input) != Schedule::Invalid
    })?;

    let location: String = Input::new()
        .with_prompt("  Where?")
        .default(event.location.clone())
        .interact_text()?;

    let description: String = Input::new()
        .with_prompt("  Description")
        .default(event.description.clone())
        .interact_text()?;

    let updated = Event {
        id: event.id,
        title,
        description,
        date,
        time,
        location,
        organizer_id: event.organizer_id,
        created_at: event.created_at,
    };

    client.update_event(id, &updated).await?;

    println!("{}", format!("  Updated: {}", updated.title).green());

    Ok(())
}

/// Prompt with the current value as default, retrying until it validates.
fn prompt_schedule_field(
    prompt: &str,
    current: &str,
    valid: impl Fn(&str) -> bool,
) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(current.to_string())
            .interact_text()?;
        let input = input.trim().to_string();

        if valid(&input) {
            return Ok(input);
        }
        eprintln!("  {}", format!("Could not parse \"{input}\"").red());
    }
}
