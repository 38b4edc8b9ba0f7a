use anyhow::Result;
use dialoguer::Confirm;
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
        anyhow::bail!("Only the organizer can delete this event.");
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("  Delete \"{}\"?", event.title))
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Nothing deleted".dimmed());
        return Ok(());
    }

    client.delete_event(id).await?;

    println!("Deleted \"{}\".", event.title);

    Ok(())
}
