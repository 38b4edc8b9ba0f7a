use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use dialoguer::Input;
use gather_core::event::Event;
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::config::GlobalConfig;
use crate::session::Session;

pub async fn run(
    session: &Session,
    title: Option<String>,
    date: Option<String>,
    time: Option<String>,
    location: Option<String>,
    description: Option<String>,
) -> Result<()> {
    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Date ---
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => prompt_with_retry("  Date (YYYY-MM-DD)", parse_date)?,
    };

    // --- Time ---
    let time = match time {
        Some(t) => parse_time(&t)?,
        None => prompt_with_retry("  Time (HH:MM)", parse_time)?,
    };

    // --- Location ---
    let location = match location {
        Some(l) => l,
        None => Input::<String>::new()
            .with_prompt("  Where?")
            .interact_text()?,
    };

    // --- Description ---
    let description = match description {
        Some(d) => d,
        None => Input::<String>::new()
            .with_prompt("  Description (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
    };

    let event = Event {
        id: None,
        title,
        description,
        date,
        time,
        location,
        organizer_id: session.user.id,
        created_at: None,
    };

    let config = GlobalConfig::load()?;
    let client = ApiClient::new(&config.server_url, &session.token);
    let created = client.create_event(&event).await?;

    let id_tag = created.id.map(|id| format!(" (#{id})")).unwrap_or_default();
    println!(
        "{}",
        format!("  Created: {}{}", created.title, id_tag).green()
    );

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<F>(prompt: &str, parse: F) -> Result<String>
where
    F: Fn(&str) -> Result<String>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Validate a calendar date, keeping the string form the API expects.
fn parse_date(input: &str) -> Result<String> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|_| input.to_string())
        .map_err(|_| anyhow::anyhow!("Could not parse date \"{input}\". Expected YYYY-MM-DD"))
}

/// Validate a wall-clock time, keeping the string form the API expects.
fn parse_time(input: &str) -> Result<String> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M")
        .map(|_| input.to_string())
        .map_err(|_| anyhow::anyhow!("Could not parse time \"{input}\". Expected HH:MM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_iso_dates_only() {
        assert_eq!(parse_date("2026-08-12").unwrap(), "2026-08-12");
        assert_eq!(parse_date(" 2026-08-12 ").unwrap(), "2026-08-12");
        assert!(parse_date("12/08/2026").is_err());
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    fn test_parse_time_accepts_24_hour_clock_only() {
        assert_eq!(parse_time("18:30").unwrap(), "18:30");
        assert!(parse_time("6:30pm").is_err());
        assert!(parse_time("25:00").is_err());
    }
}
