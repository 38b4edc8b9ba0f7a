use anyhow::Result;
use chrono::Local;
use gather_core::comment::{self, CommentPrompt};
use gather_core::detail::{EventDetail, EventView};
use owo_colors::OwoColorize;

use super::fetch_detail;
use crate::client::ApiClient;
use crate::config::GlobalConfig;
use crate::render::Render;
use crate::session::Session;

pub async fn run(session: &Session, id: i64) -> Result<()> {
    let config = GlobalConfig::load()?;
    let client = ApiClient::new(&config.server_url, &session.token);

    let (detail, participants) = fetch_detail(&client, id, session.user.id).await?;
    let view = detail.view(Local::now().naive_local());

    println!("{}", detail.event().render());
    println!();
    println!("  {} participant(s)", participants.len());
    println!();

    match view {
        EventView::Organizer => {
            println!("You organize this event.");
            println!("Edit it with `gather edit {id}`, or remove it with `gather delete {id}`.");
        }
        EventView::UpcomingOpen => {
            println!("This event is open for joining.");
            println!("{}", format!("Join it with `gather join {id}`.").green());
        }
        EventView::UpcomingJoined => {
            println!("{}", "You are signed up for this event!".green());
            println!("Changed your mind? Cancel with `gather cancel {id}`.");
        }
        EventView::PassedUnattended => {
            println!("This event has passed.");
            println!("Were you there? Mark your attendance with `gather attend {id}`.");
        }
        EventView::PassedAttended => {
            show_comments(&client, id, &detail, session.user.id).await?;
        }
    }

    Ok(())
}

async fn show_comments(
    client: &ApiClient,
    event_id: i64,
    detail: &EventDetail,
    user_id: i64,
) -> Result<()> {
    let comments = client.list_comments(event_id).await?;

    match comment::gate(detail.attended(), &comments, user_id) {
        CommentPrompt::Compose => {
            println!("You attended this event.");
            println!(
                "{}",
                format!("Rate it with `gather comment {event_id}`.").green()
            );
        }
        CommentPrompt::AlreadyCommented => {
            println!("You already left your comment for this event.");
        }
        CommentPrompt::AttendanceRequired => {
            // Not reachable from the attended view, but the gate owns the
            // priority rule, so honor whatever it says.
            println!("Mark your attendance to comment on this event.");
        }
    }

    println!();
    if comments.is_empty() {
        println!("{}", "No comments yet".dimmed());
        return Ok(());
    }

    println!("{}", "Comments".bold());
    for c in &comments {
        println!("{}", c.render());
    }

    Ok(())
}
