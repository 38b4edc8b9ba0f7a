use anyhow::Result;
use dialoguer::Input;
use gather_core::comment::{self, CommentDraft, CommentPrompt};
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::config::GlobalConfig;
use crate::render::Render;
use crate::session::Session;

pub async fn run(
    session: &Session,
    id: i64,
    rating: Option<u8>,
    message: Option<String>,
) -> Result<()> {
    let config = GlobalConfig::load()?;
    let client = ApiClient::new(&config.server_url, &session.token);
    let user_id = session.user.id;

    // The attendance flag and the existing comments decide whether the
    // composition form opens at all.
    let (mine, comments) = tokio::join!(client.my_participation(id), client.list_comments(id));
    let attended = mine?.map(|p| p.attended).unwrap_or(false);
    let comments = comments?;

    match comment::gate(attended, &comments, user_id) {
        CommentPrompt::AttendanceRequired => {
            anyhow::bail!(
                "You must mark your attendance before commenting.\n\n\
                Mark it with:\n  \
                gather attend {id}"
            );
        }
        CommentPrompt::AlreadyCommented => {
            anyhow::bail!("You already left a comment for this event.");
        }
        CommentPrompt::Compose => {}
    }

    let rating = match rating {
        Some(r) => r,
        None => Input::new().with_prompt("  Rating (1-5)").interact_text()?,
    };
    let text = match message {
        Some(m) => m,
        None => Input::new().with_prompt("  Comment").interact_text()?,
    };

    // Local validation: nothing goes on the wire when it fails.
    let draft = CommentDraft::new(rating, &text)?;

    client.post_comment(id, &draft).await?;

    // Re-fetch instead of appending locally, so the next dedup check
    // reflects what the server actually stored.
    let comments = client.list_comments(id).await?;

    println!("{}", "Comment published!".green());
    println!();
    for c in &comments {
        println!("{}", c.render());
    }

    Ok(())
}
