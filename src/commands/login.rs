use anyhow::Result;
use dialoguer::Input;
use gather_core::auth::{AuthFlow, GateDecision};
use owo_colors::OwoColorize;

use crate::client::{ApiClient, LoginRequest};
use crate::config::GlobalConfig;
use crate::session::{Session, SessionStore};

pub async fn run() -> Result<()> {
    let store = SessionStore::open()?;
    let existing = store.load();

    let mut flow = AuthFlow::new();
    flow.resolve_startup(existing.is_some())?;

    // Entry guard: an authenticated user has no business on the login
    // screen; send them back to the main area.
    if flow.entry_gate() == GateDecision::Redirect {
        let name = existing.map(|s| s.user.name).unwrap_or_default();
        println!("Already logged in as {name}.");
        println!("Run `gather logout` first to switch accounts.");
        return Ok(());
    }

    let email: String = Input::new().with_prompt("  Email").interact_text()?;
    let password = rpassword::prompt_password("  Password: ")?;

    let config = GlobalConfig::load()?;
    let client = ApiClient::anonymous(&config.server_url);
    let auth = client.login(&LoginRequest { email, password }).await?;

    store.save(&Session {
        token: auth.token,
        user: auth.user.clone(),
    })?;
    flow.login()?;

    println!("{}", format!("Logged in as {}.", auth.user.name).green());

    Ok(())
}
