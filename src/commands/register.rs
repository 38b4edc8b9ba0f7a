use anyhow::Result;
use dialoguer::Input;
use gather_core::auth::{AuthFlow, GateDecision};
use owo_colors::OwoColorize;

use crate::client::{ApiClient, RegisterRequest};
use crate::config::GlobalConfig;
use crate::session::{Session, SessionStore};

pub async fn run() -> Result<()> {
    let store = SessionStore::open()?;
    let existing = store.load();

    let mut flow = AuthFlow::new();
    flow.resolve_startup(existing.is_some())?;

    // Same entry guard as the login screen.
    if flow.entry_gate() == GateDecision::Redirect {
        let name = existing.map(|s| s.user.name).unwrap_or_default();
        println!("Already logged in as {name}.");
        println!("Run `gather logout` first to create another account.");
        return Ok(());
    }

    let name: String = Input::new().with_prompt("  Name").interact_text()?;
    let email: String = Input::new().with_prompt("  Email").interact_text()?;
    let password = rpassword::prompt_password("  Password: ")?;

    let config = GlobalConfig::load()?;
    let client = ApiClient::anonymous(&config.server_url);
    let auth = client
        .register(&RegisterRequest {
            name,
            email,
            password,
        })
        .await?;

    store.save(&Session {
        token: auth.token,
        user: auth.user.clone(),
    })?;
    flow.login()?;

    println!(
        "{}",
        format!("Welcome, {}! Your account is ready.", auth.user.name).green()
    );

    Ok(())
}
