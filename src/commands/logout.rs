use anyhow::Result;
use gather_core::auth::{AuthFlow, AuthState};

use crate::session::SessionStore;

pub fn run() -> Result<()> {
    let store = SessionStore::open()?;
    let session = store.load();

    let mut flow = AuthFlow::new();
    flow.resolve_startup(session.is_some())?;

    if flow.state() != AuthState::Authenticated {
        println!("Not logged in.");
        return Ok(());
    }

    // Token and profile live in the same file; clearing it drops both.
    flow.logout()?;
    store.clear()?;

    println!("Logged out.");

    Ok(())
}
