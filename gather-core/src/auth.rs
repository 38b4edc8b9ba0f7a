//! Session-state machine and the two navigation guards.

use crate::error::{GatherError, GatherResult};

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// The startup check has not completed yet.
    Unknown,
    /// No stored token was found, or logout was called.
    Anonymous,
    /// A stored token was found at startup, or login succeeded.
    Authenticated,
}

/// What a guard tells the navigation surface to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Show the guarded screen.
    Render,
    /// Replace-navigate away. Back-navigation must not return here.
    Redirect,
    /// Startup check still pending; show nothing yet.
    Wait,
}

/// Explicit session-state holder, passed to whoever needs it.
///
/// Updated only by the three transition operations. There is no background
/// poll and no expiry timer; a server-side session expiry is only noticed
/// when a request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthFlow {
    state: AuthState,
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthFlow {
    pub fn new() -> Self {
        AuthFlow {
            state: AuthState::Unknown,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Resolve the one-time startup check: a stored token makes the
    /// session authenticated, anything else makes it anonymous.
    pub fn resolve_startup(&mut self, token_found: bool) -> GatherResult<()> {
        if self.state != AuthState::Unknown {
            return Err(GatherError::InvalidSessionTransition(
                "startup check already resolved",
            ));
        }
        self.state = if token_found {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        };
        Ok(())
    }

    /// Anonymous to Authenticated. Re-login while logged in is not a
    /// modeled transition.
    pub fn login(&mut self) -> GatherResult<()> {
        match self.state {
            AuthState::Anonymous => {
                self.state = AuthState::Authenticated;
                Ok(())
            }
            AuthState::Unknown => Err(GatherError::InvalidSessionTransition(
                "login before the startup check",
            )),
            AuthState::Authenticated => {
                Err(GatherError::InvalidSessionTransition("already logged in"))
            }
        }
    }

    /// Authenticated to Anonymous.
    pub fn logout(&mut self) -> GatherResult<()> {
        match self.state {
            AuthState::Authenticated => {
                self.state = AuthState::Anonymous;
                Ok(())
            }
            _ => Err(GatherError::InvalidSessionTransition("not logged in")),
        }
    }

    /// Guard for the login/registration screens: an authenticated user is
    /// sent to the main area instead.
    pub fn entry_gate(&self) -> GateDecision {
        match self.state {
            AuthState::Authenticated => GateDecision::Redirect,
            AuthState::Anonymous => GateDecision::Render,
            AuthState::Unknown => GateDecision::Wait,
        }
    }

    /// Guard for every screen behind the main area: an anonymous user is
    /// sent to the login screen instead.
    pub fn exit_gate(&self) -> GateDecision {
        match self.state {
            AuthState::Anonymous => GateDecision::Redirect,
            AuthState::Authenticated => GateDecision::Render,
            AuthState::Unknown => GateDecision::Wait,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_gates_wait_before_startup_resolves() {
        let flow = AuthFlow::new();
        assert_eq!(flow.state(), AuthState::Unknown);
        assert_eq!(flow.entry_gate(), GateDecision::Wait);
        assert_eq!(flow.exit_gate(), GateDecision::Wait);
    }

    #[test]
    fn test_startup_without_token_renders_auth_screens_only() {
        let mut flow = AuthFlow::new();
        flow.resolve_startup(false).unwrap();

        assert_eq!(flow.state(), AuthState::Anonymous);
        assert_eq!(flow.entry_gate(), GateDecision::Render);
        assert_eq!(flow.exit_gate(), GateDecision::Redirect);
    }

    #[test]
    fn test_startup_with_token_renders_protected_screens_only() {
        let mut flow = AuthFlow::new();
        flow.resolve_startup(true).unwrap();

        assert_eq!(flow.state(), AuthState::Authenticated);
        assert_eq!(flow.entry_gate(), GateDecision::Redirect);
        assert_eq!(flow.exit_gate(), GateDecision::Render);
    }

    #[test]
    fn test_startup_resolves_exactly_once() {
        let mut flow = AuthFlow::new();
        flow.resolve_startup(false).unwrap();
        assert!(flow.resolve_startup(true).is_err());
        assert_eq!(flow.state(), AuthState::Anonymous);
    }

    #[test]
    fn test_login_flips_both_gates() {
        let mut flow = AuthFlow::new();
        flow.resolve_startup(false).unwrap();

        flow.login().unwrap();
        assert_eq!(flow.entry_gate(), GateDecision::Redirect);
        assert_eq!(flow.exit_gate(), GateDecision::Render);
    }

    #[test]
    fn test_logout_returns_to_anonymous() {
        let mut flow = AuthFlow::new();
        flow.resolve_startup(true).unwrap();

        flow.logout().unwrap();
        assert_eq!(flow.state(), AuthState::Anonymous);
        assert_eq!(flow.exit_gate(), GateDecision::Redirect);
    }

    #[test]
    fn test_relogin_and_stray_transitions_are_rejected() {
        let mut flow = AuthFlow::new();
        assert!(flow.login().is_err());
        assert!(flow.logout().is_err());

        flow.resolve_startup(true).unwrap();
        assert!(flow.login().is_err());

        flow.logout().unwrap();
        assert!(flow.logout().is_err());
    }
}
