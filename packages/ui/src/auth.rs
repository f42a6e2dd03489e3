//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] hydrates a [`SessionState`] signal from the persisted
//! session once at mount and hands views a [`SessionContext`] — the one object
//! through which login, logout, and profile refreshes flow. The context keeps
//! the storage and the signal in step so the navbar and guards always agree on
//! who is logged in.

use dioxus::prelude::*;
use session::User;

use crate::platform::session_store;

/// Session state mirrored out of the session store for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// Handle on the current session, passed to views through context.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext {
    state: Signal<SessionState>,
}

impl SessionContext {
    /// The logged-in user, if any.
    pub fn user(&self) -> Option<User> {
        (self.state)().user
    }

    pub fn is_authenticated(&self) -> bool {
        (self.state)().token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        (self.state)().user.is_some_and(|u| u.is_admin())
    }

    /// Persist a fresh session and update every subscribed view.
    pub fn log_in(&self, token: String, user: User) {
        session_store().set_session(&token, &user);
        let mut state = self.state;
        state.set(SessionState {
            token: Some(token),
            user: Some(user),
        });
    }

    /// Clear the persisted session and the mirrored state together.
    pub fn log_out(&self) {
        session_store().clear_session();
        let mut state = self.state;
        state.set(SessionState::default());
    }

    /// Replace the cached user after a profile update, keeping the token.
    pub fn refresh_user(&self, user: User) {
        let store = session_store();
        if let Some(token) = store.token() {
            store.set_session(&token, &user);
        }
        let mut state = self.state;
        let current = state();
        state.set(SessionState {
            user: Some(user),
            ..current
        });
    }
}

/// Get the current session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Provider component that owns the session state.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| {
        let store = session_store();
        SessionState {
            token: store.token(),
            user: store.user(),
        }
    });

    use_context_provider(|| SessionContext { state });

    rsx! {
        {children}
    }
}
