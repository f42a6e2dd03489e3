//! # Route guards — pure navigation predicates
//!
//! Two predicates decide whether a navigation target is reachable given the
//! current session state. They return a [`GuardDecision`] value instead of
//! performing any navigation themselves; the routing layer maps
//! [`RedirectTarget`] onto its own route type. Decisions are never cached —
//! callers re-evaluate on every navigation.
//!
//! The redirect targets are deliberately asymmetric: an unauthenticated
//! visitor is sent to the login view, but an authenticated non-admin hitting
//! an admin-only target is sent to their dashboard rather than being told to
//! log in again.

use crate::store::{SessionStorage, SessionStore};

/// Outcome of evaluating a guard against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(RedirectTarget),
}

/// Where a denied navigation should land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Dashboard,
}

/// Allow any authenticated session; otherwise redirect to login.
pub fn protected<S: SessionStorage>(session: &SessionStore<S>) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(RedirectTarget::Login)
    }
}

/// Allow only authenticated admins; everyone else lands on the dashboard.
pub fn admin_only<S: SessionStorage>(session: &SessionStore<S>) -> GuardDecision {
    if session.is_authenticated() && session.is_admin() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(RedirectTarget::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};
    use crate::MemoryStorage;

    fn user_with_role(role: Role) -> User {
        User {
            id: 42,
            username: "someone".into(),
            email: "someone@campushub.com".into(),
            role,
            created_at: "2025-03-01T09:30:00Z".into(),
        }
    }

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::new())
    }

    #[test]
    fn protected_redirects_anonymous_to_login() {
        let session = store();
        assert_eq!(
            protected(&session),
            GuardDecision::Redirect(RedirectTarget::Login)
        );
    }

    #[test]
    fn protected_allows_any_authenticated_role() {
        for role in [Role::Student, Role::Instructor, Role::Admin] {
            let session = store();
            session.set_session("tok", &user_with_role(role));
            assert_eq!(protected(&session), GuardDecision::Allow);
        }
    }

    #[test]
    fn admin_only_redirects_anonymous_to_dashboard() {
        let session = store();
        assert_eq!(
            admin_only(&session),
            GuardDecision::Redirect(RedirectTarget::Dashboard)
        );
    }

    #[test]
    fn admin_only_sends_non_admins_to_dashboard_not_login() {
        for role in [Role::Student, Role::Instructor] {
            let session = store();
            session.set_session("tok", &user_with_role(role));
            let decision = admin_only(&session);
            assert_eq!(decision, GuardDecision::Redirect(RedirectTarget::Dashboard));
            assert_ne!(decision, GuardDecision::Redirect(RedirectTarget::Login));
        }
    }

    #[test]
    fn admin_only_allows_admins() {
        let session = store();
        session.set_session("tok", &user_with_role(Role::Admin));
        assert_eq!(admin_only(&session), GuardDecision::Allow);
    }

    #[test]
    fn decisions_track_session_changes() {
        let session = store();
        session.set_session("tok", &user_with_role(Role::Admin));
        assert_eq!(admin_only(&session), GuardDecision::Allow);

        // Logout is observed by the next evaluation; nothing is cached.
        session.clear_session();
        assert_eq!(
            admin_only(&session),
            GuardDecision::Redirect(RedirectTarget::Dashboard)
        );
        assert_eq!(
            protected(&session),
            GuardDecision::Redirect(RedirectTarget::Login)
        );
    }
}
