//! # Session store — who is logged in
//!
//! [`SessionStore`] keeps the client's authentication state: an opaque access
//! token and the [`User`] profile it belongs to. Both values are persisted
//! through the [`SessionStorage`] trait, so the same logic works against the
//! browser's localStorage ([`crate::LocalStorage`]) or an in-memory map
//! ([`crate::MemoryStorage`]) in tests and native builds.
//!
//! The token and user are written together by [`set_session`](SessionStore::set_session)
//! and removed together by [`clear_session`](SessionStore::clear_session); no
//! operation ever leaves one behind without the other. The client never owns
//! canonical account state — the pair is created from a login/signup response
//! and destroyed on logout, nothing else touches it.

use crate::models::User;

/// Storage key for the access token.
pub const TOKEN_KEY: &str = "access_token";
/// Storage key for the serialised user profile.
pub const USER_KEY: &str = "user";

/// Minimal key/value storage interface for session persistence.
///
/// The host storage is assumed to be always available; an environment that
/// denies storage access fails at storage construction, not here.
pub trait SessionStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Authentication state backed by a [`SessionStorage`].
#[derive(Clone, Debug)]
pub struct SessionStore<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist the token/user pair. Subsequent reads observe the new pair.
    ///
    /// Serialisation happens before either write so a failure leaves the
    /// previous pair intact rather than a token without a user.
    pub fn set_session(&self, token: &str, user: &User) {
        let Ok(serialized) = serde_json::to_string(user) else {
            return;
        };
        self.storage.write(TOKEN_KEY, token);
        self.storage.write(USER_KEY, &serialized);
    }

    /// The stored access token, if a session exists.
    pub fn token(&self) -> Option<String> {
        self.storage.read(TOKEN_KEY)
    }

    /// The stored user profile. An unparseable stored value reads as `None`.
    pub fn user(&self) -> Option<User> {
        self.storage
            .read(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// True iff a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// True iff a user is present and its role is admin.
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.is_admin())
    }

    /// Remove both fields of the session.
    pub fn clear_session(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::MemoryStorage;

    fn student() -> User {
        User {
            id: 7,
            username: "jane_doe".into(),
            email: "jane@campushub.com".into(),
            role: Role::Student,
            created_at: "2025-01-15T10:00:00Z".into(),
        }
    }

    fn admin() -> User {
        User {
            id: 1,
            username: "admin".into(),
            email: "admin@campushub.com".into(),
            role: Role::Admin,
            created_at: "2025-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn starts_unauthenticated() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(!store.is_authenticated());
        assert!(!store.is_admin());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn set_session_round_trips() {
        let store = SessionStore::new(MemoryStorage::new());
        let user = student();
        store.set_session("tok-123", &user);

        assert_eq!(store.token().as_deref(), Some("tok-123"));
        assert_eq!(store.user(), Some(user));
        assert!(store.is_authenticated());
        assert!(!store.is_admin());
    }

    #[test]
    fn clear_session_removes_both_fields() {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_session("tok-123", &student());
        store.clear_session();

        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn admin_role_is_recognised() {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_session("tok-admin", &admin());
        assert!(store.is_admin());
    }

    #[test]
    fn non_admin_roles_are_not_admin() {
        let store = SessionStore::new(MemoryStorage::new());
        let mut user = student();
        store.set_session("t", &user);
        assert!(!store.is_admin());

        user.role = Role::Instructor;
        store.set_session("t", &user);
        assert!(!store.is_admin());
    }

    #[test]
    fn corrupt_stored_user_reads_as_none() {
        let storage = MemoryStorage::new();
        storage.write(TOKEN_KEY, "tok");
        storage.write(USER_KEY, "{not json");
        let store = SessionStore::new(storage);

        assert!(store.user().is_none());
        assert!(!store.is_admin());
        // A token alone still counts as authenticated.
        assert!(store.is_authenticated());
    }

    #[test]
    fn set_session_replaces_previous_pair() {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_session("old", &student());
        store.set_session("new", &admin());

        assert_eq!(store.token().as_deref(), Some("new"));
        assert_eq!(store.user().map(|u| u.id), Some(1));
    }
}
