// ============================================================================
// SESSION STORE - durable session state over a StoragePort
// ============================================================================
// Owns the token/user pair in durable storage. Invariant: the pair is written
// and cleared together, never partially. All functions take the port as a
// parameter so tests run against MemoryStorage.
// ============================================================================

use crate::models::{Account, AuthSession, Role};
use crate::utils::storage::{self, StoragePort};
use crate::utils::{
    STORAGE_KEY_CURRENT_PAGE, STORAGE_KEY_INTENDED_ROUTE, STORAGE_KEY_TOKEN, STORAGE_KEY_USER,
};

/// Tab-wide authentication state. `Restoring` only exists between first
/// render and the mount effect that reads storage.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Restoring,
    Unauthenticated,
    Authenticated { user: Account },
}

/// Where to send the user right after an explicit login.
#[derive(Clone, Debug, PartialEq)]
pub enum Destination {
    /// A guard recorded this path before prompting login.
    Intended(String),
    Dashboard,
    Home,
}

/// Bearer token for outgoing requests, if a session exists.
pub fn stored_token(storage: &impl StoragePort) -> Option<String> {
    storage.get(STORAGE_KEY_TOKEN)
}

/// Restores the persisted session: both token and user must be present and
/// the user must parse. A half-session (or unparsable user) is cleared on the
/// spot and reads as no session.
pub fn restore(storage: &impl StoragePort) -> Option<(String, Account)> {
    let token = storage.get(STORAGE_KEY_TOKEN)?;
    let raw_user = storage.get(STORAGE_KEY_USER)?;
    match serde_json::from_str::<Account>(&raw_user) {
        Ok(user) => Some((token, user)),
        Err(e) => {
            log::error!("⚠️ Sesión guardada corrupta, limpiando: {}", e);
            clear_session(storage);
            None
        }
    }
}

/// Persists a fresh login. Clears ALL durable storage first (full reset, not
/// just the session keys) so two logins in a row never merge state. The one
/// survivor is the intended route a guard recorded: the login that follows
/// the prompt still has to resolve to it.
pub fn persist_login(storage: &impl StoragePort, session: &AuthSession) {
    let intended = storage.get(STORAGE_KEY_INTENDED_ROUTE);
    storage.clear();
    if let Some(path) = &intended {
        storage.set(STORAGE_KEY_INTENDED_ROUTE, path);
    }
    storage.set(STORAGE_KEY_TOKEN, &session.access_token);
    if storage::save_json(storage, STORAGE_KEY_USER, &session.user).is_err() {
        // A token without a user is worse than no session at all.
        clear_session(storage);
    }
}

/// Drops the session keys (token, user, cached page marker) but nothing else.
/// This is the 401 path; explicit logout uses `clear_all`.
pub fn clear_session(storage: &impl StoragePort) {
    storage.remove(STORAGE_KEY_TOKEN);
    storage.remove(STORAGE_KEY_USER);
    storage.remove(STORAGE_KEY_CURRENT_PAGE);
}

/// Explicit logout: everything goes.
pub fn clear_all(storage: &impl StoragePort) {
    storage.clear();
}

/// Records the route a guard blocked, to resume after login. Last write wins.
pub fn remember_intended_route(storage: &impl StoragePort, path: &str) {
    storage.set(STORAGE_KEY_INTENDED_ROUTE, path);
}

/// Consumes the recorded route; at most one caller ever sees it.
pub fn take_intended_route(storage: &impl StoragePort) -> Option<String> {
    let path = storage.get(STORAGE_KEY_INTENDED_ROUTE)?;
    storage.remove(STORAGE_KEY_INTENDED_ROUTE);
    Some(path)
}

/// Post-login routing: a recorded intended route wins; otherwise route by
/// role (ADMIN/STAFF to the dashboard, everyone else to the landing page).
pub fn post_login_destination(storage: &impl StoragePort, role: Role) -> Destination {
    if let Some(path) = take_intended_route(storage) {
        return Destination::Intended(path);
    }
    if role.is_staff_level() {
        Destination::Dashboard
    } else {
        Destination::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    fn session(role: Role) -> AuthSession {
        AuthSession {
            access_token: "tok-1".into(),
            user: Account {
                id: 7,
                email: "an@learnmap.vn".into(),
                full_name: Some("An".into()),
                phone_number: None,
                role,
            },
        }
    }

    #[test]
    fn login_then_restore_roundtrips() {
        let storage = MemoryStorage::new();
        persist_login(&storage, &session(Role::Student));

        let (token, user) = restore(&storage).expect("session should restore");
        assert_eq!(token, "tok-1");
        assert_eq!(user.email, "an@learnmap.vn");
    }

    #[test]
    fn login_fully_resets_storage_first() {
        let storage = MemoryStorage::new();
        storage.set("companiesCache", "stale");
        storage.set(STORAGE_KEY_CURRENT_PAGE, "3");
        persist_login(&storage, &session(Role::Admin));

        assert_eq!(storage.get("companiesCache"), None);
        assert_eq!(storage.get(STORAGE_KEY_CURRENT_PAGE), None);
        // Exactly token + user remain.
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn two_logins_never_merge() {
        let storage = MemoryStorage::new();
        persist_login(&storage, &session(Role::Admin));
        let second = session(Role::Student);
        persist_login(&storage, &second);

        let (_, user) = restore(&storage).unwrap();
        assert_eq!(user.role, Role::Student);
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn corrupt_user_clears_the_session_keys() {
        let storage = MemoryStorage::new();
        storage.set(STORAGE_KEY_TOKEN, "tok");
        storage.set(STORAGE_KEY_USER, "{not json");
        storage.set(STORAGE_KEY_CURRENT_PAGE, "3");

        assert_eq!(restore(&storage), None);
        assert_eq!(storage.get(STORAGE_KEY_TOKEN), None);
        assert_eq!(storage.get(STORAGE_KEY_USER), None);
        assert_eq!(storage.get(STORAGE_KEY_CURRENT_PAGE), None);
    }

    #[test]
    fn token_without_user_reads_as_no_session() {
        let storage = MemoryStorage::new();
        storage.set(STORAGE_KEY_TOKEN, "tok");
        assert_eq!(restore(&storage), None);
    }

    #[test]
    fn intended_route_is_consumed_exactly_once() {
        let storage = MemoryStorage::new();
        remember_intended_route(&storage, "/dashboard/accounts");
        // Last write wins if the guard re-fires before resolution.
        remember_intended_route(&storage, "/dashboard/plans");

        assert_eq!(take_intended_route(&storage).as_deref(), Some("/dashboard/plans"));
        assert_eq!(take_intended_route(&storage), None);
    }

    #[test]
    fn destination_prefers_intended_route_over_role() {
        let storage = MemoryStorage::new();
        // The guard records the route BEFORE login resets storage; it has
        // to survive the reset to resolve afterwards.
        remember_intended_route(&storage, "/dashboard/accounts");
        persist_login(&storage, &session(Role::Admin));
        assert_eq!(
            post_login_destination(&storage, Role::Admin),
            Destination::Intended("/dashboard/accounts".into())
        );
        // Consumed: the next login routes by role again.
        assert_eq!(post_login_destination(&storage, Role::Admin), Destination::Dashboard);
        assert_eq!(post_login_destination(&storage, Role::Staff), Destination::Dashboard);
        assert_eq!(post_login_destination(&storage, Role::Student), Destination::Home);
    }
}
