use tracing::{info, warn};

use crate::error::Result;
use crate::storage::{keys, KeyValueStore};
use crate::users::User;

/// The currently authenticated user, persisted under its own key so a
/// restart resumes the session. One explicit object rather than ambient
/// global state; consumers hold a reference to it.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<User>,
}

impl Session {
    /// Read the persisted session at startup. Absent or unreadable state
    /// means starting logged out, never a startup failure.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let current = match store.get(keys::SESSION) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "stored session unreadable; starting logged out");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "session read failed; starting logged out");
                None
            }
        };
        Self { current }
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Persist the user as the active session. Also called after a profile
    /// update so the stored copy tracks the directory.
    pub fn login(&mut self, store: &dyn KeyValueStore, user: User) -> Result<()> {
        let raw = serde_json::to_string(&user)?;
        store.set(keys::SESSION, &raw)?;
        info!(user_id = %user.id, "session started");
        self.current = Some(user);
        Ok(())
    }

    pub fn logout(&mut self, store: &dyn KeyValueStore) -> Result<()> {
        store.remove(keys::SESSION)?;
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "session ended");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::users::NewUser;

    fn registered(store: &MemoryStore) -> User {
        User::register(
            store,
            NewUser {
                email: "a@x.com".to_string(),
                password: "p".to_string(),
                name: "A".to_string(),
            },
        )
        .expect("register")
    }

    #[test]
    fn login_persists_and_load_resumes() {
        let store = MemoryStore::new();
        let user = registered(&store);

        let mut session = Session::load(&store);
        assert!(!session.is_authenticated());

        session.login(&store, user.clone()).expect("login");
        assert_eq!(session.current(), Some(&user));

        // A fresh load (a restart) sees the same user.
        let resumed = Session::load(&store);
        assert_eq!(resumed.current(), Some(&user));
    }

    #[test]
    fn logout_clears_memory_and_store() {
        let store = MemoryStore::new();
        let user = registered(&store);

        let mut session = Session::load(&store);
        session.login(&store, user).expect("login");
        session.logout(&store).expect("logout");

        assert!(!session.is_authenticated());
        assert!(!Session::load(&store).is_authenticated());
        assert!(store.get(keys::SESSION).expect("get").is_none());
    }

    #[test]
    fn corrupt_session_falls_back_to_logged_out() {
        let store = MemoryStore::new();
        store.set(keys::SESSION, "{not json").expect("set");

        let session = Session::load(&store);
        assert!(!session.is_authenticated());
    }
}
