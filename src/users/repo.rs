use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::storage::{keys, KeyValueStore};
use crate::users::dto::NewUser;
use crate::users::services::is_valid_email;

/// A registered account. The password is stored and compared as-is to
/// keep the persisted layout compatible with existing directories; any
/// real deployment hashes before this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub name: String,
}

impl User {
    /// All registered users, in registration order. Empty when the
    /// directory key has never been written.
    pub fn list(store: &dyn KeyValueStore) -> Result<Vec<User>> {
        match store.get(keys::USERS_DIRECTORY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Register a new account. The email is trimmed and lowercased before
    /// the uniqueness check; a rejected registration leaves the directory
    /// exactly as it was.
    pub fn register(store: &dyn KeyValueStore, new: NewUser) -> Result<User> {
        let email = new.email.trim().to_lowercase();

        if !is_valid_email(&email) {
            warn!(email = %email, "registration rejected: invalid email");
            return Err(Error::InvalidEmail);
        }

        let mut users = User::list(store)?;
        if users.iter().any(|u| u.email == email) {
            warn!(email = %email, "registration rejected: email already registered");
            return Err(Error::DuplicateEmail);
        }

        let user = User {
            id: Uuid::new_v4(),
            email,
            password: new.password,
            name: new.name,
        };
        users.push(user.clone());
        save_all(store, &users)?;

        info!(user_id = %user.id, email = %user.email, "user registered");
        Ok(user)
    }

    /// Replace the directory record with the same id. Any field may change;
    /// email uniqueness is checked only at registration, not here.
    pub fn update_profile(store: &dyn KeyValueStore, updated: &User) -> Result<()> {
        let mut users = User::list(store)?;
        let slot = users
            .iter_mut()
            .find(|u| u.id == updated.id)
            .ok_or(Error::NotFound)?;
        *slot = updated.clone();
        save_all(store, &users)?;

        info!(user_id = %updated.id, "profile updated");
        Ok(())
    }

    /// Linear scan for an exact email+password match. The error does not
    /// say whether the email or the password was wrong.
    pub fn authenticate(store: &dyn KeyValueStore, email: &str, password: &str) -> Result<User> {
        let email = email.trim().to_lowercase();
        let users = User::list(store)?;
        match users
            .into_iter()
            .find(|u| u.email == email && u.password == password)
        {
            Some(user) => {
                info!(user_id = %user.id, "user authenticated");
                Ok(user)
            }
            None => {
                warn!(email = %email, "authentication failed");
                Err(Error::InvalidCredentials)
            }
        }
    }
}

fn save_all(store: &dyn KeyValueStore, users: &[User]) -> Result<()> {
    let raw = serde_json::to_string(users)?;
    store.set(keys::USERS_DIRECTORY, &raw)
}
