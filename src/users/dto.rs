use serde::Deserialize;

/// Input from the registration form; the id is assigned by the directory.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
}
