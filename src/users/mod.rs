mod dto;
pub mod repo;
pub(crate) mod services;

pub use dto::NewUser;
pub use repo::User;
