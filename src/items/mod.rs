mod dto;
pub mod repo;
pub mod services;

pub use dto::NewReturnItem;
pub use repo::ReturnItem;

// Activity dates persist as plain ISO calendar dates ("2024-03-05").
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
