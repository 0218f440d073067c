pub mod sessions;
pub mod transactions;
pub mod users;
