pub mod session;
pub mod transactions;
