//! Hooks over the application store and the active connection.

pub mod use_active_connection;
pub mod use_application;
pub mod use_transactions;
