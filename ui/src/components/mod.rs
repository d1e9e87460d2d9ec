//! Shared components: the account panel, tooltip helpers, popups, and the
//! Pico.css primitives they are built from.
pub mod account_details;
pub mod pico;
pub mod popups;
pub mod question_helper;
pub mod transaction;
