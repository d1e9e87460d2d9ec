//! State slices reduced by the application store.

pub mod application;
pub mod transactions;
