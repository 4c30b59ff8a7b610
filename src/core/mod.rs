pub mod catalog;
pub mod classify;
pub mod delta;
pub mod overview;
pub mod readiness;
pub mod state;
pub mod supply;
pub mod types;
