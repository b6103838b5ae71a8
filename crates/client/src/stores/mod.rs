//! Global stores for application state.

pub mod auth;

pub use auth::{clear, current_user, set_user, AuthState, AUTH};
