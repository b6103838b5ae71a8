//! Shared types and workflow logic for the ULMS client.
//!
//! Nothing in this crate depends on a renderer: the Dioxus client binds these
//! types to signals, the router and the toast store.

pub mod config;
pub mod data_url;
pub mod error;
pub mod models;
pub mod profile;

pub use config::*;
pub use error::*;
pub use models::*;
