//! ULMS Client - Dioxus web application
//!
//! Pages, shared auth state and the HTTP plumbing for the learning
//! management front end. Workflow logic lives in `ulms-shared`.

pub mod logging;

pub mod actions;
pub mod api_client;
pub mod storage;
pub mod stores;

pub mod components;
pub mod routes;
pub mod views;

pub use actions::HttpProfileActions;
pub use api_client::ApiClient;
pub use routes::Route;
