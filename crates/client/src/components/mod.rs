//! Reusable components.

pub mod footer;
pub mod profile;
pub mod toast;
pub mod ui;

pub use footer::Footer;
pub use toast::{ToastHost, ToastNotifier};
