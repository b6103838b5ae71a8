//! Profile editing: local form state and the submission workflow.

mod flow;
mod form;

pub use flow::*;
pub use form::*;
