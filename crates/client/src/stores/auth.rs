//! Auth store: who is signed in and what the API last said about them.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use ulms_shared::{AuthData, Role, User};

use crate::storage;

const STORAGE_KEY: &str = "ulms_auth";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_logged_in: bool,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub data: AuthData,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        self.data.user.as_ref()
    }
}

/// Restored from storage the first time it is read.
pub static AUTH: GlobalSignal<AuthState> =
    Signal::global(|| storage::load(STORAGE_KEY).unwrap_or_default());

/// Snapshot of the signed-in user. Reading subscribes the caller.
pub fn current_user() -> Option<User> {
    AUTH.read().user().cloned()
}

/// Replace the signed-in user after a successful fetch.
pub fn set_user(user: User) {
    let mut state = AUTH.write();
    state.is_logged_in = true;
    state.role = Some(user.role.clone());
    state.data.user = Some(user);
    storage::save(STORAGE_KEY, &*state);
}

/// Forget the session (logout or expired cookie).
pub fn clear() {
    *AUTH.write() = AuthState::default();
    storage::remove(STORAGE_KEY);
}
