//! Transient notifications shown at the top of the page.

use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use ulms_shared::profile::Notifier;

const DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub level: ToastLevel,
    pub message: String,
}

pub static TOASTS: GlobalSignal<Vec<Toast>> = Signal::global(Vec::new);

/// Show a toast and schedule its removal.
pub fn push(level: ToastLevel, message: impl Into<String>) {
    let id = uuid::Uuid::new_v4().to_string();
    TOASTS.write().push(Toast {
        id: id.clone(),
        level,
        message: message.into(),
    });

    spawn_forever(async move {
        sleep(DISMISS_AFTER).await;
        dismiss(&id);
    });
}

pub fn dismiss(id: &str) {
    TOASTS.write().retain(|t| t.id != id);
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// [`Notifier`] backed by the toast list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        push(ToastLevel::Success, message);
    }

    fn error(&self, message: &str) {
        push(ToastLevel::Error, message);
    }
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = TOASTS.read().clone();

    rsx! {
        div { class: "fixed top-4 left-1/2 -translate-x-1/2 z-50 flex flex-col items-center gap-2 pointer-events-none",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Success => "pointer-events-auto cursor-pointer rounded-md bg-white px-4 py-2 text-sm font-medium text-gray-900 shadow-lg border-l-4 border-green-500",
                        ToastLevel::Error => "pointer-events-auto cursor-pointer rounded-md bg-white px-4 py-2 text-sm font-medium text-gray-900 shadow-lg border-l-4 border-red-500",
                    },
                    onclick: {
                        let id = toast.id.clone();
                        move |_| dismiss(&id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
