//! Profile view - the signed-in user's details, with a link to edit them.

use dioxus::prelude::*;
use ulms_shared::profile::ProfileActions;

use crate::actions::HttpProfileActions;
use crate::components::profile::ProfileCard;
use crate::stores;
use crate::Route;

#[component]
pub fn Profile() -> Element {
    let mut loading = use_signal(|| stores::current_user().is_none());

    // Fetch once on mount when the store has nothing (e.g. first visit after login elsewhere).
    use_hook(move || {
        if !*loading.peek() {
            return;
        }
        spawn(async move {
            if let Err(e) = HttpProfileActions::default().refresh_user().await {
                crate::log_warn!("Failed to load profile: {e}");
            }
            loading.set(false);
        });
    });

    if *loading.read() {
        return rsx! {
            div { class: "flex items-center justify-center min-h-[90vh]",
                div { class: "animate-spin rounded-full h-8 w-8 border-2 border-yellow-500 border-t-transparent" }
            }
        };
    }

    let Some(user) = stores::current_user() else {
        return rsx! {
            div { class: "flex items-center justify-center min-h-[90vh]",
                p { class: "text-gray-400", "Please log in to view your profile" }
            }
        };
    };

    rsx! {
        div { class: "min-h-[90vh] flex items-center justify-center",
            div { class: "my-10 flex flex-col gap-4 rounded-lg p-4 text-white w-96 shadow-[0_0_10px_black]",
                ProfileCard { user }
                Link {
                    to: Route::EditProfile {},
                    class: "w-full text-center bg-yellow-600 hover:bg-yellow-500 transition-all ease-in-out duration-300 rounded-sm font-semibold py-2 cursor-pointer",
                    "Edit profile"
                }
            }
        }
    }
}
