use dioxus::prelude::*;

use crate::components::profile::ProfileEditForm;

#[component]
pub fn EditProfile() -> Element {
    rsx! {
        div { class: "flex items-center justify-center h-[100vh]",
            ProfileEditForm {}
        }
    }
}
