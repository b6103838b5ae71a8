//! Read-only summary of the signed-in user.

use dioxus::prelude::*;
use ulms_shared::User;

use super::AvatarImage;

#[component]
pub fn ProfileCard(user: User) -> Element {
    let avatar = user.avatar_url().unwrap_or_default().to_string();
    let email = user.email.clone().unwrap_or_default();
    let role = user.role.to_string();

    rsx! {
        div { class: "flex flex-col items-center gap-4",
            AvatarImage { src: avatar, alt: "{user.full_name}", size: "w-40 h-40" }
            h3 { class: "text-xl font-semibold text-center capitalize", "{user.full_name}" }
            div { class: "grid grid-cols-2 gap-x-4 gap-y-1",
                p { "Email: " }
                p { "{email}" }
                p { "Role: " }
                p { "{role}" }
            }
        }
    }
}
