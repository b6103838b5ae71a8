use dioxus::prelude::*;

/// Round avatar, or a person-in-a-circle icon when `src` is empty.
#[component]
pub fn AvatarImage(src: String, alt: String, #[props(default = "w-28 h-28".to_string())] size: String) -> Element {
    if src.is_empty() {
        return rsx! {
            svg {
                class: "{size} rounded-full m-auto",
                view_box: "0 0 16 16",
                fill: "currentColor",
                path { d: "M11 6a3 3 0 1 1-6 0 3 3 0 0 1 6 0z" }
                path {
                    fill_rule: "evenodd",
                    d: "M0 8a8 8 0 1 1 16 0A8 8 0 0 1 0 8zm8-7a7 7 0 0 0-5.468 11.37C3.242 11.226 4.805 10 8 10s4.757 1.225 5.468 2.37A7 7 0 0 0 8 1z",
                }
            }
        };
    }

    rsx! {
        img { class: "{size} rounded-full m-auto object-cover", src: "{src}", alt: "{alt}" }
    }
}
