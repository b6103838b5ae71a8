use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "h-[90vh] w-full flex flex-col justify-center items-center text-white gap-4",
            h1 { class: "text-9xl font-extrabold tracking-widest", "404" }
            p { class: "text-gray-300", "Nothing lives at /{path} yet." }
            Link { to: Route::HomePage {}, class: "text-yellow-500 underline", "Go home" }
        }
    }
}
