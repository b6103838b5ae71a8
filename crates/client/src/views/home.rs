//! Marketing landing page.

use dioxus::prelude::*;

use crate::components::ui::{Button, ButtonVariant};
use crate::Route;

const HOME_IMAGE: Asset = asset!("/assets/images/home-hero.svg");

#[component]
pub fn HomePage() -> Element {
    rsx! {
        div { class: "pt-10 text-white flex flex-col md:flex-row items-center justify-center mx-5 gap-10 lg:mx-16 h-[50rem] sm:h-[90vh]",
            div { class: "mt-16 sm:mt-0 flex flex-col justify-center md:w-1/2 space-y-6",
                h1 { class: "text-4xl sm:text-5xl font-semibold",
                    "Find out best\u{a0}"
                    span { class: "text-yellow-500 font-bold", "Online Courses" }
                }
                p { class: "text-lg sm:text-xl text-gray-200",
                    "We offer an extensive library of diverse courses, all taught by highly skilled and qualified faculty members who bring a wealth of knowledge and experience. Best of all, these courses are available at an incredibly affordable cost, ensuring that high-quality education is accessible to all."
                }
                div { class: "space-x-6",
                    Link { to: Route::NotFound { segments: vec!["courses".to_string()] },
                        Button { "Explore courses" }
                    }
                    Link { to: Route::NotFound { segments: vec!["contact".to_string()] },
                        Button { variant: ButtonVariant::Outline, "Contact Us" }
                    }
                }
            }
            div { class: "lg:w-1/2 flex items-center justify-center",
                img { src: HOME_IMAGE, alt: "homepage image" }
            }
        }
    }
}
