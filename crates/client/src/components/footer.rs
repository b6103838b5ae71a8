use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "relative left-0 bottom-0 sm:h-[10vh] h-[15vh] py-5 sm:px-20 sm:pb-2 flex flex-col sm:flex-row items-center justify-between text-white bg-gray-900",
            section { "Copyright {year} | All rights reserved" }
            section { "A Quad Core Production" }
        }
    }
}
