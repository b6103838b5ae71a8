use dioxus::prelude::*;

use crate::components::Footer;
use crate::Route;

/// Page shell shared by every routed page.
#[component]
pub fn HomeLayout() -> Element {
    rsx! {
        div { class: "min-h-[90vh] bg-gray-800",
            Outlet::<Route> {}
        }
        Footer {}
    }
}
