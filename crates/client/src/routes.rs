//! Application routing configuration.

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::views::{EditProfile, HomeLayout, HomePage, NotFound, Profile};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(HomeLayout)]
        #[route("/")]
        HomePage {},
        #[route("/user/profile")]
        Profile {},
        #[route("/user/editprofile")]
        EditProfile {},
        // Pages served by other parts of the site (courses, contact, ...)
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Resolve an in-app path. Unknown paths land on `NotFound`.
pub fn route_for(path: &str) -> Option<Route> {
    path.parse::<Route>().ok()
}

/// Routes workflow navigation requests through the Dioxus router.
#[derive(Clone, Copy)]
pub struct RouterNavigator(pub Navigator);

impl ulms_shared::profile::Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        match route_for(path) {
            Some(route) => {
                self.0.push(route);
            }
            None => crate::log_warn!("no route matches `{path}`"),
        }
    }
}
