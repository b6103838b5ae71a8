//! View components for the application.

pub mod edit_profile;
pub mod home;
pub mod layouts;
pub mod not_found;
pub mod profile_view;

pub use edit_profile::EditProfile;
pub use home::HomePage;
pub use layouts::HomeLayout;
pub use not_found::NotFound;
pub use profile_view::Profile;
