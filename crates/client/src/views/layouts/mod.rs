mod home_layout;

pub use home_layout::HomeLayout;
