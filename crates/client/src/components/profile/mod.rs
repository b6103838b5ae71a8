//! Profile-related components.

mod avatar_image;
mod profile_card;
mod profile_edit_form;

pub use avatar_image::AvatarImage;
pub use profile_card::ProfileCard;
pub use profile_edit_form::ProfileEditForm;
