//! Edit-profile form state.

use async_trait::async_trait;

use crate::data_url;
use crate::error::{FormError, ValidationError};
use crate::models::User;

/// Multipart field carrying the display name.
pub const FULL_NAME_FIELD: &str = "fullName";
/// Multipart field carrying the new avatar file.
pub const AVATAR_FIELD: &str = "avatar";

const MIN_NAME_UNITS: usize = 5;

/// A picked image, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl AvatarFile {
    pub fn data_url(&self) -> String {
        data_url::encode(&self.mime, &self.bytes)
    }
}

/// A file handed over by a file picker whose contents are read lazily.
#[async_trait(?Send)]
pub trait SelectedImage {
    fn name(&self) -> String;

    /// MIME type reported by the picker, if any.
    fn content_type(&self) -> Option<String>;

    async fn read_bytes(&self) -> Result<Vec<u8>, String>;
}

/// Read a picked file without blocking and resolve its MIME type.
pub async fn read_image<F>(file: &F) -> Result<AvatarFile, FormError>
where
    F: SelectedImage + ?Sized,
{
    let name = file.name();
    let bytes = file
        .read_bytes()
        .await
        .map_err(|reason| FormError::ReadFailed {
            name: name.clone(),
            reason,
        })?;

    let mime = file
        .content_type()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| data_url::mime_for_file_name(&name).to_string());

    Ok(AvatarFile { name, mime, bytes })
}

/// Check a display name before it is sent.
///
/// Length is measured in UTF-16 code units, the unit browsers report for
/// string length, so an astral emoji counts as two.
pub fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::NameMissing);
    }
    if name.encode_utf16().count() < MIN_NAME_UNITS {
        return Err(ValidationError::NameTooShort);
    }
    Ok(())
}

/// Transient state behind the edit-profile page. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditProfileForm {
    preview_image: String,
    full_name: String,
    avatar: Option<AvatarFile>,
    /// Upstream `(fullName, avatar url)` last copied into the form.
    synced: Option<(String, String)>,
}

impl EditProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview_image(&self) -> &str {
        &self.preview_image
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The file picked since the form loaded, if any.
    pub fn avatar(&self) -> Option<&AvatarFile> {
        self.avatar.as_ref()
    }

    /// Copy name and stored avatar from the shared user, but only when that
    /// user differs from what was copied last time. A pending local image
    /// keeps its preview. Returns whether anything was overwritten.
    pub fn sync_from_user(&mut self, user: Option<&User>) -> bool {
        let Some(user) = user else {
            return false;
        };

        let snapshot = (
            user.full_name.clone(),
            user.avatar_url().unwrap_or_default().to_string(),
        );
        if self.synced.as_ref() == Some(&snapshot) {
            return false;
        }

        self.full_name = snapshot.0.clone();
        if self.avatar.is_none() {
            self.preview_image = snapshot.1.clone();
        }
        self.synced = Some(snapshot);
        true
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
    }

    /// Show `file` as the preview and keep it for upload.
    pub fn attach_image(&mut self, file: AvatarFile) {
        self.preview_image = file.data_url();
        self.avatar = Some(file);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_full_name(&self.full_name)
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            full_name: self.full_name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Body of a profile update, sent as `multipart/form-data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub avatar: Option<AvatarFile>,
}

/// One multipart field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPart<'a> {
    Text {
        name: &'static str,
        value: &'a str,
    },
    File {
        name: &'static str,
        file: &'a AvatarFile,
    },
}

impl ProfileUpdate {
    /// Fields in wire order. The avatar part is present only for a new file.
    pub fn parts(&self) -> Vec<FormPart<'_>> {
        let mut parts = vec![FormPart::Text {
            name: FULL_NAME_FIELD,
            value: &self.full_name,
        }];
        if let Some(file) = &self.avatar {
            parts.push(FormPart::File {
                name: AVATAR_FIELD,
                file,
            });
        }
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Avatar;

    struct PickedFile {
        name: &'static str,
        mime: Option<&'static str>,
        bytes: Result<Vec<u8>, String>,
    }

    #[async_trait(?Send)]
    impl SelectedImage for PickedFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn content_type(&self) -> Option<String> {
            self.mime.map(str::to_string)
        }

        async fn read_bytes(&self) -> Result<Vec<u8>, String> {
            self.bytes.clone()
        }
    }

    fn alice() -> User {
        User {
            full_name: "Alice Smith".to_string(),
            avatar: Some(Avatar {
                public_id: None,
                secure_url: "https://x/old.png".to_string(),
            }),
            ..User::default()
        }
    }

    #[test]
    fn mount_copies_name_and_stored_avatar() {
        let mut form = EditProfileForm::new();
        assert!(form.sync_from_user(Some(&alice())));
        assert_eq!(form.full_name(), "Alice Smith");
        assert_eq!(form.preview_image(), "https://x/old.png");
        assert!(form.avatar().is_none());
    }

    #[test]
    fn unchanged_upstream_does_not_clobber_edits() {
        let user = alice();
        let mut form = EditProfileForm::new();
        form.sync_from_user(Some(&user));
        form.set_full_name("Alice S.");

        assert!(!form.sync_from_user(Some(&user)));
        assert_eq!(form.full_name(), "Alice S.");
    }

    #[test]
    fn changed_upstream_resyncs() {
        let mut form = EditProfileForm::new();
        form.sync_from_user(Some(&alice()));
        form.set_full_name("typing...");

        let renamed = User {
            full_name: "Alice Jones".to_string(),
            ..alice()
        };
        assert!(form.sync_from_user(Some(&renamed)));
        assert_eq!(form.full_name(), "Alice Jones");
    }

    #[test]
    fn absent_user_is_ignored() {
        let mut form = EditProfileForm::new();
        form.set_full_name("draft");
        assert!(!form.sync_from_user(None));
        assert_eq!(form.full_name(), "draft");
        assert_eq!(form.preview_image(), "");
    }

    #[test]
    fn user_without_avatar_leaves_empty_preview() {
        let mut form = EditProfileForm::new();
        let user = User {
            full_name: "Carol King".to_string(),
            ..User::default()
        };
        form.sync_from_user(Some(&user));
        assert_eq!(form.preview_image(), "");
    }

    #[test]
    fn name_validation_order() {
        assert_eq!(validate_full_name(""), Err(ValidationError::NameMissing));
        assert_eq!(validate_full_name("Bob"), Err(ValidationError::NameTooShort));
        assert_eq!(validate_full_name("Abcd"), Err(ValidationError::NameTooShort));
        assert_eq!(validate_full_name("Abcde"), Ok(()));
        // four code units, seven bytes
        assert_eq!(validate_full_name("Zoë™"), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        // three emoji, six UTF-16 units
        assert_eq!(validate_full_name("😀😀😀"), Ok(()));
        assert_eq!(validate_full_name("😀😀"), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn pending_image_survives_late_user_sync() {
        let mut form = EditProfileForm::new();
        form.attach_image(AvatarFile {
            name: "new.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![7, 7],
        });

        assert!(form.sync_from_user(Some(&alice())));
        assert_eq!(form.full_name(), "Alice Smith");
        assert!(form.preview_image().starts_with("data:image/png;base64,"));
        assert_eq!(form.avatar().map(|a| a.name.as_str()), Some("new.png"));
    }

    #[test]
    fn pending_image_survives_upstream_change() {
        let mut form = EditProfileForm::new();
        form.sync_from_user(Some(&alice()));
        form.attach_image(AvatarFile {
            name: "new.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![7, 7],
        });

        let updated = User {
            avatar: Some(Avatar {
                public_id: None,
                secure_url: "https://x/other.png".to_string(),
            }),
            ..alice()
        };
        form.sync_from_user(Some(&updated));
        assert!(form.preview_image().starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn picked_image_becomes_preview_and_upload() {
        let file = PickedFile {
            name: "me.png",
            mime: Some("image/png"),
            bytes: Ok(vec![1, 2, 3]),
        };
        let mut form = EditProfileForm::new();
        form.sync_from_user(Some(&alice()));

        let avatar = read_image(&file).await.unwrap();
        form.attach_image(avatar);

        assert!(form.preview_image().starts_with("data:image/png;base64,"));
        assert_eq!(form.avatar().map(|a| a.name.as_str()), Some("me.png"));
    }

    #[tokio::test]
    async fn mime_falls_back_to_extension() {
        let file = PickedFile {
            name: "me.jpeg",
            mime: None,
            bytes: Ok(vec![0xff, 0xd8]),
        };
        let avatar = read_image(&file).await.unwrap();
        assert_eq!(avatar.mime, "image/jpeg");
    }

    #[tokio::test]
    async fn unreadable_file_reports_name() {
        let file = PickedFile {
            name: "broken.png",
            mime: Some("image/png"),
            bytes: Err("permission denied".to_string()),
        };
        let err = read_image(&file).await.unwrap_err();
        assert_eq!(
            err,
            FormError::ReadFailed {
                name: "broken.png".to_string(),
                reason: "permission denied".to_string(),
            }
        );
    }

    #[test]
    fn update_without_new_avatar_has_only_name() {
        let mut form = EditProfileForm::new();
        form.sync_from_user(Some(&alice()));
        form.set_full_name("Alice");

        let update = form.to_update();
        assert_eq!(
            update.parts(),
            vec![FormPart::Text {
                name: FULL_NAME_FIELD,
                value: "Alice",
            }]
        );
    }

    #[test]
    fn update_with_new_avatar_carries_file() {
        let mut form = EditProfileForm::new();
        form.set_full_name("Alice Smith");
        form.attach_image(AvatarFile {
            name: "a.svg".to_string(),
            mime: "image/svg+xml".to_string(),
            bytes: b"<svg/>".to_vec(),
        });

        let update = form.to_update();
        let parts = update.parts();
        assert_eq!(parts.len(), 2);
        assert!(matches!(
            parts[1],
            FormPart::File { name: AVATAR_FIELD, file } if file.name == "a.svg"
        ));
    }
}
