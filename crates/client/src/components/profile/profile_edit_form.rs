//! Profile edit form component.

use async_trait::async_trait;
use dioxus::html::FileData;
use dioxus::prelude::*;
use ulms_shared::data_url::ACCEPTED_IMAGE_TYPES;
use ulms_shared::profile::{
    read_image, EditProfileForm, ProfileActions, ProfileEditFlow, SelectedImage, SubmitOutcome,
    SubmitPhase,
};

use super::AvatarImage;
use crate::actions::HttpProfileActions;
use crate::components::ui::{Button, ButtonVariant, TextInput};
use crate::components::ToastNotifier;
use crate::routes::{Route, RouterNavigator};

/// A file from the browser/desktop picker.
struct PickedFile(FileData);

#[async_trait(?Send)]
impl SelectedImage for PickedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn content_type(&self) -> Option<String> {
        self.0.content_type()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        self.0
            .read_bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| e.to_string())
    }
}

#[component]
pub fn ProfileEditForm() -> Element {
    let mut form = use_signal(EditProfileForm::new);
    let mut phase = use_signal(SubmitPhase::default);
    let nav = use_navigator();
    let actions = use_hook(HttpProfileActions::default);

    // The user may arrive after mount; re-runs whenever the auth store changes.
    let sync_actions = actions.clone();
    use_effect(move || {
        let user = sync_actions.current_user();
        if form.write().sync_from_user(user.as_ref()) {
            crate::log_debug!("edit form filled from stored user");
        }
    });

    let on_image = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        match read_image(&PickedFile(file)).await {
            Ok(avatar) => {
                crate::log_debug!("previewing {} ({} bytes)", avatar.name, avatar.bytes.len());
                form.write().attach_image(avatar);
            }
            Err(e) => crate::log_warn!("{e}"),
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // Claimed before spawning so a second submit in the same tick is refused.
        if !phase.write().try_begin() {
            return;
        }

        let snapshot = form.read().clone();
        let actions = actions.clone();
        spawn(async move {
            let navigator = RouterNavigator(nav);
            let report = move |p: SubmitPhase| {
                let mut phase = phase;
                phase.set(p);
            };

            let outcome = ProfileEditFlow::new(&actions, &ToastNotifier, &navigator)
                .observe(&report)
                .submit(&snapshot)
                .await;

            match outcome {
                SubmitOutcome::Navigated => crate::log_info!("profile updated"),
                SubmitOutcome::Rejected(reason) => crate::log_debug!("submit rejected: {reason}"),
                SubmitOutcome::FailedSilent { message } => crate::log_warn!(
                    "profile update unsuccessful: {}",
                    message.as_deref().unwrap_or("no message")
                ),
                SubmitOutcome::FailedNotified(e) => crate::log_error!("profile update failed: {e}"),
            }
        });
    };

    let preview = form.read().preview_image().to_string();
    let full_name = form.read().full_name().to_string();
    let busy = phase.read().is_busy();

    rsx! {
        form {
            class: "flex flex-col items-center justify-center gap-5 rounded-lg p-4 text-white w-80 min-h-[26rem] shadow-[0_0_10px_black]",
            onsubmit: on_submit,

            h1 { class: "text-center text-2xl font-semibold", "Edit Profile" }

            label { class: "cursor-pointer", r#for: "image_uploads",
                AvatarImage { src: preview, alt: "Profile Preview" }
            }
            input {
                class: "hidden",
                r#type: "file",
                id: "image_uploads",
                name: "image_uploads",
                accept: ACCEPTED_IMAGE_TYPES,
                onchange: on_image,
            }

            div { class: "w-full flex flex-col gap-1",
                label { class: "font-semibold", r#for: "fullName", "Full Name" }
                TextInput {
                    id: "fullName",
                    name: "fullName",
                    required: true,
                    placeholder: "Enter your Full Name...",
                    value: full_name,
                    oninput: move |e: FormEvent| form.write().set_full_name(e.value()),
                }
            }

            Button {
                r#type: "submit",
                disabled: busy,
                variant: ButtonVariant::Block,
                if busy { "Updating..." } else { "Update Profile" }
            }

            Link { to: Route::Profile {},
                p { class: "link text-accent cursor-pointer flex items-center justify-center w-full gap-3",
                    "\u{2190} Go back to profile"
                }
            }
        }
    }
}
