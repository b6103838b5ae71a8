//! Submitting the edit-profile form.

use async_trait::async_trait;

use crate::error::{ApiError, ValidationError};
use crate::models::{ActionResponse, User};
use crate::profile::{EditProfileForm, ProfileUpdate};

/// Where a successful update lands.
pub const PROFILE_PATH: &str = "/user/profile";

pub const UPDATE_SUCCESS_MESSAGE: &str = "Profile updated successfully";
pub const UPDATE_FAILURE_MESSAGE: &str = "Failed to update profile";

/// Remote actions that talk to the API and update the shared auth state.
#[async_trait(?Send)]
pub trait ProfileActions {
    /// The signed-in user as currently held in shared state.
    fn current_user(&self) -> Option<User>;

    async fn update_profile(&self, update: ProfileUpdate) -> Result<ActionResponse, ApiError>;

    /// Re-fetch the signed-in user into shared state.
    async fn refresh_user(&self) -> Result<(), ApiError>;
}

/// Transient user-facing messages.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Where a single submission attempt currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Rejected,
    Navigated,
    FailedSilent,
    FailedNotified,
}

impl SubmitPhase {
    /// A submission is running and another must not start.
    pub fn is_busy(self) -> bool {
        matches!(self, SubmitPhase::Validating | SubmitPhase::Submitting)
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SubmitPhase::Rejected
                | SubmitPhase::Navigated
                | SubmitPhase::FailedSilent
                | SubmitPhase::FailedNotified
        )
    }

    /// Claim the form for a new attempt, moving to `Validating`.
    ///
    /// Fails while an attempt is running and after navigation; every other
    /// terminal phase leaves the form open for a retry.
    pub fn try_begin(&mut self) -> bool {
        let open = *self == SubmitPhase::Idle
            || (self.is_terminal() && *self != SubmitPhase::Navigated);
        if open {
            *self = SubmitPhase::Validating;
        }
        open
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected(ValidationError),
    /// Saved, refreshed, and routed to the profile page.
    Navigated,
    /// The API answered `success: false`. Nothing is shown to the user.
    FailedSilent { message: Option<String> },
    /// The request or the follow-up refresh failed; a failure toast was shown.
    FailedNotified(ApiError),
}

impl SubmitOutcome {
    pub fn phase(&self) -> SubmitPhase {
        match self {
            SubmitOutcome::Rejected(_) => SubmitPhase::Rejected,
            SubmitOutcome::Navigated => SubmitPhase::Navigated,
            SubmitOutcome::FailedSilent { .. } => SubmitPhase::FailedSilent,
            SubmitOutcome::FailedNotified(_) => SubmitPhase::FailedNotified,
        }
    }
}

/// Decide what a profile update result means to the form.
///
/// An error status whose body is the API's `{ success: false, message }`
/// envelope is the server refusing the change, which the form treats as an
/// unsuccessful reply. Every other error stays an error.
pub fn settle_update_result(
    result: Result<ActionResponse, ApiError>,
) -> Result<ActionResponse, ApiError> {
    match result {
        Err(ApiError::Http { status, body }) => match ActionResponse::from_rejection_body(&body) {
            Some(resp) => Ok(resp),
            None => Err(ApiError::Http { status, body }),
        },
        other => other,
    }
}

/// Validates a form snapshot, dispatches the update and reacts to the result.
pub struct ProfileEditFlow<'a> {
    actions: &'a dyn ProfileActions,
    notifier: &'a dyn Notifier,
    navigator: &'a dyn Navigator,
    on_phase: Option<&'a dyn Fn(SubmitPhase)>,
}

impl<'a> ProfileEditFlow<'a> {
    pub fn new(
        actions: &'a dyn ProfileActions,
        notifier: &'a dyn Notifier,
        navigator: &'a dyn Navigator,
    ) -> Self {
        Self {
            actions,
            notifier,
            navigator,
            on_phase: None,
        }
    }

    /// Report every phase transition to `observer`.
    pub fn observe(mut self, observer: &'a dyn Fn(SubmitPhase)) -> Self {
        self.on_phase = Some(observer);
        self
    }

    fn enter(&self, phase: SubmitPhase) {
        if let Some(observer) = self.on_phase {
            observer(phase);
        }
    }

    /// Run one submission attempt against `form`.
    ///
    /// The form is only read; the payload is built before the first await so
    /// later edits do not leak into an in-flight request.
    pub async fn submit(&self, form: &EditProfileForm) -> SubmitOutcome {
        self.enter(SubmitPhase::Validating);
        if let Err(err) = form.validate() {
            self.notifier.error(&err.to_string());
            return self.finish(SubmitOutcome::Rejected(err));
        }

        let update = form.to_update();
        self.enter(SubmitPhase::Submitting);

        let outcome = match self.dispatch(update).await {
            Ok(resp) if resp.success => {
                self.notifier.success(UPDATE_SUCCESS_MESSAGE);
                self.navigator.navigate(PROFILE_PATH);
                SubmitOutcome::Navigated
            }
            Ok(resp) => SubmitOutcome::FailedSilent {
                message: resp.message,
            },
            Err(err) => {
                self.notifier.error(UPDATE_FAILURE_MESSAGE);
                SubmitOutcome::FailedNotified(err)
            }
        };
        self.finish(outcome)
    }

    /// Update, then refresh shared state only if the update succeeded.
    async fn dispatch(&self, update: ProfileUpdate) -> Result<ActionResponse, ApiError> {
        let resp = self.actions.update_profile(update).await?;
        if resp.success {
            self.actions.refresh_user().await?;
        }
        Ok(resp)
    }

    fn finish(&self, outcome: SubmitOutcome) -> SubmitOutcome {
        self.enter(outcome.phase());
        outcome
    }
}
