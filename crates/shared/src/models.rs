//! Data models exchanged with the ULMS API.

use serde::{Deserialize, Serialize};

use crate::error::try_server_message;

// --- Identity ---

/// Image stored by the API's media host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Avatar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    pub secure_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => f.write_str("USER"),
            Role::Admin => f.write_str("ADMIN"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Avatar>,
}

impl User {
    /// URL of the stored avatar, if the user has one.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar
            .as_ref()
            .map(|a| a.secure_url.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// The `data` slice of the auth state: whatever the API last said about the
/// signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AuthData {
    #[serde(default)]
    pub user: Option<User>,
}

// --- Responses ---

/// Result envelope returned by mutating endpoints such as `PUT user/update`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    /// Read an error-status body as the server refusing the action.
    ///
    /// Only a `{ success: false, message }` envelope with a non-blank message
    /// qualifies; anything else is a transport-level failure.
    pub fn from_rejection_body(body: &str) -> Option<Self> {
        let message = try_server_message(body)?;
        let resp: ActionResponse = serde_json::from_str(body).ok()?;
        (!resp.success).then(|| Self::rejected(message))
    }
}

/// Response of `GET user/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_decodes_from_api_shape() {
        let json = r#"{
            "_id": "65f0",
            "fullName": "Alice Smith",
            "email": "alice@example.com",
            "role": "ADMIN",
            "avatar": { "public_id": "lms/abc", "secure_url": "https://x/old.png" }
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.full_name, "Alice Smith");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.avatar_url(), Some("https://x/old.png"));
    }

    #[test]
    fn missing_avatar_and_role_fall_back() {
        let user: User = serde_json::from_str(r#"{ "fullName": "Bob Stone" }"#).unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.avatar_url(), None);
    }

    #[test]
    fn blank_secure_url_counts_as_no_avatar() {
        let user = User {
            avatar: Some(Avatar {
                public_id: None,
                secure_url: String::new(),
            }),
            ..User::default()
        };
        assert_eq!(user.avatar_url(), None);
    }

    #[test]
    fn rejection_body_becomes_unsuccessful_response() {
        let body = r#"{"success":false,"message":"Avatar upload failed"}"#;
        assert_eq!(
            ActionResponse::from_rejection_body(body),
            Some(ActionResponse::rejected("Avatar upload failed"))
        );
    }

    #[test]
    fn non_envelope_error_bodies_are_not_rejections() {
        assert_eq!(ActionResponse::from_rejection_body("Bad Gateway"), None);
        assert_eq!(ActionResponse::from_rejection_body(r#"{"success":false}"#), None);
        assert_eq!(
            ActionResponse::from_rejection_body(r#"{"success":true,"message":"ok"}"#),
            None
        );
    }

    #[test]
    fn action_response_tolerates_missing_fields() {
        let resp: ActionResponse = serde_json::from_str("{}").unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message, None);
    }
}
