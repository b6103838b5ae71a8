//! HTTP client for the ULMS API.
//!
//! One client is shared by the whole app. It is configured once from
//! [`ApiConfig`] and forwards cookies on every request: through the cookie
//! store on desktop, through `fetch` credentials mode `include` on web.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use ulms_shared::profile::{FormPart, ProfileUpdate};
use ulms_shared::{ApiConfig, ApiError};

#[cfg(not(target_arch = "wasm32"))]
static SHARED: once_cell::sync::Lazy<ApiClient> = once_cell::sync::Lazy::new(ApiClient::from_env);

#[cfg(target_arch = "wasm32")]
thread_local! {
    static SHARED: ApiClient = ApiClient::from_env();
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: build_client(&config),
            config,
        }
    }

    /// Build from `ULMS_API_URL`, falling back to the default address when
    /// the configured one is unusable.
    pub fn from_env() -> Self {
        let config = ApiConfig::from_env().unwrap_or_else(|e| {
            crate::log_warn!("{e}; using the default API address");
            ApiConfig::default()
        });
        crate::log_info!("API base URL: {}", config.base_url());
        Self::new(config)
    }

    /// The application-wide client. Clones share one connection pool and cookie jar.
    pub fn shared() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            SHARED.clone()
        }
        #[cfg(target_arch = "wasm32")]
        {
            SHARED.with(ApiClient::clone)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let rb = self.client.request(method, self.config.endpoint(path));

        #[cfg(target_arch = "wasm32")]
        let rb = if self.config.with_credentials() {
            rb.fetch_credentials_include()
        } else {
            rb
        };

        rb
    }

    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let resp = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }

    /// Send `form` as `multipart/form-data` with PUT.
    pub async fn put_multipart<TRes: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<TRes, ApiError> {
        let resp = self
            .request(Method::PUT, path)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &ApiConfig) -> Client {
    Client::builder()
        .cookie_store(config.with_credentials())
        .build()
        .unwrap_or_else(|e| {
            crate::log_error!("failed to build HTTP client, cookies disabled: {e}");
            Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_client(_config: &ApiConfig) -> Client {
    Client::new()
}

async fn read_json<TRes: DeserializeOwned>(resp: Response) -> Result<TRes, ApiError> {
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

    if !status.is_success() {
        return Err(ApiError::Http {
            status: status.as_u16(),
            body: text,
        });
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
}

/// One field of the multipart body, before reqwest takes ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MultipartField {
    Text {
        name: &'static str,
        value: String,
    },
    File {
        name: &'static str,
        file_name: String,
        bytes: Vec<u8>,
        /// `None` when the picked file's type is not a valid MIME string.
        mime: Option<String>,
    },
}

fn profile_fields(update: &ProfileUpdate) -> Vec<MultipartField> {
    update
        .parts()
        .into_iter()
        .map(|part| match part {
            FormPart::Text { name, value } => MultipartField::Text {
                name,
                value: value.to_string(),
            },
            FormPart::File { name, file } => MultipartField::File {
                name,
                file_name: file.name.clone(),
                bytes: file.bytes.clone(),
                mime: Part::bytes(Vec::new())
                    .mime_str(&file.mime)
                    .ok()
                    .map(|_| file.mime.clone()),
            },
        })
        .collect()
}

/// Encode a profile update. An unparseable MIME type is sent without a content type.
pub fn profile_form(update: &ProfileUpdate) -> Form {
    profile_fields(update)
        .into_iter()
        .fold(Form::new(), |form, field| match field {
            MultipartField::Text { name, value } => form.text(name, value),
            MultipartField::File {
                name,
                file_name,
                bytes,
                mime,
            } => {
                let bare = || Part::bytes(bytes.clone()).file_name(file_name.clone());
                let part = match mime {
                    Some(mime) => bare().mime_str(&mime).unwrap_or_else(|_| bare()),
                    None => bare(),
                };
                form.part(name, part)
            }
        })
}

#[cfg(test)]
mod tests {
    use ulms_shared::profile::{AvatarFile, EditProfileForm, AVATAR_FIELD, FULL_NAME_FIELD};

    use super::*;

    fn update_with(avatar: Option<AvatarFile>) -> ProfileUpdate {
        let mut form = EditProfileForm::new();
        form.set_full_name("Alice Smith".to_string());
        if let Some(avatar) = avatar {
            form.attach_image(avatar);
        }
        form.to_update()
    }

    #[test]
    fn name_only_update_sends_a_single_text_field() {
        let fields = profile_fields(&update_with(None));
        assert_eq!(
            fields,
            vec![MultipartField::Text {
                name: FULL_NAME_FIELD,
                value: "Alice Smith".to_string(),
            }]
        );
    }

    #[test]
    fn picked_image_is_sent_as_a_typed_file() {
        let avatar = AvatarFile {
            name: "me.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        };
        let fields = profile_fields(&update_with(Some(avatar)));
        assert_eq!(fields.len(), 2);
        assert_eq!(
            fields[1],
            MultipartField::File {
                name: AVATAR_FIELD,
                file_name: "me.png".to_string(),
                bytes: vec![0x89, b'P', b'N', b'G'],
                mime: Some("image/png".to_string()),
            }
        );
    }

    #[test]
    fn malformed_mime_is_sent_untyped() {
        let avatar = AvatarFile {
            name: "odd.jpg".to_string(),
            mime: "not a mime".to_string(),
            bytes: vec![1, 2, 3],
        };
        let fields = profile_fields(&update_with(Some(avatar)));
        match &fields[1] {
            MultipartField::File { mime, bytes, .. } => {
                assert_eq!(*mime, None);
                assert_eq!(*bytes, vec![1, 2, 3]);
            }
            other => panic!("expected a file field, got {other:?}"),
        }
    }
}
