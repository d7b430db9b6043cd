//! Typed calls against the remote PharmaLedger API.
//!
//! The HTTP layer sits behind [`Transport`] so the browser build can use
//! `gloo-net` while tests script replies in memory.

use serde::de::DeserializeOwned;

use crate::config::SiteConfig;
use crate::error::ApiError;
use crate::model::registration::{
    ErrorReply, FieldCheckReply, ManufacturerReply, RegistrationReceipt, RegistrationReply,
    UniqueField,
};
use crate::model::verification::{VerificationReply, VerificationResult};
use crate::requests::{
    CHECK_FIELD_PATH, CheckFieldQuery, REGISTER_MANUFACTURER_PATH, REGISTER_PHARMACY_PATH,
    VERIFY_BATCH_PATH, VerifyBatchQuery,
};
use crate::validation::UploadedFile;
use crate::wizard::Flow;

/// A raw response: status, content type and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: Some("text/plain".to_string()),
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormPart<F> {
    Text(String),
    File(UploadedFile<F>),
}

/// Ordered multipart body. Multi-file fields repeat their name once per file.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartForm<F> {
    parts: Vec<(String, FormPart<F>)>,
}

impl<F> Default for MultipartForm<F> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<F> MultipartForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, name: &str, value: impl Into<String>) {
        self.parts
            .push((name.to_string(), FormPart::Text(value.into())));
    }

    pub fn push_file(&mut self, name: &str, file: UploadedFile<F>) {
        self.parts.push((name.to_string(), FormPart::File(file)));
    }

    pub fn parts(&self) -> &[(String, FormPart<F>)] {
        &self.parts
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(n, part)| match part {
            FormPart::Text(value) if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn files(&self, name: &str) -> Vec<&UploadedFile<F>> {
        self.parts
            .iter()
            .filter_map(|(n, part)| match part {
                FormPart::File(file) if n == name => Some(file),
                _ => None,
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parts.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// One-shot HTTP exchange. Implementations never retry.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Platform file handle carried by multipart bodies.
    type File;

    async fn get(&self, url: &str) -> Result<HttpReply, ApiError>;

    async fn post_multipart(
        &self,
        url: &str,
        form: &MultipartForm<Self::File>,
    ) -> Result<HttpReply, ApiError>;
}

pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn from_config(config: &SiteConfig, transport: T) -> Self {
        Self::new(config.api_base_url.clone(), transport)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str, query: Option<String>) -> String {
        match query {
            Some(q) => format!("{}{path}?{q}", self.base_url),
            None => format!("{}{path}", self.base_url),
        }
    }

    /// `GET /api/verify-batch`. Any JSON body is returned with its status;
    /// a non-JSON error body becomes [`ApiError::Status`].
    pub async fn verify_batch(&self, batch_code: &str) -> Result<VerificationReply, ApiError> {
        let query = VerifyBatchQuery {
            batch_number: batch_code,
        };
        let url = self.url(VERIFY_BATCH_PATH, Some(query.to_query()));
        log::debug!("Verifying batch {batch_code}");
        let reply = self.transport.get(&url).await?;
        match reply.decode::<VerificationResult>() {
            Ok(result) => Ok(VerificationReply {
                status: reply.status,
                result,
            }),
            Err(_) if !reply.is_success() => Err(ApiError::Status {
                status: reply.status,
                message: format!("Connection issue: {}", reply.status),
            }),
            Err(err) => Err(err),
        }
    }

    /// `GET /api/check-field`; `Ok(true)` when the value is already registered.
    pub async fn check_field(&self, field: UniqueField, value: &str) -> Result<bool, ApiError> {
        let query = CheckFieldQuery { field, value };
        let url = self.url(CHECK_FIELD_PATH, Some(query.to_query()));
        let reply = self.transport.get(&url).await?;
        if !reply.is_success() {
            return Err(ApiError::Status {
                status: reply.status,
                message: "Network response was not ok".to_string(),
            });
        }
        Ok(reply.decode::<FieldCheckReply>()?.exists)
    }

    /// `POST /api/register-pharmacy`. A non-2xx status carries the server's
    /// `error` text; a 2xx with `success: false` is [`ApiError::Rejected`].
    pub async fn register_pharmacy(
        &self,
        form: &MultipartForm<T::File>,
    ) -> Result<RegistrationReceipt, ApiError> {
        let url = self.url(REGISTER_PHARMACY_PATH, None);
        let reply = self.transport.post_multipart(&url, form).await?;
        if !reply.is_success() {
            let message = reply
                .decode::<ErrorReply>()
                .unwrap_or_default()
                .into_message("Registration failed");
            return Err(ApiError::Status {
                status: reply.status,
                message,
            });
        }
        let body: RegistrationReply = reply.decode()?;
        if !body.success {
            return Err(ApiError::Rejected(
                body.message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Registration failed".to_string()),
            ));
        }
        log::info!("Registration successful: {:?}", body.registration_id);
        Ok(RegistrationReceipt {
            message: body.message,
            registration_id: body.registration_id,
        })
    }

    /// `POST /api/register-manufacturer`. The body is decoded as JSON when the
    /// server says so and kept as text otherwise.
    pub async fn register_manufacturer(
        &self,
        form: &MultipartForm<T::File>,
    ) -> Result<ManufacturerReply, ApiError> {
        let url = self.url(REGISTER_MANUFACTURER_PATH, None);
        log::info!("Submitting manufacturer registration to {url}");
        let reply = self.transport.post_multipart(&url, form).await?;
        log::info!("Registration response status: {}", reply.status);
        let body = if reply.is_json() {
            ManufacturerReply::Json(reply.decode()?)
        } else {
            ManufacturerReply::Text(reply.body_text())
        };
        if !reply.is_success() {
            let message = match &body {
                ManufacturerReply::Json(value) => value
                    .get("error")
                    .or_else(|| value.get("message"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("Registration failed")
                    .to_string(),
                ManufacturerReply::Text(text) if !text.trim().is_empty() => text.clone(),
                ManufacturerReply::Text(_) => "Registration failed".to_string(),
            };
            return Err(ApiError::Status {
                status: reply.status,
                message,
            });
        }
        Ok(body)
    }

    /// Submits a finished wizard to the endpoint of its flow.
    pub async fn submit_registration(
        &self,
        flow: Flow,
        form: &MultipartForm<T::File>,
    ) -> Result<RegistrationReceipt, ApiError> {
        match flow {
            Flow::Pharmacy => self.register_pharmacy(form).await,
            Flow::Manufacturer => {
                let reply = self.register_manufacturer(form).await?;
                log::info!("Registration response: {reply:?}");
                Ok(receipt_from_manufacturer(&reply))
            }
        }
    }
}

fn receipt_from_manufacturer(reply: &ManufacturerReply) -> RegistrationReceipt {
    match reply {
        ManufacturerReply::Json(value) => {
            let field = |key: &str| value.get(key).and_then(|v| v.as_str()).map(str::to_string);
            RegistrationReceipt {
                message: field("message"),
                registration_id: field("registration_id"),
            }
        }
        ManufacturerReply::Text(_) => RegistrationReceipt::default(),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned replies in order and records every request URL.
    #[derive(Default)]
    pub struct ScriptedTransport {
        pub replies: RefCell<VecDeque<Result<HttpReply, ApiError>>>,
        pub requests: RefCell<Vec<String>>,
    }

    impl ScriptedTransport {
        pub fn with(replies: Vec<Result<HttpReply, ApiError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                requests: RefCell::default(),
            }
        }

        fn next(&self, url: &str) -> Result<HttpReply, ApiError> {
            self.requests.borrow_mut().push(url.to_string());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".into())))
        }
    }

    impl Transport for ScriptedTransport {
        type File = ();

        async fn get(&self, url: &str) -> Result<HttpReply, ApiError> {
            self.next(url)
        }

        async fn post_multipart(
            &self,
            url: &str,
            _form: &MultipartForm<()>,
        ) -> Result<HttpReply, ApiError> {
            self.next(url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedTransport;
    use super::*;
    use pretty_assertions::assert_eq;

    fn client(replies: Vec<Result<HttpReply, ApiError>>) -> ApiClient<ScriptedTransport> {
        ApiClient::new("http://api.test", ScriptedTransport::with(replies))
    }

    #[tokio::test]
    async fn verify_batch_builds_query_and_keeps_status() {
        let api = client(vec![Ok(HttpReply::json(
            404,
            r#"{"success":false,"isAuthentic":false,"message":"Batch number not found in database"}"#,
        ))]);
        let reply = api.verify_batch("PCM5112025").await.unwrap();
        assert_eq!(reply.status, 404);
        assert_eq!(reply.result.is_authentic, Some(false));
        assert_eq!(
            api.transport().requests.borrow()[0],
            "http://api.test/api/verify-batch?batch_number=PCM5112025"
        );
    }

    #[tokio::test]
    async fn verify_batch_non_json_error_is_a_status_error() {
        let api = client(vec![Ok(HttpReply::text(502, "Bad Gateway"))]);
        let err = api.verify_batch("X").await.unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.to_string(), "Connection issue: 502");
    }

    #[tokio::test]
    async fn check_field_reads_exists() {
        let api = client(vec![
            Ok(HttpReply::json(200, r#"{"exists":true}"#)),
            Ok(HttpReply::json(200, r#"{}"#)),
            Ok(HttpReply::json(500, r#"{"error":"db down"}"#)),
        ]);
        assert_eq!(api.check_field(UniqueField::Email, "a@b.in").await, Ok(true));
        assert_eq!(api.check_field(UniqueField::Phone, "9876543210").await, Ok(false));
        assert!(api.check_field(UniqueField::License, "LIC-1").await.is_err());
        assert_eq!(
            api.transport().requests.borrow()[0],
            "http://api.test/api/check-field?field=email&value=a%40b.in"
        );
    }

    #[tokio::test]
    async fn pharmacy_error_body_becomes_message() {
        let api = client(vec![Ok(HttpReply::json(409, r#"{"error":"Duplicate GSTIN"}"#))]);
        let err = api.register_pharmacy(&MultipartForm::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "Duplicate GSTIN");
    }

    #[tokio::test]
    async fn pharmacy_unparseable_error_falls_back() {
        let api = client(vec![Ok(HttpReply::text(500, "oops"))]);
        let err = api.register_pharmacy(&MultipartForm::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "Registration failed");
    }

    #[tokio::test]
    async fn pharmacy_success_false_is_rejected() {
        let api = client(vec![Ok(HttpReply::json(
            200,
            r#"{"success":false,"message":"Try later"}"#,
        ))]);
        let err = api.register_pharmacy(&MultipartForm::new()).await.unwrap_err();
        assert_eq!(err, ApiError::Rejected("Try later".into()));
    }

    #[tokio::test]
    async fn pharmacy_success_returns_receipt() {
        let api = client(vec![Ok(HttpReply::json(
            201,
            r#"{"success":true,"message":"Registered","registration_id":"PHM-1"}"#,
        ))]);
        let receipt = api
            .submit_registration(Flow::Pharmacy, &MultipartForm::new())
            .await
            .unwrap();
        assert_eq!(receipt.registration_id.as_deref(), Some("PHM-1"));
    }

    #[tokio::test]
    async fn manufacturer_text_body_is_kept() {
        let api = client(vec![Ok(HttpReply::text(200, "queued"))]);
        let reply = api.register_manufacturer(&MultipartForm::new()).await.unwrap();
        assert_eq!(reply, ManufacturerReply::Text("queued".into()));
    }

    #[tokio::test]
    async fn manufacturer_error_status_surfaces_server_error() {
        let api = client(vec![Ok(HttpReply::json(400, r#"{"error":"GSTIN exists"}"#))]);
        let err = api
            .submit_registration(Flow::Manufacturer, &MultipartForm::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "GSTIN exists");
    }

    #[test]
    fn multipart_repeats_file_fields() {
        let mut form = MultipartForm::new();
        form.push_text("company-name", "Acme");
        form.push_file("other-documents", UploadedFile::descriptor("a.pdf", 1, "application/pdf"));
        form.push_file("other-documents", UploadedFile::descriptor("b.pdf", 1, "application/pdf"));
        assert_eq!(form.text("company-name"), Some("Acme"));
        assert_eq!(form.files("other-documents").len(), 2);
        assert_eq!(form.len(), 3);
    }
}
