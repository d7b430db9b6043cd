use serde::{Deserialize, Serialize};

/// Body of a 2xx `POST /api/register-pharmacy`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RegistrationReply {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub registration_id: Option<String>,
}

/// Body of a non-2xx registration response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ErrorReply {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorReply {
    pub fn into_message(self, fallback: &str) -> String {
        self.error
            .or(self.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Body of `GET /api/check-field`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldCheckReply {
    #[serde(default)]
    pub exists: bool,
}

/// Field kinds the uniqueness endpoint understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    Phone,
    License,
}

impl UniqueField {
    pub fn as_str(self) -> &'static str {
        match self {
            UniqueField::Email => "email",
            UniqueField::Phone => "phone",
            UniqueField::License => "license",
        }
    }
}

/// What a finished registration tells the success panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationReceipt {
    pub message: Option<String>,
    pub registration_id: Option<String>,
}

/// Logged-only body of `POST /api/register-manufacturer`.
#[derive(Debug, Clone, PartialEq)]
pub enum ManufacturerReply {
    Json(serde_json::Value),
    Text(String),
}
