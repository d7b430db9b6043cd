//! Batch verification: the API payload and the panel it renders to.
//!
//! Manual entry and the simulated QR scan share one rendering path,
//! [`panel_for`]. They differ only in how transport and status failures are
//! reported.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const EMPTY_BATCH_MESSAGE: &str = "Please enter a batch number";
pub const CAMERA_REQUIRED_MESSAGE: &str =
    "Camera access is required for QR scanning. Please enable camera permissions.";
pub const DEFAULT_FAILURE_MESSAGE: &str = "This batch has expired.";
pub const EXPIRED_WARNING: &str = "⚠️ This medicine has expired. Do not use.";
pub const PHARMACY_NOT_ASSIGNED: &str = "Not assigned yet";
pub const UNKNOWN_MEDICINE: &str = "Unknown Medicine";

/// Body of `GET /api/verify-batch`. Every field but `success` may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    #[serde(default)]
    pub success: bool,
    pub is_authentic: Option<bool>,
    pub product_name: Option<String>,
    pub batch_number: Option<String>,
    pub manufacture_date: Option<String>,
    pub expiry_date: Option<String>,
    pub pharmacy_name: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
}

/// A decoded verification response together with its HTTP status.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReply {
    pub status: u16,
    pub result: VerificationResult,
}

impl VerificationReply {
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where a batch code came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationSource {
    Manual,
    Scan,
}

impl VerificationSource {
    /// Label of the submit button while the request is in flight.
    pub fn busy_label(self) -> &'static str {
        match self {
            VerificationSource::Manual => "Verifying...",
            VerificationSource::Scan => "Scanning...",
        }
    }
}

/// Trims and upper-cases user input; `None` when nothing is left.
pub fn normalize_batch_code(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// What the result area shows. Replaced wholesale by the next query.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPanel {
    Authentic {
        product_name: String,
        batch_number: String,
        manufacture_date: String,
        expiry_date: String,
        pharmacy_name: String,
    },
    Counterfeit {
        status_label: &'static str,
        message: String,
        entered_batch: String,
        expired: bool,
    },
    Notice {
        success: bool,
        message: String,
    },
}

impl ResultPanel {
    pub fn from_result(data: &VerificationResult, entered_batch: &str) -> Self {
        if data.success && data.is_authentic == Some(true) {
            return ResultPanel::Authentic {
                product_name: data
                    .product_name
                    .clone()
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| UNKNOWN_MEDICINE.to_string()),
                batch_number: data.batch_number.clone().unwrap_or_default(),
                manufacture_date: data.manufacture_date.clone().unwrap_or_default(),
                expiry_date: data.expiry_date.clone().unwrap_or_default(),
                pharmacy_name: data
                    .pharmacy_name
                    .clone()
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| PHARMACY_NOT_ASSIGNED.to_string()),
            };
        }

        let status_label = if data.is_authentic == Some(false) {
            "Not Authentic"
        } else {
            "Verification Failed"
        };
        let entered_batch = if entered_batch.is_empty() {
            data.batch_number.clone().unwrap_or_default()
        } else {
            entered_batch.to_string()
        };
        ResultPanel::Counterfeit {
            status_label,
            message: data
                .message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            entered_batch,
            expired: data.status.as_deref() == Some("Expired"),
        }
    }

    pub fn notice(success: bool, message: impl Into<String>) -> Self {
        ResultPanel::Notice {
            success,
            message: message.into(),
        }
    }

    pub fn is_authentic(&self) -> bool {
        match self {
            ResultPanel::Authentic { .. } => true,
            ResultPanel::Notice { success, .. } => *success,
            ResultPanel::Counterfeit { .. } => false,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ResultPanel::Authentic { .. } => "Medicine Verified",
            ResultPanel::Counterfeit { status_label, .. } => *status_label,
            ResultPanel::Notice { success: true, .. } => "Success",
            ResultPanel::Notice { success: false, .. } => "Error",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        if self.is_authentic() {
            "fas fa-check-circle"
        } else {
            "fas fa-exclamation-triangle"
        }
    }

    /// CSS modifier of the result container.
    pub fn css_class(&self) -> &'static str {
        if self.is_authentic() {
            "authentic-result"
        } else {
            "invalid-result"
        }
    }

    /// Detail lines in display order; the view styles them.
    pub fn detail_lines(&self) -> Vec<String> {
        match self {
            ResultPanel::Authentic {
                product_name,
                batch_number,
                manufacture_date,
                expiry_date,
                pharmacy_name,
            } => vec![
                format!("{product_name} is authentic and safe to use."),
                format!(
                    "Batch: {batch_number} | Manufacture: {manufacture_date} | Expiry: {expiry_date} | Pharmacy: {pharmacy_name}"
                ),
            ],
            ResultPanel::Counterfeit {
                message,
                entered_batch,
                expired,
                ..
            } => {
                let mut lines = vec![
                    "Counterfeit Suspected".to_string(),
                    message.clone(),
                    format!("Batch Entered: {entered_batch}"),
                ];
                if *expired {
                    lines.push(EXPIRED_WARNING.to_string());
                }
                lines
            }
            ResultPanel::Notice { message, .. } => vec![message.clone()],
        }
    }

    /// Plain-text rendering of the whole panel.
    pub fn text(&self) -> String {
        let mut out = self.title().to_string();
        for line in self.detail_lines() {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }
}

/// Maps the outcome of one verification request to the panel to show.
///
/// Manual entry renders whatever JSON the server sent, whatever the status
/// (unknown batches come back as 404 with a body). The scan path treats a
/// non-2xx status as an error.
pub fn panel_for(
    source: VerificationSource,
    entered_batch: &str,
    outcome: Result<VerificationReply, ApiError>,
) -> ResultPanel {
    match (source, outcome) {
        (VerificationSource::Manual, Ok(reply)) => {
            ResultPanel::from_result(&reply.result, entered_batch)
        }
        (VerificationSource::Manual, Err(err)) => ResultPanel::notice(
            false,
            format!("Connection error: {err}. Check if backend is running."),
        ),
        (VerificationSource::Scan, Ok(reply)) if !reply.is_success_status() => ResultPanel::notice(
            false,
            format!("QR Scan Error: Connection issue: {}", reply.status),
        ),
        (VerificationSource::Scan, Ok(reply)) => {
            ResultPanel::from_result(&reply.result, entered_batch)
        }
        (VerificationSource::Scan, Err(err)) => {
            ResultPanel::notice(false, format!("QR Scan Error: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reply(status: u16, json: &str) -> VerificationReply {
        VerificationReply {
            status,
            result: serde_json::from_str(json).unwrap(),
        }
    }

    #[test]
    fn authentic_panel_shows_product_and_batch() {
        let data = reply(
            200,
            r#"{"success":true,"isAuthentic":true,"productName":"DOLO","batchNumber":"PCM5112025","manufactureDate":"2025-01-01","expiryDate":"2026-01-01"}"#,
        );
        let panel = panel_for(VerificationSource::Manual, "PCM5112025", Ok(data));
        assert!(matches!(panel, ResultPanel::Authentic { .. }));
        let text = panel.text();
        assert!(text.contains("DOLO"));
        assert!(text.contains("PCM5112025"));
        assert!(text.contains("Pharmacy: Not assigned yet"));
        assert_eq!(panel.css_class(), "authentic-result");
    }

    #[test]
    fn expired_batch_renders_counterfeit_with_warning() {
        let data = reply(200, r#"{"success":false,"isAuthentic":false,"status":"Expired"}"#);
        let panel = panel_for(VerificationSource::Manual, "OLD123456", Ok(data));
        assert_eq!(panel.title(), "Not Authentic");
        assert_eq!(
            panel.detail_lines(),
            vec![
                "Counterfeit Suspected".to_string(),
                DEFAULT_FAILURE_MESSAGE.to_string(),
                "Batch Entered: OLD123456".to_string(),
                EXPIRED_WARNING.to_string(),
            ]
        );
        assert_eq!(panel.css_class(), "invalid-result");
    }

    #[test]
    fn missing_authenticity_is_a_failed_verification() {
        let data = reply(400, r#"{"success":false,"message":"Batch number is required"}"#);
        let panel = panel_for(VerificationSource::Manual, "", Ok(data));
        assert_eq!(panel.title(), "Verification Failed");
        assert!(panel.text().contains("Batch number is required"));
        assert!(!panel.text().contains(EXPIRED_WARNING));
    }

    #[test]
    fn authentic_but_expired_flag_still_counterfeit() {
        let data = reply(
            200,
            r#"{"success":true,"isAuthentic":false,"status":"Expired","batchNumber":"PCM1"}"#,
        );
        let panel = panel_for(VerificationSource::Manual, "", Ok(data));
        assert!(panel.text().contains("Batch Entered: PCM1"));
        assert!(panel.text().contains(EXPIRED_WARNING));
    }

    #[test]
    fn manual_path_renders_not_found_body() {
        let data = reply(
            404,
            r#"{"success":false,"isAuthentic":false,"message":"Batch number not found in database"}"#,
        );
        let panel = panel_for(VerificationSource::Manual, "NOPE0000", Ok(data));
        assert!(panel.text().contains("Batch number not found in database"));
    }

    #[test]
    fn scan_path_rejects_non_success_status() {
        let data = reply(404, r#"{"success":false}"#);
        let panel = panel_for(VerificationSource::Scan, "PCM5112025", Ok(data));
        assert_eq!(
            panel,
            ResultPanel::notice(false, "QR Scan Error: Connection issue: 404")
        );
    }

    #[test]
    fn transport_errors_become_notices() {
        let err = ApiError::Transport("Failed to fetch".into());
        let manual = panel_for(VerificationSource::Manual, "X", Err(err.clone()));
        assert_eq!(manual.title(), "Error");
        assert!(manual.text().contains("Connection error: Failed to fetch"));
        let scan = panel_for(VerificationSource::Scan, "X", Err(err));
        assert!(scan.text().contains("QR Scan Error: Failed to fetch"));
    }

    #[test]
    fn batch_codes_are_trimmed_and_uppercased() {
        assert_eq!(normalize_batch_code("  pcm5112025 "), Some("PCM5112025".into()));
        assert_eq!(normalize_batch_code("   "), None);
    }
}
