use std::cell::RefCell;
use std::collections::VecDeque;

use chrono::NaiveDate;
use common::api::{ApiClient, HttpReply, MultipartForm, Transport};
use common::error::ApiError;
use common::store::{KeyValueStore, MemoryStore, REGISTRATION_COMPLETED_KEY, mark_registration_completed};
use common::validation::{MIB, UploadedFile};
use common::wizard::manufacturer::MANUFACTURER_SUCCESS_ALERT;
use common::wizard::{Flow, Phase, StepChange, SubmitBlocked, SubmitOutcome, Wizard};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct FakeServer {
    replies: RefCell<VecDeque<Result<HttpReply, ApiError>>>,
    seen: RefCell<Vec<(String, usize)>>,
}

impl FakeServer {
    fn replying(replies: Vec<Result<HttpReply, ApiError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            seen: RefCell::default(),
        }
    }

    fn pop(&self) -> Result<HttpReply, ApiError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("unexpected request".into())))
    }
}

impl Transport for FakeServer {
    type File = ();

    async fn get(&self, url: &str) -> Result<HttpReply, ApiError> {
        self.seen.borrow_mut().push((url.to_string(), 0));
        self.pop()
    }

    async fn post_multipart(&self, url: &str, form: &MultipartForm<()>) -> Result<HttpReply, ApiError> {
        self.seen.borrow_mut().push((url.to_string(), form.len()));
        self.pop()
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn pdf(name: &str, size: u64) -> UploadedFile<()> {
    UploadedFile::descriptor(name, size, "application/pdf")
}

fn manufacturer_at_review() -> Wizard<()> {
    let mut w = Wizard::for_flow(Flow::Manufacturer);
    w.set_text("company-name", "Acme Pharma");
    w.set_text("gstin", "22AAAAA0000A1Z5");
    assert_eq!(w.next(today()), StepChange::Moved(2));

    w.set_text("license-number", "MFG-2025-001");
    w.set_text("license-authority", "cdsco");
    w.set_text("license-expiry", "2027-01-31");
    w.set_text("factory-address", "Plot 4, MIDC Bhosari, Pune");
    w.set_checked("same-address", true);
    assert_eq!(w.next(today()), StepChange::Moved(3));

    w.set_text("contact-name", "Ravi Kumar");
    w.set_text("contact-designation", "Compliance Head");
    w.set_text("contact-phone", "+91 98765 43210");
    w.set_text("contact-email", "ravi@acme.in");
    w.set_text("password", "Secret#123");
    w.set_text(
        "company-profile",
        "Acme Pharma manufactures generic analgesics and antipyretics since 1998.",
    );
    assert!(w.select_files("license-document", vec![pdf("license.pdf", 2 * MIB)]).is_empty());
    assert_eq!(w.next(today()), StepChange::Moved(4));
    w
}

fn pharmacy_at_review() -> Wizard<()> {
    let mut w = Wizard::for_flow(Flow::Pharmacy);
    w.set_text("pharmacy-name", "Apollo Pharmacy");
    w.set_text("pharmacy-type", "retail");
    w.set_text("gstin", "27AAPFU0939F1ZV");
    w.set_text("pharmacy-address", "12 MG Road, Bengaluru");
    assert_eq!(w.next(today()), StepChange::Moved(2));

    w.set_text("license-number", "KA-BNG-20B-1234");
    w.set_text("license-authority", "Karnataka Drugs Control Department");
    w.set_text("license-expiry", "2026-12-31");
    assert_eq!(w.next(today()), StepChange::Moved(3));

    w.set_text("owner-name", "Meera Rao");
    w.set_text("contact-name", "Meera Rao");
    w.set_text("contact-phone", "+91 9876543210");
    w.set_text("contact-email", "meera@apollo.in");
    w.set_text("password", "Secret#123");
    w.set_text("confirm-password", "Secret#123");
    assert_eq!(w.next(today()), StepChange::Moved(4));

    w.select_files("license-document", vec![pdf("license.pdf", MIB)]);
    w.select_files("pharmacist-certificate", vec![pdf("cert.pdf", MIB)]);
    assert_eq!(w.next(today()), StepChange::Moved(5));
    w
}

#[test]
fn next_is_blocked_until_required_fields_are_valid() {
    let mut w: Wizard<()> = Wizard::for_flow(Flow::Manufacturer);
    w.set_text("company-name", "Acme Pharma");
    assert_eq!(
        w.next(today()),
        StepChange::Blocked {
            alert: Some("Please fill in all required fields correctly before proceeding.")
        }
    );
    assert_eq!(w.current_step(), 1);
    assert_eq!(w.status("gstin").error(), Some("GSTIN is required"));

    w.set_text("gstin", "1234");
    assert!(matches!(w.next(today()), StepChange::Blocked { .. }));
    assert_eq!(
        w.status("gstin").error(),
        Some("Please enter a valid GSTIN (e.g., 22AAAAA0000A1Z5)")
    );

    w.set_text("gstin", "22AAAAA0000A1Z5");
    assert_eq!(w.next(today()), StepChange::Moved(2));
}

#[test]
fn previous_keeps_entered_data() {
    let mut w: Wizard<()> = Wizard::for_flow(Flow::Manufacturer);
    w.set_text("company-name", "Acme Pharma");
    w.set_text("gstin", "22AAAAA0000A1Z5");
    w.next(today());
    w.set_text("license-number", "MFG-1");
    assert_eq!(w.previous(), StepChange::Moved(1));
    assert_eq!(w.text("company-name"), "Acme Pharma");
    assert_eq!(w.previous(), StepChange::Unchanged);
    w.next(today());
    assert_eq!(w.text("license-number"), "MFG-1");
}

#[test]
fn license_expiry_today_is_rejected_and_tomorrow_accepted() {
    let mut w: Wizard<()> = Wizard::for_flow(Flow::Manufacturer);
    w.set_text("license-expiry", "2025-06-15");
    w.blur("license-expiry", today());
    assert_eq!(
        w.status("license-expiry").error(),
        Some("License expiry date must be in the future")
    );
    w.set_text("license-expiry", "2025-06-16");
    w.blur("license-expiry", today());
    assert!(!w.status("license-expiry").is_invalid());
}

#[test]
fn oversized_upload_is_refused_alone() {
    let mut w: Wizard<()> = Wizard::for_flow(Flow::Pharmacy);
    w.select_files("other-documents", vec![pdf("a.pdf", MIB)]);
    let rejected = w.select_files(
        "other-documents",
        vec![pdf("b.pdf", MIB), pdf("huge.pdf", 6 * MIB)],
    );
    assert_eq!(rejected.len(), 1);
    assert_eq!(
        rejected[0].to_string(),
        "File huge.pdf is too large. Maximum size is 5MB."
    );
    let names: Vec<_> = w.files("other-documents").iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.pdf", "b.pdf"]);
}

#[test]
fn fully_refused_selection_keeps_previous_files() {
    let mut w: Wizard<()> = Wizard::for_flow(Flow::Manufacturer);
    w.select_files("other-documents", vec![pdf("a.pdf", MIB)]);
    let rejected = w.select_files("other-documents", vec![pdf("huge.pdf", 6 * MIB)]);
    assert_eq!(rejected.len(), 1);
    let names: Vec<_> = w.files("other-documents").iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.pdf"]);
}

#[test]
fn manufacturer_review_uses_labels_and_placeholders() {
    let w = manufacturer_at_review();
    let review = w.review();
    assert_eq!(review.len(), 3);
    assert_eq!(review[0].value("PAN"), Some("Not provided"));
    assert_eq!(
        review[1].value("License Authority"),
        Some("Central Drugs Standard Control Organization (CDSCO)")
    );
    assert_eq!(review[2].value("Email"), Some("ravi@acme.in"));
}

#[test]
fn pharmacy_review_lists_documents() {
    let w = pharmacy_at_review();
    let review = w.review();
    assert_eq!(review[0].value("Operating Hours"), Some("Not specified"));
    assert_eq!(review[1].value("Other Certifications"), Some("None"));
    assert_eq!(review[3].value("License Document"), Some("Uploaded"));
    assert_eq!(review[3].value("Other Documents"), None);
}

#[tokio::test]
async fn uniqueness_hit_marks_field_and_blocks_next() {
    let api = ApiClient::new(
        "http://api.test",
        FakeServer::replying(vec![Ok(HttpReply::json(200, r#"{"exists":true}"#))]),
    );
    let mut w: Wizard<()> = Wizard::for_flow(Flow::Manufacturer);
    w.set_text("company-name", "Acme Pharma");
    w.set_text("gstin", "22AAAAA0000A1Z5");
    w.next(today());
    w.set_text("license-number", "MFG-2025-001");

    let query = w.blur("license-number", today()).expect("license is checked");
    assert!(w.is_checking("license-number"));
    let taken = api.check_field(query.kind, &query.value).await;
    w.finish_uniqueness_check(&query, taken);

    assert!(!w.is_checking("license-number"));
    assert_eq!(
        w.status("license-number").error(),
        Some("This License Number is already registered")
    );
    assert!(matches!(w.next(today()), StepChange::Blocked { .. }));
    assert_eq!(
        api.transport().seen.borrow()[0].0,
        "http://api.test/api/check-field?field=license&value=MFG-2025-001"
    );
}

#[test]
fn stale_uniqueness_answer_is_dropped() {
    let mut w: Wizard<()> = Wizard::for_flow(Flow::Manufacturer);
    w.set_text("contact-email", "old@acme.in");
    let query = w.blur("contact-email", today()).unwrap();
    w.set_text("contact-email", "new@acme.in");
    w.finish_uniqueness_check(&query, Ok(true));
    assert!(!w.status("contact-email").is_invalid());
}

#[test]
fn failed_uniqueness_lookup_leaves_field_valid() {
    let mut w: Wizard<()> = Wizard::for_flow(Flow::Manufacturer);
    w.set_text("contact-phone", "+91 98765 43210");
    let query = w.blur("contact-phone", today()).unwrap();
    w.finish_uniqueness_check(&query, Err(ApiError::Transport("offline".into())));
    assert!(!w.status("contact-phone").is_invalid());
}

#[test]
fn pharmacy_submit_requires_all_confirmations() {
    let mut w = pharmacy_at_review();
    assert_eq!(
        w.prepare_submission().unwrap_err().alert(),
        Some("Please confirm the declaration")
    );
    w.set_checked("declaration", true);
    assert_eq!(
        w.prepare_submission().unwrap_err(),
        SubmitBlocked::Unconfirmed("Please accept the terms and conditions")
    );
    w.set_checked("terms", true);
    assert_eq!(
        w.prepare_submission().unwrap_err().alert(),
        Some("Please confirm compliance with regulations")
    );
    w.set_checked("compliance", true);
    assert!(w.prepare_submission().is_ok());
    assert_eq!(w.phase(), Phase::Submitting);
    assert_eq!(w.prepare_submission().unwrap_err(), SubmitBlocked::InProgress);
}

#[tokio::test]
async fn pharmacy_duplicate_gstin_alerts_and_stays_editable() {
    let api = ApiClient::new(
        "http://api.test",
        FakeServer::replying(vec![Ok(HttpReply::json(409, r#"{"error":"Duplicate GSTIN"}"#))]),
    );
    let mut w = pharmacy_at_review();
    for name in ["declaration", "terms", "compliance"] {
        w.set_checked(name, true);
    }
    let form = w.prepare_submission().unwrap();
    let result = api.submit_registration(Flow::Pharmacy, &form).await;
    let outcome = w.finish_submission(result);

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            alert: "Registration failed: Duplicate GSTIN".into()
        }
    );
    assert_eq!(w.phase(), Phase::Editing);
    assert!(w.receipt().is_none());
}

#[tokio::test]
async fn pharmacy_success_marks_completion() {
    let api = ApiClient::new(
        "http://api.test",
        FakeServer::replying(vec![Ok(HttpReply::json(
            201,
            r#"{"success":true,"message":"ok","registration_id":"PHM-7"}"#,
        ))]),
    );
    let mut w = pharmacy_at_review();
    for name in ["declaration", "terms", "compliance"] {
        w.set_checked(name, true);
    }
    let form = w.prepare_submission().unwrap();
    assert_eq!(form.text("pharmacy-type"), Some("retail"));
    assert_eq!(form.text("compliance"), Some("true"));
    assert_eq!(form.files("pharmacist-certificate").len(), 1);

    let outcome = w.finish_submission(api.submit_registration(Flow::Pharmacy, &form).await);
    let SubmitOutcome::Succeeded { marks_completion, .. } = outcome else {
        panic!("expected success, got {outcome:?}");
    };
    assert!(marks_completion);
    let mut storage = MemoryStore::new();
    mark_registration_completed(&mut storage, Flow::Pharmacy.as_str());
    assert_eq!(storage.get(REGISTRATION_COMPLETED_KEY).as_deref(), Some("pharmacy"));
    assert_eq!(w.phase(), Phase::Submitted);
    assert_eq!(
        w.receipt().and_then(|r| r.registration_id.as_deref()),
        Some("PHM-7")
    );
}

/// The manufacturer flow shows its success panel even when the request never
/// reached the server. This differs from the pharmacy flow on purpose and is
/// pinned here so a change is noticed.
#[tokio::test]
async fn manufacturer_reports_success_even_when_connection_is_refused() {
    let api = ApiClient::new(
        "http://api.test",
        FakeServer::replying(vec![Err(ApiError::Transport("Connection refused".into()))]),
    );
    let mut w = manufacturer_at_review();
    let form = w.prepare_submission().unwrap();
    assert!(!form.contains("registered-address"));
    assert_eq!(form.text("same-address"), Some("true"));

    let outcome = w.finish_submission(api.submit_registration(Flow::Manufacturer, &form).await);
    assert_eq!(
        outcome,
        SubmitOutcome::Succeeded {
            alert: Some(MANUFACTURER_SUCCESS_ALERT),
            marks_completion: false,
        }
    );
    assert_eq!(w.phase(), Phase::Submitted);
}

#[test]
fn submit_is_only_possible_from_review() {
    let mut w: Wizard<()> = Wizard::for_flow(Flow::Pharmacy);
    assert_eq!(w.prepare_submission().unwrap_err(), SubmitBlocked::NotOnReviewStep);
}
