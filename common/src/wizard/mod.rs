//! Multi-step registration wizard.
//!
//! A [`Wizard`] walks one [`FlowSpec`]: it keeps the live input values
//! (`drafts`), the values saved whenever a step is left forward or by a jump
//! (`collected`), per-field validation status, and the submit phase. It never
//! performs I/O. The component hands uniqueness queries and the multipart
//! body to the API client and feeds the results back.
//!
//! `F` is the platform file handle (`web_sys::File` in the browser).

mod flow;
pub mod manufacturer;
pub mod pharmacy;
mod review;

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use thiserror::Error;

use crate::api::MultipartForm;
use crate::error::ApiError;
use crate::model::registration::{RegistrationReceipt, UniqueField};
use crate::validation::{FileRejection, PasswordStrength, UploadedFile};

pub use flow::{
    CharCounter, CounterTone, FieldKind, FieldSpec, Flow, FlowSpec, MessageStyle, MirrorField,
    ReviewSectionSpec, ReviewValue, SelectOption, StepSpec, SubmitPolicy,
};
pub use review::{ReviewItem, ReviewSection, build_review};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<F> {
    Text(String),
    Checked(bool),
    Files(Vec<UploadedFile<F>>),
}

impl<F> FieldValue<F> {
    fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Checkbox => FieldValue::Checked(false),
            FieldKind::File(_) => FieldValue::Files(Vec::new()),
            _ => FieldValue::Text(String::new()),
        }
    }

    /// The string a [`crate::validation::ValidationRule`] sees.
    fn rule_input(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Checked(true) => "on".to_string(),
            FieldValue::Checked(false) => String::new(),
            FieldValue::Files(files) => files.first().map(|f| f.name.clone()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldValues<F> {
    values: BTreeMap<&'static str, FieldValue<F>>,
}

impl<F> Default for FieldValues<F> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<F> FieldValues<F> {
    pub fn get(&self, name: &str) -> Option<&FieldValue<F>> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    pub fn checked(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(FieldValue::Checked(true)))
    }

    pub fn files(&self, name: &str) -> &[UploadedFile<F>] {
        match self.values.get(name) {
            Some(FieldValue::Files(files)) => files,
            _ => &[],
        }
    }

    pub fn insert(&mut self, name: &'static str, value: FieldValue<F>) {
        self.values.insert(name, value);
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut FieldValue<F>> {
        self.values.get_mut(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldStatus {
    pub fn error(&self) -> Option<&str> {
        match self {
            FieldStatus::Invalid(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }
}

static UNTOUCHED: FieldStatus = FieldStatus::Untouched;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMarker {
    Completed,
    Active,
    Upcoming,
}

/// What the primary keyboard shortcut does on the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Next,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepChange {
    Moved(usize),
    Blocked { alert: Option<&'static str> },
    Unchanged,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("Registration can only be submitted from the review step")]
    NotOnReviewStep,
    #[error("{0}")]
    Unconfirmed(&'static str),
    #[error("Registration is already being submitted")]
    InProgress,
    #[error("Registration was already submitted")]
    AlreadySubmitted,
}

impl SubmitBlocked {
    /// Text for a blocking alert, when the user has something to fix.
    pub fn alert(&self) -> Option<&'static str> {
        match self {
            SubmitBlocked::Unconfirmed(alert) => Some(*alert),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Show the success panel. `marks_completion` asks for the completion flag.
    Succeeded {
        alert: Option<&'static str>,
        marks_completion: bool,
    },
    /// Alert and keep the form editable.
    Failed { alert: String },
    /// No submission was in flight.
    Ignored,
}

/// An in-flight uniqueness lookup for one field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniquenessQuery {
    pub field: &'static str,
    pub kind: UniqueField,
    pub value: String,
}

pub struct Wizard<F> {
    spec: &'static FlowSpec,
    step: usize,
    phase: Phase,
    drafts: FieldValues<F>,
    collected: FieldValues<F>,
    statuses: BTreeMap<&'static str, FieldStatus>,
    checking: BTreeSet<&'static str>,
    /// Values the server reported as already registered.
    taken: BTreeMap<&'static str, String>,
    disabled: BTreeSet<&'static str>,
    review: Vec<ReviewSection>,
    receipt: Option<RegistrationReceipt>,
}

impl<F: Clone> Wizard<F> {
    pub fn new(spec: &'static FlowSpec) -> Self {
        let mut drafts = FieldValues::default();
        for field in spec.fields() {
            drafts.insert(field.name, FieldValue::empty(field.kind));
        }
        Self {
            spec,
            step: 1,
            phase: Phase::Editing,
            drafts,
            collected: FieldValues::default(),
            statuses: BTreeMap::new(),
            checking: BTreeSet::new(),
            taken: BTreeMap::new(),
            disabled: BTreeSet::new(),
            review: Vec::new(),
            receipt: None,
        }
    }

    pub fn for_flow(flow: Flow) -> Self {
        Self::new(flow.spec())
    }

    pub fn spec(&self) -> &'static FlowSpec {
        self.spec
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.spec.total_steps()
    }

    pub fn is_final_step(&self) -> bool {
        self.step == self.total_steps()
    }

    pub fn step_spec(&self) -> &'static StepSpec {
        &self.spec.steps[self.step - 1]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn step_marker(&self, index: usize) -> StepMarker {
        match index.cmp(&self.step) {
            std::cmp::Ordering::Less => StepMarker::Completed,
            std::cmp::Ordering::Equal => StepMarker::Active,
            std::cmp::Ordering::Greater => StepMarker::Upcoming,
        }
    }

    pub fn can_jump_to(&self, index: usize) -> bool {
        self.spec.allow_jump && self.phase == Phase::Editing && index >= 1 && index < self.step
    }

    pub fn primary_action(&self) -> PrimaryAction {
        if self.is_final_step() {
            PrimaryAction::Submit
        } else {
            PrimaryAction::Next
        }
    }

    pub fn text(&self, name: &str) -> &str {
        self.drafts.text(name)
    }

    pub fn checked(&self, name: &str) -> bool {
        self.drafts.checked(name)
    }

    pub fn files(&self, name: &str) -> &[UploadedFile<F>] {
        self.drafts.files(name)
    }

    pub fn collected(&self) -> &FieldValues<F> {
        &self.collected
    }

    pub fn status(&self, name: &str) -> &FieldStatus {
        self.statuses.get(name).unwrap_or(&UNTOUCHED)
    }

    pub fn is_checking(&self, name: &str) -> bool {
        self.checking.contains(name)
    }

    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.contains(name)
    }

    pub fn review(&self) -> &[ReviewSection] {
        &self.review
    }

    pub fn receipt(&self) -> Option<&RegistrationReceipt> {
        self.receipt.as_ref()
    }

    pub fn char_count(&self, name: &str) -> usize {
        self.drafts.text(name).chars().count()
    }

    /// Meter for the flow's password field; `None` while it is empty.
    pub fn password_strength(&self) -> Option<PasswordStrength> {
        let password = self.drafts.text("password");
        (!password.is_empty()).then(|| PasswordStrength::evaluate(password))
    }

    /// `Some(true)` when the confirmation matches, `None` while it is empty.
    pub fn passwords_match(&self) -> Option<bool> {
        let (password, confirm) = self.spec.password_pair?;
        let confirmation = self.drafts.text(confirm);
        (!confirmation.is_empty()).then(|| confirmation == self.drafts.text(password))
    }

    fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        let field = self.spec.field(name);
        if field.is_none() {
            log::warn!("{} form has no field named {name}", self.spec.flow.as_str());
        }
        field
    }

    /// Replaces a text value and clears its error.
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        let Some(field) = self.field(name) else {
            return;
        };
        let value = value.into();
        self.statuses.remove(field.name);
        if let Some(mirror) = self.spec.mirror {
            if field.name == mirror.source && self.drafts.checked(mirror.toggle) {
                self.drafts
                    .insert(mirror.target, FieldValue::Text(value.clone()));
            }
        }
        self.drafts.insert(field.name, FieldValue::Text(value));
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) {
        let Some(field) = self.field(name) else {
            return;
        };
        self.statuses.remove(field.name);
        self.drafts.insert(field.name, FieldValue::Checked(checked));
        let Some(mirror) = self.spec.mirror else {
            return;
        };
        if field.name != mirror.toggle {
            return;
        }
        if checked {
            let source = self.drafts.text(mirror.source).to_string();
            self.drafts.insert(mirror.target, FieldValue::Text(source));
            self.statuses.remove(mirror.target);
            self.disabled.insert(mirror.target);
        } else {
            self.disabled.remove(mirror.target);
        }
    }

    /// Validates a field on focus loss. Returns the uniqueness lookup to run
    /// when the field has one and its value passed the local rules.
    pub fn blur(&mut self, name: &str, today: NaiveDate) -> Option<UniquenessQuery> {
        let field = self.field(name)?;
        if self.phase != Phase::Editing {
            return None;
        }
        if !self.spec.blur_validates_empty && self.drafts.text(field.name).trim().is_empty() {
            return None;
        }
        if !self.validate_field(field, today) {
            return None;
        }
        let kind = self.spec.unique_kind(field.name)?;
        let value = self.drafts.text(field.name).trim().to_string();
        if value.is_empty() || self.taken.get(field.name) == Some(&value) {
            return None;
        }
        self.checking.insert(field.name);
        Some(UniquenessQuery {
            field: field.name,
            kind,
            value,
        })
    }

    /// Applies a uniqueness answer. Answers for a value the user has since
    /// changed are dropped, and lookup failures leave the field valid.
    pub fn finish_uniqueness_check(
        &mut self,
        query: &UniquenessQuery,
        result: Result<bool, ApiError>,
    ) {
        self.checking.remove(query.field);
        if self.drafts.text(query.field).trim() != query.value {
            log::debug!("Dropping stale uniqueness answer for {}", query.field);
            return;
        }
        match result {
            Ok(true) => {
                self.taken.insert(query.field, query.value.clone());
                let label = self.spec.field(query.field).map_or(query.field, |f| f.label);
                self.statuses.insert(
                    query.field,
                    FieldStatus::Invalid(format!("This {label} is already registered")),
                );
            }
            Ok(false) => {
                self.statuses.insert(query.field, FieldStatus::Valid);
            }
            Err(err) => log::warn!("Async validation error for {}: {err}", query.field),
        }
    }

    fn evaluate(&self, field: &FieldSpec, today: NaiveDate) -> Result<(), String> {
        let input = self
            .drafts
            .get(field.name)
            .map(FieldValue::rule_input)
            .unwrap_or_default();
        let trimmed = input.trim();

        if let Some(rule) = field.rule {
            rule.check(&input, today)
                .map_err(|v| self.spec.message_for(field, v))?;
        }
        if let FieldKind::Select(options) = field.kind {
            if !trimmed.is_empty() && !options.iter().any(|o| o.value == trimmed) {
                return Err(self
                    .spec
                    .message_for(field, crate::validation::Violation::UnknownOption));
            }
        }
        if let Some((password, confirm)) = self.spec.password_pair {
            if field.name == confirm && !input.is_empty() && input != self.drafts.text(password) {
                return Err(self
                    .spec
                    .message_for(field, crate::validation::Violation::PasswordMismatch));
            }
        }
        if self.taken.get(field.name).is_some_and(|v| v == trimmed) {
            return Err(format!("This {} is already registered", field.label));
        }
        Ok(())
    }

    fn validate_field(&mut self, field: &'static FieldSpec, today: NaiveDate) -> bool {
        if self.disabled.contains(field.name) {
            self.statuses.remove(field.name);
            return true;
        }
        match self.evaluate(field, today) {
            Ok(()) => {
                self.statuses.insert(field.name, FieldStatus::Valid);
                true
            }
            Err(message) => {
                self.statuses
                    .insert(field.name, FieldStatus::Invalid(message));
                false
            }
        }
    }

    /// Validates every field of the current step, marking each one.
    pub fn validate_current_step(&mut self, today: NaiveDate) -> bool {
        let mut valid = true;
        for field in self.step_spec().fields {
            valid &= self.validate_field(field, today);
        }
        valid
    }

    pub fn next(&mut self, today: NaiveDate) -> StepChange {
        if self.phase != Phase::Editing || self.is_final_step() {
            return StepChange::Unchanged;
        }
        if !self.validate_current_step(today) {
            return StepChange::Blocked {
                alert: self.spec.blocked_alert,
            };
        }
        self.save_step();
        self.step += 1;
        self.enter_step();
        StepChange::Moved(self.step)
    }

    pub fn previous(&mut self) -> StepChange {
        if self.phase != Phase::Editing || self.step == 1 {
            return StepChange::Unchanged;
        }
        self.step -= 1;
        StepChange::Moved(self.step)
    }

    /// Jumps back to a completed step via its progress marker.
    pub fn jump_to(&mut self, index: usize) -> StepChange {
        if !self.can_jump_to(index) {
            return StepChange::Unchanged;
        }
        self.save_step();
        self.step = index;
        self.enter_step();
        StepChange::Moved(self.step)
    }

    fn save_step(&mut self) {
        for field in self.step_spec().fields {
            if let Some(value) = self.drafts.get(field.name) {
                self.collected.insert(field.name, value.clone());
            }
        }
    }

    fn enter_step(&mut self) {
        if self.is_final_step() {
            self.review = build_review(self.spec, &self.collected);
        }
    }

    /// Adds files to an upload field. Refused files are left out and their
    /// rejections returned for alerting; the rest of the selection is kept.
    pub fn select_files(
        &mut self,
        name: &str,
        files: Vec<UploadedFile<F>>,
    ) -> Vec<FileRejection> {
        let Some(field) = self.field(name) else {
            return Vec::new();
        };
        let Some(slot) = field.file_slot() else {
            log::warn!("{name} is not an upload field");
            return Vec::new();
        };
        let mut rejections = Vec::new();
        let mut accepted = Vec::new();
        for file in files {
            match slot.check(&file) {
                Ok(()) => accepted.push(file),
                Err(rejection) => rejections.push(rejection),
            }
        }
        if accepted.is_empty() {
            return rejections;
        }
        self.statuses.remove(field.name);
        let merged = match (slot.multiple, self.drafts.get(field.name)) {
            (true, Some(FieldValue::Files(existing))) => {
                existing.iter().cloned().chain(accepted).collect()
            }
            _ => accepted.into_iter().take(1).collect(),
        };
        self.drafts.insert(field.name, FieldValue::Files(merged));
        rejections
    }

    pub fn remove_file(&mut self, name: &str, index: usize) -> bool {
        match self.drafts.get_mut(name) {
            Some(FieldValue::Files(files)) if index < files.len() => {
                files.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Checks the submit preconditions and, when they hold, enters
    /// [`Phase::Submitting`] and returns the body to send.
    pub fn prepare_submission(&mut self) -> Result<MultipartForm<F>, SubmitBlocked> {
        match self.phase {
            Phase::Submitting => return Err(SubmitBlocked::InProgress),
            Phase::Submitted => return Err(SubmitBlocked::AlreadySubmitted),
            Phase::Editing => {}
        }
        if !self.is_final_step() {
            return Err(SubmitBlocked::NotOnReviewStep);
        }
        for &(name, alert) in self.spec.confirmations {
            if !self.drafts.checked(name) {
                return Err(SubmitBlocked::Unconfirmed(alert));
            }
        }
        self.save_step();
        self.phase = Phase::Submitting;
        Ok(self.multipart())
    }

    fn multipart(&self) -> MultipartForm<F> {
        let mut form = MultipartForm::new();
        for field in self.spec.fields() {
            if self.disabled.contains(field.name) {
                continue;
            }
            match self.collected.get(field.name) {
                Some(FieldValue::Text(text)) => form.push_text(field.name, text.clone()),
                Some(FieldValue::Checked(checked)) => {
                    form.push_text(field.name, if *checked { "true" } else { "false" })
                }
                Some(FieldValue::Files(files)) => {
                    for file in files {
                        form.push_file(field.name, file.clone());
                    }
                }
                None => {}
            }
        }
        form
    }

    /// Applies the API result according to the flow's submit policy.
    pub fn finish_submission(
        &mut self,
        result: Result<RegistrationReceipt, ApiError>,
    ) -> SubmitOutcome {
        if self.phase != Phase::Submitting {
            log::warn!("Ignoring registration result with no submission in flight");
            return SubmitOutcome::Ignored;
        }
        match (self.spec.submit_policy, result) {
            (_, Ok(receipt)) => {
                self.phase = Phase::Submitted;
                self.receipt = Some(receipt);
                SubmitOutcome::Succeeded {
                    alert: self.spec.success_alert,
                    marks_completion: self.spec.marks_completion,
                }
            }
            (SubmitPolicy::ReportSuccessRegardless, Err(err)) => {
                log::error!("Registration submission failed, showing success panel: {err}");
                self.phase = Phase::Submitted;
                self.receipt = Some(RegistrationReceipt::default());
                SubmitOutcome::Succeeded {
                    alert: self.spec.success_alert,
                    marks_completion: false,
                }
            }
            (SubmitPolicy::Strict, Err(err)) => {
                log::error!("Registration submission error: {err}");
                self.phase = Phase::Editing;
                SubmitOutcome::Failed {
                    alert: format!("Registration failed: {err}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MIB;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn pdf(name: &str, size: u64) -> UploadedFile<()> {
        UploadedFile::descriptor(name, size, "application/pdf")
    }

    #[test]
    fn starts_on_first_step_with_empty_drafts() {
        let wizard: Wizard<()> = Wizard::for_flow(Flow::Manufacturer);
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.phase(), Phase::Editing);
        assert_eq!(wizard.text("company-name"), "");
        assert_eq!(wizard.step_marker(1), StepMarker::Active);
        assert_eq!(wizard.step_marker(2), StepMarker::Upcoming);
        assert_eq!(wizard.primary_action(), PrimaryAction::Next);
    }

    #[test]
    fn typing_clears_the_error() {
        let mut wizard: Wizard<()> = Wizard::for_flow(Flow::Manufacturer);
        wizard.blur("company-name", today());
        assert_eq!(wizard.status("company-name").error(), Some("Company Name is required"));
        wizard.set_text("company-name", "Ac");
        assert_eq!(wizard.status("company-name"), &FieldStatus::Untouched);
    }

    #[test]
    fn pharmacy_blur_ignores_empty_values() {
        let mut wizard: Wizard<()> = Wizard::for_flow(Flow::Pharmacy);
        wizard.blur("pharmacy-name", today());
        assert_eq!(wizard.status("pharmacy-name"), &FieldStatus::Untouched);
        wizard.set_text("gstin", "1234");
        wizard.blur("gstin", today());
        assert_eq!(
            wizard.status("gstin").error(),
            Some("Please enter a valid GSTIN number")
        );
    }

    #[test]
    fn mirror_checkbox_copies_and_disables() {
        let mut wizard: Wizard<()> = Wizard::for_flow(Flow::Manufacturer);
        wizard.set_text("factory-address", "Plot 4, MIDC, Pune");
        wizard.set_checked("same-address", true);
        assert_eq!(wizard.text("registered-address"), "Plot 4, MIDC, Pune");
        assert!(wizard.is_disabled("registered-address"));
        wizard.set_text("factory-address", "Plot 5, MIDC, Pune");
        assert_eq!(wizard.text("registered-address"), "Plot 5, MIDC, Pune");
        wizard.set_checked("same-address", false);
        assert!(!wizard.is_disabled("registered-address"));
    }

    #[test]
    fn single_slot_replaces_and_multi_slot_appends() {
        let mut wizard: Wizard<()> = Wizard::for_flow(Flow::Pharmacy);
        assert!(wizard.select_files("license-document", vec![pdf("a.pdf", MIB)]).is_empty());
        assert!(wizard.select_files("license-document", vec![pdf("b.pdf", MIB)]).is_empty());
        assert_eq!(wizard.files("license-document").len(), 1);
        assert_eq!(wizard.files("license-document")[0].name, "b.pdf");

        wizard.select_files("other-documents", vec![pdf("c.pdf", MIB)]);
        wizard.select_files("other-documents", vec![pdf("d.pdf", MIB), pdf("e.pdf", MIB)]);
        assert_eq!(wizard.files("other-documents").len(), 3);
        assert!(wizard.remove_file("other-documents", 0));
        assert_eq!(wizard.files("other-documents")[0].name, "d.pdf");
        assert!(!wizard.remove_file("other-documents", 9));
    }

    #[test]
    fn password_confirmation_must_match() {
        let mut wizard: Wizard<()> = Wizard::for_flow(Flow::Pharmacy);
        wizard.set_text("password", "Secret#123");
        wizard.set_text("confirm-password", "Secret#124");
        assert_eq!(wizard.passwords_match(), Some(false));
        wizard.blur("confirm-password", today());
        assert_eq!(
            wizard.status("confirm-password").error(),
            Some("Passwords do not match")
        );
        assert_eq!(wizard.password_strength().map(|s| s.score), Some(5));
    }

    #[test]
    fn jump_only_goes_back() {
        let mut wizard: Wizard<()> = Wizard::for_flow(Flow::Pharmacy);
        assert_eq!(wizard.jump_to(2), StepChange::Unchanged);
        wizard.set_text("pharmacy-name", "Apollo");
        wizard.set_text("pharmacy-type", "retail");
        wizard.set_text("pharmacy-address", "12 MG Road");
        assert_eq!(wizard.next(today()), StepChange::Moved(2));
        assert!(wizard.can_jump_to(1));
        assert_eq!(wizard.jump_to(1), StepChange::Moved(1));
        assert_eq!(wizard.jump_to(2), StepChange::Unchanged);
    }

    #[test]
    fn unknown_select_value_is_rejected() {
        let mut wizard: Wizard<()> = Wizard::for_flow(Flow::Pharmacy);
        wizard.set_text("pharmacy-type", "kiosk");
        wizard.blur("pharmacy-type", today());
        assert!(wizard.status("pharmacy-type").is_invalid());
    }

    #[test]
    fn finishing_without_submission_is_ignored() {
        let mut wizard: Wizard<()> = Wizard::for_flow(Flow::Pharmacy);
        assert_eq!(
            wizard.finish_submission(Ok(RegistrationReceipt::default())),
            SubmitOutcome::Ignored
        );
        assert_eq!(wizard.phase(), Phase::Editing);
    }
}
