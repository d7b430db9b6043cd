//! Static description of a registration flow.
//!
//! A [`FlowSpec`] lists the steps, the fields on each step with their
//! validation rules, and the per-flow policies (message wording, blur
//! behaviour, uniqueness checks, submit confirmations, failure handling).
//! Nothing here is mutated at runtime.

use crate::model::registration::UniqueField;
use crate::validation::{FileSlot, Pattern, ValidationRule, Violation, ViolationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Manufacturer,
    Pharmacy,
}

impl Flow {
    pub fn spec(self) -> &'static FlowSpec {
        match self {
            Flow::Manufacturer => &super::manufacturer::MANUFACTURER,
            Flow::Pharmacy => &super::pharmacy::PHARMACY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Flow::Manufacturer => "manufacturer",
            Flow::Pharmacy => "pharmacy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Live character counter under a textarea.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub limit: usize,
    pub warn_above: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTone {
    Normal,
    Warning,
    Danger,
}

impl CharCounter {
    pub fn tone(&self, len: usize) -> CounterTone {
        if len > self.limit {
            CounterTone::Danger
        } else if self.warn_above.is_some_and(|w| len > w) {
            CounterTone::Warning
        } else {
            CounterTone::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Url,
    Date,
    Password,
    TextArea(Option<CharCounter>),
    Select(&'static [SelectOption]),
    Checkbox,
    File(FileSlot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rule: Option<ValidationRule>,
    /// Wording that replaces the flow's default message for one violation kind.
    pub messages: &'static [(ViolationKind, &'static str)],
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            rule: None,
            messages: &[],
            placeholder: "",
        }
    }

    pub const fn rule(self, rule: ValidationRule) -> Self {
        Self {
            rule: Some(rule),
            ..self
        }
    }

    pub const fn messages(self, messages: &'static [(ViolationKind, &'static str)]) -> Self {
        Self { messages, ..self }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            placeholder,
            ..self
        }
    }

    pub fn is_required(&self) -> bool {
        self.rule.is_some_and(|r| r.required)
    }

    pub fn options(&self) -> &'static [SelectOption] {
        match self.kind {
            FieldKind::Select(options) => options,
            _ => &[],
        }
    }

    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
    }

    pub fn file_slot(&self) -> Option<FileSlot> {
        match self.kind {
            FieldKind::File(slot) => Some(slot),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSpec {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

/// How a review line obtains its value from the collected fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewValue {
    Text(&'static str),
    TextOr(&'static str, &'static str),
    OptionLabel(&'static str),
    /// "Uploaded" when the field holds a file; the line is omitted otherwise.
    Uploaded(&'static str),
    /// "N file(s) uploaded"; omitted when empty.
    FileCount(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewSectionSpec {
    pub title: &'static str,
    pub items: &'static [(&'static str, ReviewValue)],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    /// "Company Name is required", with the field label.
    Labelled,
    /// "This field is required".
    Generic,
}

/// What a finished submission means for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPolicy {
    /// Failures are alerted and the form stays editable.
    Strict,
    /// Network and parse failures are logged and the success panel is shown
    /// anyway.
    ReportSuccessRegardless,
}

/// Checkbox that copies one field into another and disables the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorField {
    pub toggle: &'static str,
    pub source: &'static str,
    pub target: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSpec {
    pub flow: Flow,
    pub title: &'static str,
    pub steps: &'static [StepSpec],
    pub review: &'static [ReviewSectionSpec],
    pub message_style: MessageStyle,
    /// Manufacturer validates on every blur; pharmacy only once something was typed.
    pub blur_validates_empty: bool,
    /// Alert raised when `next` is blocked by validation.
    pub blocked_alert: Option<&'static str>,
    /// Progress markers of completed steps are clickable.
    pub allow_jump: bool,
    /// `(password, confirmation)` checked together.
    pub password_pair: Option<(&'static str, &'static str)>,
    pub uniqueness: &'static [(&'static str, UniqueField)],
    /// Checkboxes that must be ticked before submit, with the alert for each.
    pub confirmations: &'static [(&'static str, &'static str)],
    pub mirror: Option<MirrorField>,
    pub submit_policy: SubmitPolicy,
    pub endpoint: &'static str,
    /// Record the flow in the registration-completion flag after a confirmed success.
    pub marks_completion: bool,
    /// Alert shown once the success panel appears.
    pub success_alert: Option<&'static str>,
    /// Ctrl/Cmd+Enter advances or submits.
    pub keyboard_shortcut: bool,
}

impl FlowSpec {
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.steps.iter().flat_map(|s| s.fields.iter())
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.name == name)
    }

    pub fn unique_kind(&self, name: &str) -> Option<UniqueField> {
        self.uniqueness
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, kind)| *kind)
    }

    pub fn message_for(&self, field: &FieldSpec, violation: Violation) -> String {
        if let Some((_, text)) = field.messages.iter().find(|(k, _)| *k == violation.kind()) {
            return (*text).to_string();
        }
        let label = field.label;
        match (self.message_style, violation) {
            (MessageStyle::Labelled, Violation::Required) => format!("{label} is required"),
            (MessageStyle::Generic, Violation::Required) => "This field is required".to_string(),
            (MessageStyle::Labelled, Violation::TooShort(n)) => {
                format!("{label} must be at least {n} characters")
            }
            (MessageStyle::Generic, Violation::TooShort(n)) => {
                format!("Must be at least {n} characters long")
            }
            (MessageStyle::Labelled, Violation::TooLong(n)) => {
                format!("{label} must not exceed {n} characters")
            }
            (MessageStyle::Generic, Violation::TooLong(n)) => {
                format!("Must be under {n} characters")
            }
            (style, Violation::Pattern(pattern)) => pattern_message(style, pattern).to_string(),
            (_, Violation::NotInFuture) => format!("{label} must be in the future"),
            (_, Violation::InvalidDate) => "Please enter a valid date".to_string(),
            (_, Violation::UnknownOption) => format!("Please select a valid {label}"),
            (_, Violation::PasswordMismatch) => "Passwords do not match".to_string(),
        }
    }
}

fn pattern_message(style: MessageStyle, pattern: Pattern) -> &'static str {
    match (style, pattern) {
        (MessageStyle::Labelled, Pattern::Gstin) => "Please enter a valid GSTIN (e.g., 22AAAAA0000A1Z5)",
        (MessageStyle::Generic, Pattern::Gstin) => "Please enter a valid GSTIN number",
        (MessageStyle::Labelled, Pattern::Pan) => "Please enter a valid PAN (e.g., AAAAA0000A)",
        (MessageStyle::Generic, Pattern::Pan) => "Please enter a valid PAN number",
        (_, Pattern::LoosePhone | Pattern::CompactPhone) => "Please enter a valid phone number",
        (_, Pattern::Email) => "Please enter a valid email address",
    }
}
