use crate::model::registration::UniqueField;
use crate::requests::REGISTER_MANUFACTURER_PATH;
use crate::validation::{FileSlot, Pattern, ValidationRule, ViolationKind};

use super::flow::{
    CharCounter, Flow, FieldKind, FieldSpec, FlowSpec, MessageStyle, MirrorField, ReviewSectionSpec,
    ReviewValue, SelectOption, StepSpec, SubmitPolicy,
};

pub const MANUFACTURER_SUCCESS_ALERT: &str = "REGISTRATION SUCCESSFUL\nYou will recieve a confirmation mail in 2-3 business day, after verification of credentials.\nTHANKS FOR REGISTERING";
pub const MANUFACTURER_BLOCKED_ALERT: &str =
    "Please fill in all required fields correctly before proceeding.";

const LICENSE_AUTHORITIES: &[SelectOption] = &[
    SelectOption {
        value: "cdsco",
        label: "Central Drugs Standard Control Organization (CDSCO)",
    },
    SelectOption {
        value: "state-fda",
        label: "State Food & Drug Administration",
    },
    SelectOption {
        value: "state-drug-controller",
        label: "State Drug Controller",
    },
    SelectOption {
        value: "ayush",
        label: "Ministry of AYUSH",
    },
];

const COMPANY: &[FieldSpec] = &[
    FieldSpec::new("company-name", "Company Name", FieldKind::Text)
        .rule(ValidationRule::required().min(3))
        .placeholder("Registered company name"),
    FieldSpec::new("gstin", "GSTIN", FieldKind::Text)
        .rule(ValidationRule::required().pattern(Pattern::Gstin))
        .placeholder("22AAAAA0000A1Z5"),
    FieldSpec::new("pan", "PAN", FieldKind::Text)
        .rule(ValidationRule::optional().pattern(Pattern::Pan))
        .placeholder("AAAAA0000A"),
    FieldSpec::new("website", "Website", FieldKind::Url).placeholder("https://"),
];

const LICENSE: &[FieldSpec] = &[
    FieldSpec::new("license-number", "License Number", FieldKind::Text)
        .rule(ValidationRule::required().min(5)),
    FieldSpec::new(
        "license-authority",
        "License Authority",
        FieldKind::Select(LICENSE_AUTHORITIES),
    )
    .rule(ValidationRule::required()),
    FieldSpec::new("license-expiry", "License Expiry Date", FieldKind::Date)
        .rule(ValidationRule::required().future_date())
        .messages(&[(
            ViolationKind::NotInFuture,
            "License expiry date must be in the future",
        )]),
    FieldSpec::new("factory-address", "Factory Address", FieldKind::TextArea(None))
        .rule(ValidationRule::required().min(10)),
    FieldSpec::new(
        "same-address",
        "Registered address is the same as factory address",
        FieldKind::Checkbox,
    ),
    FieldSpec::new(
        "registered-address",
        "Registered Office Address",
        FieldKind::TextArea(None),
    ),
];

const CONTACT: &[FieldSpec] = &[
    FieldSpec::new("contact-name", "Contact Person Name", FieldKind::Text)
        .rule(ValidationRule::required().min(2)),
    FieldSpec::new("contact-designation", "Designation", FieldKind::Text)
        .rule(ValidationRule::required()),
    FieldSpec::new("contact-phone", "Phone Number", FieldKind::Tel)
        .rule(ValidationRule::required().pattern(Pattern::LoosePhone))
        .placeholder("+91 98765 43210"),
    FieldSpec::new("contact-email", "Email Address", FieldKind::Email)
        .rule(ValidationRule::required().pattern(Pattern::Email)),
    FieldSpec::new("password", "Password", FieldKind::Password)
        .rule(ValidationRule::required().min(8)),
    FieldSpec::new(
        "company-profile",
        "Company Profile",
        FieldKind::TextArea(Some(CharCounter {
            limit: 500,
            warn_above: None,
        })),
    )
    .rule(ValidationRule::required().min(50).max(500)),
    FieldSpec::new(
        "license-document",
        "Manufacturing License",
        FieldKind::File(FileSlot::document()),
    )
    .rule(ValidationRule::required()),
    FieldSpec::new(
        "other-documents",
        "Other Documents",
        FieldKind::File(FileSlot::secondary()),
    ),
];

const STEPS: &[StepSpec] = &[
    StepSpec {
        title: "Company Info",
        fields: COMPANY,
    },
    StepSpec {
        title: "License Details",
        fields: LICENSE,
    },
    StepSpec {
        title: "Contact & Documents",
        fields: CONTACT,
    },
    StepSpec {
        title: "Review",
        fields: &[],
    },
];

const REVIEW: &[ReviewSectionSpec] = &[
    ReviewSectionSpec {
        title: "Company Information",
        items: &[
            ("Company Name", ReviewValue::Text("company-name")),
            ("GSTIN", ReviewValue::TextOr("gstin", "Not provided")),
            ("PAN", ReviewValue::TextOr("pan", "Not provided")),
            ("Website", ReviewValue::TextOr("website", "Not provided")),
        ],
    },
    ReviewSectionSpec {
        title: "License Details",
        items: &[
            ("License Number", ReviewValue::Text("license-number")),
            ("License Authority", ReviewValue::OptionLabel("license-authority")),
            ("License Expiry", ReviewValue::Text("license-expiry")),
            ("Factory Address", ReviewValue::Text("factory-address")),
        ],
    },
    ReviewSectionSpec {
        title: "Contact Information",
        items: &[
            ("Contact Person", ReviewValue::Text("contact-name")),
            ("Designation", ReviewValue::Text("contact-designation")),
            ("Phone", ReviewValue::Text("contact-phone")),
            ("Email", ReviewValue::Text("contact-email")),
        ],
    },
];

pub static MANUFACTURER: FlowSpec = FlowSpec {
    flow: Flow::Manufacturer,
    title: "Manufacturer Registration",
    steps: STEPS,
    review: REVIEW,
    message_style: MessageStyle::Labelled,
    blur_validates_empty: true,
    blocked_alert: Some(MANUFACTURER_BLOCKED_ALERT),
    allow_jump: false,
    password_pair: None,
    uniqueness: &[
        ("contact-email", UniqueField::Email),
        ("contact-phone", UniqueField::Phone),
        ("license-number", UniqueField::License),
    ],
    confirmations: &[],
    mirror: Some(MirrorField {
        toggle: "same-address",
        source: "factory-address",
        target: "registered-address",
    }),
    submit_policy: SubmitPolicy::ReportSuccessRegardless,
    endpoint: REGISTER_MANUFACTURER_PATH,
    marks_completion: false,
    success_alert: Some(MANUFACTURER_SUCCESS_ALERT),
    keyboard_shortcut: false,
};
