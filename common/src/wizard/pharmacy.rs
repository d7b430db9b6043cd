use crate::requests::REGISTER_PHARMACY_PATH;
use crate::validation::{FileSlot, Pattern, ValidationRule, ViolationKind};

use super::flow::{
    CharCounter, FieldKind, FieldSpec, Flow, FlowSpec, MessageStyle, ReviewSectionSpec,
    ReviewValue, SelectOption, StepSpec, SubmitPolicy,
};

pub const PHARMACY_TYPES: &[SelectOption] = &[
    SelectOption {
        value: "retail",
        label: "Retail Pharmacy",
    },
    SelectOption {
        value: "wholesale",
        label: "Wholesale Distributor",
    },
    SelectOption {
        value: "hospital",
        label: "Hospital Pharmacy",
    },
    SelectOption {
        value: "online",
        label: "Online Pharmacy",
    },
    SelectOption {
        value: "chain",
        label: "Pharmacy Chain",
    },
];

pub const DESCRIPTION_COUNTER: CharCounter = CharCounter {
    limit: 300,
    warn_above: Some(250),
};

const PHARMACY_INFO: &[FieldSpec] = &[
    FieldSpec::new("pharmacy-name", "Pharmacy Name", FieldKind::Text)
        .rule(ValidationRule::required()),
    FieldSpec::new("pharmacy-type", "Pharmacy Type", FieldKind::Select(PHARMACY_TYPES))
        .rule(ValidationRule::required()),
    FieldSpec::new("gstin", "GSTIN", FieldKind::Text)
        .rule(ValidationRule::optional().pattern(Pattern::Gstin))
        .placeholder("22AAAAA0000A1Z5"),
    FieldSpec::new("pharmacy-address", "Pharmacy Address", FieldKind::TextArea(None))
        .rule(ValidationRule::required()),
    FieldSpec::new("operating-hours", "Operating Hours", FieldKind::Text)
        .placeholder("e.g., 9:00 AM - 10:00 PM"),
    FieldSpec::new("website", "Website", FieldKind::Url).placeholder("https://"),
    FieldSpec::new(
        "pharmacy-description",
        "Description",
        FieldKind::TextArea(Some(DESCRIPTION_COUNTER)),
    )
    .rule(ValidationRule::optional().max(300))
    .messages(&[(
        ViolationKind::TooLong,
        "Description must be under 300 characters",
    )]),
];

const LICENSE: &[FieldSpec] = &[
    FieldSpec::new("license-number", "Drug License Number", FieldKind::Text)
        .rule(ValidationRule::required()),
    FieldSpec::new("license-authority", "Issuing Authority", FieldKind::Text)
        .rule(ValidationRule::required()),
    FieldSpec::new("license-expiry", "License Expiry Date", FieldKind::Date)
        .rule(ValidationRule::required().future_date())
        .messages(&[(
            ViolationKind::NotInFuture,
            "License expiry date must be in the future",
        )]),
    FieldSpec::new(
        "other-certifications",
        "Other Certifications",
        FieldKind::TextArea(None),
    ),
];

const CONTACT: &[FieldSpec] = &[
    FieldSpec::new("owner-name", "Owner Name", FieldKind::Text).rule(ValidationRule::required()),
    FieldSpec::new("owner-pan", "Owner PAN", FieldKind::Text)
        .rule(ValidationRule::optional().pattern(Pattern::Pan))
        .placeholder("AAAAA0000A"),
    FieldSpec::new("contact-name", "Contact Person", FieldKind::Text)
        .rule(ValidationRule::required()),
    FieldSpec::new("contact-designation", "Role", FieldKind::Text),
    FieldSpec::new("contact-phone", "Phone Number", FieldKind::Tel)
        .rule(ValidationRule::required().pattern(Pattern::CompactPhone)),
    FieldSpec::new("contact-email", "Email Address", FieldKind::Email)
        .rule(ValidationRule::required().pattern(Pattern::Email)),
    FieldSpec::new("password", "Password", FieldKind::Password)
        .rule(ValidationRule::required().min(8))
        .messages(&[(
            ViolationKind::TooShort,
            "Password must be at least 8 characters long",
        )]),
    FieldSpec::new("confirm-password", "Confirm Password", FieldKind::Password)
        .rule(ValidationRule::required()),
];

const DOCUMENTS: &[FieldSpec] = &[
    FieldSpec::new(
        "license-document",
        "Pharmacy License",
        FieldKind::File(FileSlot::document()),
    )
    .rule(ValidationRule::required())
    .messages(&[(
        ViolationKind::Required,
        "Pharmacy license document is required",
    )]),
    FieldSpec::new(
        "pharmacist-certificate",
        "Pharmacist Registration Certificate",
        FieldKind::File(FileSlot::document()),
    )
    .rule(ValidationRule::required())
    .messages(&[(
        ViolationKind::Required,
        "Pharmacist registration certificate is required",
    )]),
    FieldSpec::new(
        "other-documents",
        "Other Documents",
        FieldKind::File(FileSlot::secondary()),
    ),
];

const CONFIRMATIONS: &[FieldSpec] = &[
    FieldSpec::new(
        "declaration",
        "I declare that the information provided is true and correct",
        FieldKind::Checkbox,
    ),
    FieldSpec::new(
        "terms",
        "I accept the terms and conditions",
        FieldKind::Checkbox,
    ),
    FieldSpec::new(
        "compliance",
        "I confirm compliance with all applicable drug regulations",
        FieldKind::Checkbox,
    ),
];

const STEPS: &[StepSpec] = &[
    StepSpec {
        title: "Pharmacy Info",
        fields: PHARMACY_INFO,
    },
    StepSpec {
        title: "License",
        fields: LICENSE,
    },
    StepSpec {
        title: "Contact",
        fields: CONTACT,
    },
    StepSpec {
        title: "Documents",
        fields: DOCUMENTS,
    },
    StepSpec {
        title: "Review",
        fields: CONFIRMATIONS,
    },
];

const REVIEW: &[ReviewSectionSpec] = &[
    ReviewSectionSpec {
        title: "Pharmacy Information",
        items: &[
            ("Pharmacy Name", ReviewValue::Text("pharmacy-name")),
            ("Type", ReviewValue::Text("pharmacy-type")),
            ("GSTIN", ReviewValue::Text("gstin")),
            ("Address", ReviewValue::Text("pharmacy-address")),
            (
                "Operating Hours",
                ReviewValue::TextOr("operating-hours", "Not specified"),
            ),
            ("Website", ReviewValue::TextOr("website", "Not provided")),
        ],
    },
    ReviewSectionSpec {
        title: "License Details",
        items: &[
            ("License Number", ReviewValue::Text("license-number")),
            ("Issuing Authority", ReviewValue::Text("license-authority")),
            ("Expiry Date", ReviewValue::Text("license-expiry")),
            (
                "Other Certifications",
                ReviewValue::TextOr("other-certifications", "None"),
            ),
        ],
    },
    ReviewSectionSpec {
        title: "Contact Information",
        items: &[
            ("Owner Name", ReviewValue::Text("owner-name")),
            ("Owner PAN", ReviewValue::TextOr("owner-pan", "Not provided")),
            ("Contact Person", ReviewValue::Text("contact-name")),
            ("Role", ReviewValue::Text("contact-designation")),
            ("Phone", ReviewValue::Text("contact-phone")),
            ("Email", ReviewValue::Text("contact-email")),
        ],
    },
    ReviewSectionSpec {
        title: "Documents",
        items: &[
            ("License Document", ReviewValue::Uploaded("license-document")),
            (
                "Pharmacist Certificate",
                ReviewValue::Uploaded("pharmacist-certificate"),
            ),
            ("Other Documents", ReviewValue::FileCount("other-documents")),
        ],
    },
];

pub static PHARMACY: FlowSpec = FlowSpec {
    flow: Flow::Pharmacy,
    title: "Pharmacy Registration",
    steps: STEPS,
    review: REVIEW,
    message_style: MessageStyle::Generic,
    blur_validates_empty: false,
    blocked_alert: None,
    allow_jump: true,
    password_pair: Some(("password", "confirm-password")),
    uniqueness: &[],
    confirmations: &[
        ("declaration", "Please confirm the declaration"),
        ("terms", "Please accept the terms and conditions"),
        ("compliance", "Please confirm compliance with regulations"),
    ],
    mirror: None,
    submit_policy: SubmitPolicy::Strict,
    endpoint: REGISTER_PHARMACY_PATH,
    marks_completion: true,
    success_alert: None,
    keyboard_shortcut: true,
};
