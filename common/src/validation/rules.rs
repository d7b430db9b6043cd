use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static GSTIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("valid GSTIN regex")
});
static PAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid PAN regex"));
static LOOSE_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-]{10,15}$").expect("valid phone regex"));
static COMPACT_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]?[0-9]{9,15}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Value formats checked by regular expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// 15-character GST identification number, e.g. `22AAAAA0000A1Z5`.
    Gstin,
    /// 10-character permanent account number, e.g. `AAAAA0000A`.
    Pan,
    /// 10-15 digits, spaces or dashes, optional leading `+`.
    LoosePhone,
    /// Digits only once whitespace is removed, optional leading `+`.
    CompactPhone,
    Email,
}

impl Pattern {
    pub fn matches(self, value: &str) -> bool {
        match self {
            Pattern::Gstin => GSTIN_RE.is_match(value),
            Pattern::Pan => PAN_RE.is_match(value),
            Pattern::LoosePhone => LOOSE_PHONE_RE.is_match(value),
            Pattern::CompactPhone => COMPACT_PHONE_RE.is_match(&WHITESPACE_RE.replace_all(value, "")),
            Pattern::Email => EMAIL_RE.is_match(value),
        }
    }
}

/// Why a value failed its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    TooShort(usize),
    TooLong(usize),
    Pattern(Pattern),
    NotInFuture,
    InvalidDate,
    UnknownOption,
    PasswordMismatch,
}

/// Discriminant of [`Violation`], used to key per-field message overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Required,
    TooShort,
    TooLong,
    Pattern,
    NotInFuture,
    InvalidDate,
    UnknownOption,
    PasswordMismatch,
}

impl Violation {
    pub fn kind(self) -> ViolationKind {
        match self {
            Violation::Required => ViolationKind::Required,
            Violation::TooShort(_) => ViolationKind::TooShort,
            Violation::TooLong(_) => ViolationKind::TooLong,
            Violation::Pattern(_) => ViolationKind::Pattern,
            Violation::NotInFuture => ViolationKind::NotInFuture,
            Violation::InvalidDate => ViolationKind::InvalidDate,
            Violation::UnknownOption => ViolationKind::UnknownOption,
            Violation::PasswordMismatch => ViolationKind::PasswordMismatch,
        }
    }
}

/// Static per-field rule. Checks fail closed in declaration order:
/// required, length bounds, pattern, then the future-date constraint.
/// An empty value on a non-required field always passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
    pub future_date: bool,
}

impl ValidationRule {
    pub const fn optional() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            future_date: false,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::optional()
        }
    }

    pub const fn min(self, n: usize) -> Self {
        Self {
            min_length: Some(n),
            ..self
        }
    }

    pub const fn max(self, n: usize) -> Self {
        Self {
            max_length: Some(n),
            ..self
        }
    }

    pub const fn pattern(self, pattern: Pattern) -> Self {
        Self {
            pattern: Some(pattern),
            ..self
        }
    }

    /// The value must be an ISO date strictly after `today`.
    pub const fn future_date(self) -> Self {
        Self {
            future_date: true,
            ..self
        }
    }

    pub fn check(&self, raw: &str, today: NaiveDate) -> Result<(), Violation> {
        let value = raw.trim();
        if value.is_empty() {
            return if self.required {
                Err(Violation::Required)
            } else {
                Ok(())
            };
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(Violation::TooShort(min));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(Violation::TooLong(max));
            }
        }
        if let Some(pattern) = self.pattern {
            if !pattern.matches(value) {
                return Err(Violation::Pattern(pattern));
            }
        }
        if self.future_date {
            check_future_date(value, today)?;
        }
        Ok(())
    }
}

/// Day-granularity comparison: a date equal to `today` is rejected.
pub fn check_future_date(value: &str, today: NaiveDate) -> Result<(), Violation> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| Violation::InvalidDate)?;
    if date <= today {
        Err(Violation::NotInFuture)
    } else {
        Ok(())
    }
}
