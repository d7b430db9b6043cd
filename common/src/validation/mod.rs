//! Field-local validation: rules, file checks and the password meter.

pub mod files;
pub mod password;
pub mod rules;

pub use files::{FileIcon, FileRejection, FileSlot, MIB, UploadedFile, format_file_size};
pub use password::PasswordStrength;
pub use rules::{Pattern, ValidationRule, Violation, ViolationKind, check_future_date};
