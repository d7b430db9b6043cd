//! Query strings of the GET endpoints.

use crate::model::registration::UniqueField;

pub const VERIFY_BATCH_PATH: &str = "/api/verify-batch";
pub const CHECK_FIELD_PATH: &str = "/api/check-field";
pub const REGISTER_MANUFACTURER_PATH: &str = "/api/register-manufacturer";
pub const REGISTER_PHARMACY_PATH: &str = "/api/register-pharmacy";

/// `?batch_number=<code>` for the verification endpoint.
pub struct VerifyBatchQuery<'a> {
    pub batch_number: &'a str,
}

impl VerifyBatchQuery<'_> {
    pub fn to_query(&self) -> String {
        format!("batch_number={}", urlencoding::encode(self.batch_number))
    }
}

/// `?field=<kind>&value=<v>` for the uniqueness endpoint. The value is trimmed.
pub struct CheckFieldQuery<'a> {
    pub field: UniqueField,
    pub value: &'a str,
}

impl CheckFieldQuery<'_> {
    pub fn to_query(&self) -> String {
        format!(
            "field={}&value={}",
            self.field.as_str(),
            urlencoding::encode(self.value.trim())
        )
    }
}
