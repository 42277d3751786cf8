//! Core types used throughout the validation system

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use super::credential::{is_weak_pin_6_digit, validate_password_complexity};
use super::format::*;
use super::username::is_valid_username;

/// Every single-value check the system can perform.
/// Date-time checks are left out since they also need a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationType {
    // Formats
    #[display("Email address")]
    Email,
    #[display("Phone number (shape)")]
    PhoneNumber,
    #[display("UUID")]
    Uuid,
    #[display("Slug")]
    Slug,
    #[display("Currency code (ISO-4217)")]
    Currency,
    #[display("Country code (ISO-3166 alpha-3)")]
    Country,
    #[display("Decimal number")]
    Numeric,
    #[display("Boolean literal")]
    Boolean,
    #[display("JSON object or array")]
    Json,
    #[display("Base64")]
    Base64,
    #[display("Base64 data URL")]
    Base64DataType,
    #[display("URL")]
    Url,

    // Credential policies
    #[display("Password complexity")]
    Password,
    #[display("Weak 6-digit PIN")]
    WeakPin,
    #[display("Username")]
    Username,
}

impl ValidationType {
    /// Runs the predicate for this kind of input.
    /// For `WeakPin` a `true` result means the PIN is weak.
    pub fn check(self, input: &str) -> bool {
        match self {
            ValidationType::Email => is_valid_email(input),
            ValidationType::PhoneNumber => is_valid_phone_number(input),
            ValidationType::Uuid => is_valid_uuid(input),
            ValidationType::Slug => is_valid_slug(input),
            ValidationType::Currency => is_valid_currency(input),
            ValidationType::Country => is_valid_country(input),
            ValidationType::Numeric => is_valid_numeric_from_string(input),
            ValidationType::Boolean => is_valid_bool_from_string(input),
            ValidationType::Json => is_json(input),
            ValidationType::Base64 => is_base64(input),
            ValidationType::Base64DataType => is_base64_data_type(input),
            ValidationType::Url => is_url(input),
            ValidationType::Password => validate_password_complexity(input),
            ValidationType::WeakPin => is_weak_pin_6_digit(input),
            ValidationType::Username => is_valid_username(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_dispatch() {
        let test_cases = vec![
            (ValidationType::Email, "example_ex@gmail.com", true),
            (ValidationType::Email, "example@example", false),
            (ValidationType::Currency, "USD", true),
            (ValidationType::Currency, "ABC", false),
            (ValidationType::Country, "THA", true),
            (ValidationType::Password, "Aa1.", true),
            (ValidationType::WeakPin, "123456", true),
            (ValidationType::WeakPin, "234153", false),
            (ValidationType::Username, "inwza007", true),
            (ValidationType::Username, "0899999999", false),
            (ValidationType::Json, "[]", true),
        ];

        for (kind, input, expected) in test_cases {
            assert_eq!(kind.check(input), expected, "{} check of '{}' was unexpected", kind, input);
        }
    }

    #[test]
    fn test_every_kind_rejects_empty_input() {
        for kind in ValidationType::iter() {
            assert!(!kind.check(""), "{} accepted an empty input", kind);
        }
    }

    #[test]
    fn test_serde_names() {
        let kind: ValidationType = serde_json::from_str(r#""base64_data_type""#).unwrap();
        assert_eq!(kind, ValidationType::Base64DataType);
    }
}
