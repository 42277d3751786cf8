//! Root module for the validation system
//! This file exposes the public API and re-exports commonly used types

mod credential;
mod format;
mod lookup;
mod types;
mod username;

pub use credential::{is_weak_pin_6_digit, missing_password_class, validate_password_complexity, CharacterClass};
pub use format::{
    is_base64, is_base64_data_type, is_json, is_url, is_valid_bool_from_string, is_valid_country,
    is_valid_currency, is_valid_date_time_from_string, is_valid_email, is_valid_numeric_from_string,
    is_valid_phone_number, is_valid_slug, is_valid_uuid,
};
pub use lookup::{is_iso_country_alpha3, is_iso_currency};
pub use types::ValidationType;
pub use username::{check_username, is_valid_username, Username, UsernameRejection};

// Constants that are used across the validation system
pub const MIN_USERNAME_LENGTH: usize = 6;
pub const MAX_USERNAME_RUN: usize = 5;
pub const MAX_URL_LENGTH: usize = 2083;
pub const MIN_URL_LENGTH: usize = 3;
pub const PASSWORD_SYMBOLS: &str = "-+_!@#$%^&*.,?";
