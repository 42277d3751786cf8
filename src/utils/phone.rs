//! Phone number normalization and masking

use phonenumber::country;
use thiserror::Error;

/// Errors that can occur while normalizing a phone number.
/// All of them are recoverable: callers are expected to ask for new input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("parameters error")]
    Parameter,
    #[error("could not parse phone number: {0}")]
    Parse(String),
    #[error("invalid phone number")]
    InvalidNumber,
}

/// Rewrites a national phone number as `+<country calling code><national number>`.
///
/// `country_code` is an ISO-3166 alpha-2 region such as `TH`. Separators, a
/// leading trunk prefix and an explicit `+<code>` are all accepted, so every
/// spelling of the same number normalizes to the same string.
///
/// # Example
/// ```
/// use universe::utils::phone::add_country_code_phone_number;
///
/// let phone = add_country_code_phone_number("TH", "089-123 4567").unwrap();
/// assert_eq!(phone, "+66891234567");
/// ```
pub fn add_country_code_phone_number(country_code: &str, phone_number: &str) -> Result<String, PhoneError> {
    if country_code.is_empty() || phone_number.is_empty() {
        return Err(PhoneError::Parameter);
    }

    let region: country::Id = country_code
        .parse()
        .map_err(|_| PhoneError::Parse(format!("unknown country code {country_code}")))?;

    let number = phonenumber::parse(Some(region), phone_number)
        .map_err(|e| PhoneError::Parse(e.to_string()))?;

    let calling_code = number.code().value();
    let national_number = number.national().value();
    if calling_code == 0 || national_number == 0 {
        return Err(PhoneError::InvalidNumber);
    }

    Ok(format!("+{calling_code}{national_number}"))
}

/// Replaces the last `replace_digit` characters with `X`.
/// A non-positive count leaves the number untouched; a count past the end
/// masks everything.
pub fn censor_phone_number(phone_number: &str, replace_digit: i32) -> String {
    if replace_digit <= 0 {
        return phone_number.to_owned();
    }

    let len = phone_number.chars().count();
    let masked = usize::try_from(replace_digit).map_or(len, |n| n.min(len));

    phone_number
        .chars()
        .take(len - masked)
        .chain(std::iter::repeat('X').take(masked))
        .collect()
}
