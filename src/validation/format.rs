//! Format predicates
//!
//! Every predicate here is a pure query: a value either matches the format or
//! it does not. Parse failures from the underlying crates fold into `false`.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{
    format::{parse, ParseErrorKind, ParseResult, Parsed, StrftimeItems},
    DateTime, NaiveDate, NaiveDateTime, NaiveTime,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use super::lookup::{is_iso_country_alpha3, is_iso_currency};
use super::{MAX_URL_LENGTH, MIN_URL_LENGTH};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$")
        .expect("Failed to compile email regex")
});

static PHONE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?\(?[0-9]{1,4}\)?[-\t\n\f\r ./0-9]*$")
        .expect("Failed to compile phone number regex")
});

// lowercase kebab case string
static SLUG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("Failed to compile slug regex")
});

static ISO_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]+(?:-[A-Z]+)*$").expect("Failed to compile ISO code regex")
});

static BASE64_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4})$")
        .expect("Failed to compile base64 regex")
});

static BASE64_DATA_TYPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^data:[A-Za-z0-9.+-]+/[A-Za-z0-9.+-]+;base64,(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4})$",
    )
    .expect("Failed to compile base64 data type regex")
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let scheme = r"((ftp|tcp|udp|wss?|https?)://)";
    let user_info = r"(\S+(:\S*)?@)";
    let ip = r"(([1-9][0-9]?|1[0-9][0-9]|2[01][0-9]|22[0-3]|24[0-9]|25[0-5])(\.([0-9]{1,2}|1[0-9][0-9]|2[0-4][0-9]|25[0-5])){2}(\.([0-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-5])))";
    let ipv6 = r"(\[[0-9a-fA-F:.]+\])";
    let label = r"(([a-zA-Z\x{00a1}-\x{ffff}0-9_]+-?-?)*[a-zA-Z\x{00a1}-\x{ffff}0-9_]+)";
    let port = r"(:[0-9]{1,5})";
    let path = r"((/|\?|#)\S*)";
    let pattern = format!(
        r"^{scheme}?{user_info}?({ip}|{ipv6}|((www\.)?{label}(\.{label})*))\.?{port}?{path}?$"
    );
    Regex::new(&pattern).expect("Failed to compile url regex")
});

/// Returns true for `local@label.tld` addresses with a 2-4 character TLD
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Shape check only: optional `+`, optional parenthesized prefix, then digits
/// and separators. Says nothing about whether the number can be dialled.
pub fn is_valid_phone_number(phone_number: &str) -> bool {
    PHONE_SHAPE_REGEX.is_match(phone_number)
}

/// Accepts only the hyphenated 8-4-4-4-12 form
pub fn is_valid_uuid(s: &str) -> bool {
    s.len() == 36 && Uuid::try_parse(s).is_ok()
}

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

pub fn is_valid_currency(currency: &str) -> bool {
    if !is_iso_currency(currency) {
        return false;
    }
    ISO_CODE_REGEX.is_match(currency) && currency.len() == 3
}

/// ISO-3166-1 alpha-3 codes only, uppercase
pub fn is_valid_country(country: &str) -> bool {
    let shape_ok = ISO_CODE_REGEX.is_match(country) && country.len() == 3;
    shape_ok && is_iso_country_alpha3(country)
}

/// Returns true if the string parses as an arbitrary precision decimal.
/// Digit separators (`1_000`) are not part of the grammar.
pub fn is_valid_numeric_from_string(decimal_of_string: &str) -> bool {
    !decimal_of_string.contains('_') && BigDecimal::from_str(decimal_of_string).is_ok()
}

/// Accepts the canonical boolean tokens only; `TRue` and friends are rejected
pub fn is_valid_bool_from_string(bool_of_string: &str) -> bool {
    matches!(
        bool_of_string,
        "1" | "t" | "T" | "TRUE" | "true" | "True" | "0" | "f" | "F" | "FALSE" | "false" | "False"
    )
}

/// Returns true if `date_time_of_string` matches the strftime `layout` exactly
/// and describes a real calendar value.
///
/// The layout may describe a full timestamp, a date, a time of day or only
/// part of a date (`%Y-%m`). The parsed fields are resolved against the most
/// specific form first; only a "not enough fields" outcome falls through to
/// the next, less specific one. When no form has enough fields, missing ones
/// take their zero value (January, day 1, midnight) before resolving.
pub fn is_valid_date_time_from_string(layout: &str, date_time_of_string: &str) -> bool {
    if !whitespace_matches_layout(layout, date_time_of_string) {
        return false;
    }

    let attempts: [&dyn Fn() -> ParseResult<()>; 4] = [
        &|| DateTime::parse_from_str(date_time_of_string, layout).map(drop),
        &|| NaiveDateTime::parse_from_str(date_time_of_string, layout).map(drop),
        &|| NaiveDate::parse_from_str(date_time_of_string, layout).map(drop),
        &|| NaiveTime::parse_from_str(date_time_of_string, layout).map(drop),
    ];

    for attempt in attempts {
        match attempt() {
            Ok(()) => return true,
            Err(e) if e.kind() == ParseErrorKind::NotEnough => continue,
            Err(_) => return false,
        }
    }

    let mut parsed = Parsed::new();
    if parse(&mut parsed, date_time_of_string, StrftimeItems::new(layout)).is_err() {
        return false;
    }
    resolve_date_with_defaults(parsed.clone()).is_ok() && resolve_time_with_defaults(parsed).is_ok()
}

// chrono skips blanks in front of numeric fields, so " 1:2:3" would match
// "%H:%M:%S". Blanks are only allowed where the layout has some, or where a
// space padded field (`%e`, `%k`, `%l`) may produce one.
fn whitespace_matches_layout(layout: &str, value: &str) -> bool {
    if ["%e", "%k", "%l"].iter().any(|padded| layout.contains(padded)) {
        return true;
    }
    let leading = |s: &str| s.starts_with(char::is_whitespace);
    if leading(value) && !leading(layout) {
        return false;
    }
    layout.contains(char::is_whitespace) || !value.contains(char::is_whitespace)
}

// Setters refuse to overwrite a parsed field, so each default below only
// fills a field the layout did not provide.
fn resolve_date_with_defaults(mut parsed: Parsed) -> ParseResult<()> {
    match parsed.to_naive_date() {
        Err(e) if e.kind() == ParseErrorKind::NotEnough => {}
        other => return other.map(drop),
    }

    let _ = parsed.set_month(1);
    let _ = parsed.set_day(1);
    match parsed.to_naive_date() {
        Err(e) if e.kind() == ParseErrorKind::NotEnough => {}
        other => return other.map(drop),
    }

    // No year at all: use a leap year so 29 February still resolves
    let _ = parsed.set_year(2000);
    parsed.to_naive_date().map(drop)
}

fn resolve_time_with_defaults(mut parsed: Parsed) -> ParseResult<()> {
    match parsed.to_naive_time() {
        Err(e) if e.kind() == ParseErrorKind::NotEnough => {}
        other => return other.map(drop),
    }

    let _ = parsed.set_hour(0);
    let _ = parsed.set_minute(0);
    let _ = parsed.set_second(0);
    parsed.to_naive_time().map(drop)
}

/// Only objects and arrays count; bare scalars are rejected
pub fn is_json(s: &str) -> bool {
    matches!(
        serde_json::from_str::<Value>(s),
        Ok(Value::Object(_)) | Ok(Value::Array(_))
    )
}

pub fn is_base64(s: &str) -> bool {
    BASE64_REGEX.is_match(s)
}

/// Base64 payload behind a `data:<mime>;base64,` prefix
pub fn is_base64_data_type(s: &str) -> bool {
    BASE64_DATA_TYPE_REGEX.is_match(s)
}

pub fn is_url(s: &str) -> bool {
    if s.is_empty() || s.len() >= MAX_URL_LENGTH || s.len() <= MIN_URL_LENGTH || s.starts_with('.') {
        return false;
    }

    let (host, path) = match Url::parse(s) {
        // Opaque forms such as `localhost:8080` carry neither host nor path
        Ok(url) if url.cannot_be_a_base() => (String::new(), String::new()),
        Ok(url) => (url.host_str().unwrap_or_default().to_owned(), url.path().to_owned()),
        Err(url::ParseError::RelativeUrlWithoutBase) => (String::new(), relative_path(s).to_owned()),
        Err(_) => return false,
    };

    if host.starts_with('.') {
        return false;
    }
    if host.is_empty() && !path.is_empty() && !path.contains('.') {
        return false;
    }

    URL_REGEX.is_match(s)
}

/// Path part of a reference without scheme: everything before `?` or `#`
fn relative_path(s: &str) -> &str {
    s.split(['?', '#']).next().unwrap_or_default()
}
