use derive_more::derive::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::{MAX_USERNAME_RUN, MIN_USERNAME_LENGTH};

// Regex for username
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+$")
        .expect("Failed to compile username regex")
});

/// Why a username was refused. Checks run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsernameRejection {
    #[error("username must be at least {} characters long", MIN_USERNAME_LENGTH)]
    TooShort,
    #[error("username may only contain lowercase letters and digits")]
    InvalidCharset,
    #[error("username repeats '{0}' too many times in a row")]
    RepeatedCharacter(char),
}

/// Runs the length, charset and repeated-character checks in that order
pub fn check_username(username: &str) -> Result<(), UsernameRejection> {
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(UsernameRejection::TooShort);
    }

    if !USERNAME_REGEX.is_match(username) {
        return Err(UsernameRejection::InvalidCharset);
    }

    // For each distinct character, look for it repeated as a substring
    let mut seen = HashSet::new();
    for c in username.chars() {
        if !seen.insert(c) {
            continue;
        }
        let run: String = std::iter::repeat(c).take(MAX_USERNAME_RUN).collect();
        if username.contains(&run) {
            return Err(UsernameRejection::RepeatedCharacter(c));
        }
    }

    Ok(())
}

pub fn is_valid_username(username: &str) -> bool {
    check_username(username).is_ok()
}

/// Wrapper type for a username that has been validated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[serde(try_from = "String")]
pub struct Username(String);

impl TryFrom<String> for Username {
    type Error = UsernameRejection;

    fn try_from(username: String) -> Result<Self, Self::Error> {
        check_username(&username)?;
        Ok(Self(username))
    }
}

impl TryFrom<&str> for Username {
    type Error = UsernameRejection;

    fn try_from(username: &str) -> Result<Self, Self::Error> {
        check_username(username)?;
        Ok(Self(username.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        let valid_cases = vec![
            "thailand",
            "username01",
            "inwza007",
            "0891234567",
            "007inwza",
            "aaaabaaaa",
        ];

        for username in valid_cases {
            assert!(is_valid_username(username),
                    "Valid username {} was rejected !", username);
        }
    }

    #[test]
    fn test_too_short_username() {
        for username in ["thai", "aa", "bb", "", "abcde", "ทดสอบ"] {
            assert_eq!(check_username(username), Err(UsernameRejection::TooShort),
                       "Short username {} was not flagged as too short", username);
        }
    }

    #[test]
    fn test_invalid_charset_username() {
        let invalid_cases = vec![
            "Thailand",
            "InwZa007",
            "thailand-test",
            "thailand-ทดสอบ",
            "thailand-'''",
            "*778#$$",
            "user name",
            "ทดสอบไทย",
        ];

        for username in invalid_cases {
            assert_eq!(check_username(username), Err(UsernameRejection::InvalidCharset),
                       "Invalid username {} was not flagged for its charset", username);
        }
    }

    #[test]
    fn test_repeated_character_username() {
        let test_cases = vec![
            ("aaaaan", 'a'),
            ("inwza007aaaaa", 'a'),
            ("aaaaainwza007", 'a'),
            ("00000inwza007", '0'),
            ("inwza007iiiii", 'i'),
            ("0899999999", '9'),
        ];

        for (username, repeated) in test_cases {
            assert_eq!(check_username(username), Err(UsernameRejection::RepeatedCharacter(repeated)),
                       "Username {} was not flagged for repeating {}", username, repeated);
        }
    }

    #[test]
    fn test_username_wrapper() {
        let username = Username::try_from("inwza007").unwrap();
        assert_eq!(username.to_string(), "inwza007");
        assert_eq!(username.as_ref(), "inwza007");
        assert!(Username::try_from(String::from("Thailand")).is_err());
    }

    #[test]
    fn test_username_deserialization_is_validated() {
        let username: Username = serde_json::from_str(r#""username01""#).unwrap();
        assert_eq!(username.as_ref(), "username01");
        assert!(serde_json::from_str::<Username>(r#""aaaaan""#).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn five_in_a_row_is_always_rejected(
                prefix in "[a-z0-9]{0,8}",
                c in proptest::char::range('a', 'z'),
                suffix in "[a-z0-9]{0,8}",
            ) {
                let username = format!("{prefix}{}{suffix}", c.to_string().repeat(MAX_USERNAME_RUN));
                prop_assert!(!is_valid_username(&username));
            }

            #[test]
            fn short_runs_never_trigger_rejection(s in "[a-z0-9]{6,20}") {
                let has_run = s.as_bytes().windows(MAX_USERNAME_RUN).any(|w| w.iter().all(|b| *b == w[0]));
                prop_assert_eq!(is_valid_username(&s), !has_run);
            }
        }
    }
}
