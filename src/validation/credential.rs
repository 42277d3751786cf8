//! Password complexity and weak PIN checks

use derive_more::derive::Display;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use super::PASSWORD_SYMBOLS;
use crate::utils::weak_pin::weak_pins_6_digit;

/// A character class a password must contain at least once.
/// Iteration order is the order in which classes are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CharacterClass {
    #[display("lowercase letter")]
    Lowercase,
    #[display("uppercase letter")]
    Uppercase,
    #[display("digit")]
    Digit,
    #[display("symbol")]
    Symbol,
}

impl CharacterClass {
    /// Letters and digits are matched as ASCII, so non-ASCII characters never
    /// satisfy a class (but never block one either).
    fn matches(self, c: char) -> bool {
        match self {
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Symbol => PASSWORD_SYMBOLS.contains(c),
        }
    }
}

/// Returns the first character class the password lacks, if any
pub fn missing_password_class(password: &str) -> Option<CharacterClass> {
    CharacterClass::iter().find(|class| !password.chars().any(|c| class.matches(c)))
}

/// Returns true if the password holds a lowercase letter, an uppercase letter,
/// a digit and one of `-+_!@#$%^&*.,?`
pub fn validate_password_complexity(password: &str) -> bool {
    missing_password_class(password).is_none()
}

/// Returns true if the PIN is on the weak PIN list
pub fn is_weak_pin_6_digit(pin: &str) -> bool {
    weak_pins_6_digit().iter().any(|weak| *weak == pin)
}
