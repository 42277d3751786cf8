//! Registry of easily guessed 6-digit PINs
//!
//! ref: https://www.datagenetics.com/blog/september32012/

static WEAK_PIN_6_DIGIT: [&str; 24] = [
    "111111", "222222", "333333", "444444", "555555", "666666", "777777", "888888", "999999", "000000",
    "121212", "131313", "696969", "112233", "101010",
    "123123", "789456", "123321", "007007",
    "123456", "654321", "123654",
    "159753", "292513",
];

/// Returns the weak PIN list, in registry order
pub fn weak_pins_6_digit() -> &'static [&'static str] {
    &WEAK_PIN_6_DIGIT
}
