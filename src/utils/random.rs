//! Random codes and strings

use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};

/// Returns `length` random characters from `[a-zA-Z0-9]`
pub fn generate_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// 4-digit one-time code, drawn from the OS RNG
pub fn generate_otp_code() -> String {
    OsRng.gen_range(1_000..=9_999).to_string()
}

/// 6-digit referral code, drawn from the OS RNG
pub fn generate_refer_otp_code() -> String {
    OsRng.gen_range(100_000..=999_999).to_string()
}
