//! ISO-3166 / ISO-4217 membership lookups

use iso_currency::Currency;
use isocountry::CountryCode;

/// Returns true if `code` is an active ISO-4217 currency code
pub fn is_iso_currency(code: &str) -> bool {
    Currency::from_code(code).is_some()
}

/// Returns true if `code` is an ISO-3166-1 alpha-3 country code
pub fn is_iso_country_alpha3(code: &str) -> bool {
    CountryCode::for_alpha3(code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_lookup() {
        for code in ["USD", "THB", "ARS", "EUR", "CHF"] {
            assert!(is_iso_currency(code), "Currency {} was rejected !", code);
        }
        for code in ["ABC", "USDA", "", "123"] {
            assert!(!is_iso_currency(code), "Currency {} was accepted !", code);
        }
    }

    #[test]
    fn test_country_lookup() {
        for code in ["THA", "USA", "KHM", "CHE"] {
            assert!(is_iso_country_alpha3(code), "Country {} was rejected !", code);
        }
        for code in ["THB", "USD", "TH", ""] {
            assert!(!is_iso_country_alpha3(code), "Country {} was accepted !", code);
        }
    }
}
