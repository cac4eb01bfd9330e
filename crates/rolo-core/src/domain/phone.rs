use crate::domain::country::find_country;

/// Keystroke filter for the local-number input: digits only.
pub fn sanitize_local_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Build the canonical stored phone from a country selection and the local
/// digits. `local_digits` must already be sanitized; an empty local number
/// yields an empty phone. An unknown country code contributes an empty dial
/// code rather than failing.
pub fn to_canonical(country_code: &str, local_digits: &str) -> String {
    if local_digits.is_empty() {
        return String::new();
    }
    let dial_code = find_country(country_code)
        .map(|country| country.dial_code)
        .unwrap_or("");
    format!("{dial_code}{local_digits}")
}

/// Recover the local digits from a canonical phone by removing exactly one
/// leading occurrence of the country's dial code. When the stored country no
/// longer matches the phone's prefix the full value is returned unchanged;
/// callers that care can check [`dial_code_mismatch`] first.
pub fn to_local(country_code: &str, canonical: &str) -> String {
    let trimmed = canonical.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match find_country(country_code) {
        Some(country) => trimmed
            .strip_prefix(country.dial_code)
            .unwrap_or(trimmed)
            .trim()
            .to_string(),
        None => trimmed.to_string(),
    }
}

/// True when a non-empty canonical phone does not start with the dial code
/// of the given country.
pub fn dial_code_mismatch(country_code: &str, canonical: &str) -> bool {
    let trimmed = canonical.trim();
    if trimmed.is_empty() {
        return false;
    }
    match find_country(country_code) {
        Some(country) => !trimmed.starts_with(country.dial_code),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{dial_code_mismatch, sanitize_local_digits, to_canonical, to_local};
    use crate::domain::country::COUNTRIES;

    #[test]
    fn canonical_concatenates_dial_code_and_digits() {
        assert_eq!(to_canonical("US", "4155551234"), "+14155551234");
        assert_eq!(to_canonical("GB", "2071234567"), "+442071234567");
    }

    #[test]
    fn canonical_of_empty_local_is_empty() {
        for country in COUNTRIES {
            assert_eq!(to_canonical(country.code, ""), "");
        }
    }

    #[test]
    fn canonical_falls_back_to_bare_digits_for_unknown_country() {
        assert_eq!(to_canonical("ZZ", "5551234"), "5551234");
    }

    #[test]
    fn local_strips_one_leading_dial_code() {
        assert_eq!(to_local("US", "+14155551234"), "4155551234");
        assert_eq!(to_local("RU", "+79261234567"), "9261234567");
    }

    #[test]
    fn local_of_empty_canonical_is_empty() {
        assert_eq!(to_local("US", ""), "");
        assert_eq!(to_local("US", "   "), "");
    }

    #[test]
    fn local_keeps_full_value_on_dial_code_mismatch() {
        assert_eq!(to_local("GB", "+14155551234"), "+14155551234");
        assert!(dial_code_mismatch("GB", "+14155551234"));
        assert!(!dial_code_mismatch("US", "+14155551234"));
    }

    #[test]
    fn round_trip_holds_for_every_country() {
        let samples = ["", "5551234", "0001", "442071234567"];
        for country in COUNTRIES {
            for digits in samples {
                let canonical = to_canonical(country.code, digits);
                assert_eq!(
                    to_local(country.code, &canonical),
                    digits,
                    "round trip failed for {} / {:?}",
                    country.code,
                    digits
                );
            }
        }
    }

    #[test]
    fn sanitize_drops_formatting_characters() {
        assert_eq!(sanitize_local_digits("(415) 555-1234"), "4155551234");
        assert_eq!(sanitize_local_digits("abc"), "");
    }
}
