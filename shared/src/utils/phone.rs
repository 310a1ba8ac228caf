//! Mobile number utilities
//!
//! Rescue-crew and reporter numbers are Indian mobile numbers: ten digits
//! starting with 6-9, optionally prefixed with `+` and/or the `91` country
//! code. The canonical (dialable) form is the twelve digit `91XXXXXXXXXX`.

use regex::Regex;
use once_cell::sync::Lazy;

/// Country code prepended to ten digit local numbers
pub const COUNTRY_CODE: &str = "91";

/// Length of a local mobile number
pub const LOCAL_NUMBER_LENGTH: usize = 10;

// Optional '+', optional country code, then a 10 digit mobile starting with 6-9
static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?(91)?[6-9]\d{9}$").unwrap()
});

/// Remove every whitespace character from the input
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Check whether the input denotes a valid mobile number
///
/// Whitespace is ignored, so `"+91 98765 43210"` is accepted.
///
/// # Examples
///
/// ```
/// use dr_shared::utils::phone::is_valid_mobile;
///
/// assert!(is_valid_mobile("9876543210"));
/// assert!(is_valid_mobile("+919876543210"));
/// assert!(!is_valid_mobile("5876543210"));
/// ```
pub fn is_valid_mobile(raw: &str) -> bool {
    MOBILE_REGEX.is_match(&strip_whitespace(raw))
}

/// Normalize a number into its canonical `91XXXXXXXXXX` form
///
/// Best effort: input that is neither a canonical nor a ten digit number is
/// returned stripped of whitespace and the leading `+`, never rejected.
/// Callers validate separately with [`is_valid_mobile`].
///
/// # Examples
///
/// ```
/// use dr_shared::utils::phone::normalize_mobile;
///
/// assert_eq!(normalize_mobile("9876543210"), "919876543210");
/// assert_eq!(normalize_mobile("+919876543210"), "919876543210");
/// ```
pub fn normalize_mobile(raw: &str) -> String {
    let stripped = strip_whitespace(raw);
    let digits = stripped.strip_prefix('+').unwrap_or(stripped.as_str());

    if digits.starts_with(COUNTRY_CODE) && digits.len() == COUNTRY_CODE.len() + LOCAL_NUMBER_LENGTH {
        return digits.to_string();
    }

    if digits.len() == LOCAL_NUMBER_LENGTH && digits.chars().all(|c| c.is_ascii_digit()) {
        return format!("{}{}", COUNTRY_CODE, digits);
    }

    digits.to_string()
}

/// Local ten digit form of a number, as expected by bulk SMS routes
///
/// Returns `None` when the number does not reduce to exactly ten digits.
pub fn to_local_number(raw: &str) -> Option<String> {
    let canonical = normalize_mobile(raw);
    let local = if canonical.len() == COUNTRY_CODE.len() + LOCAL_NUMBER_LENGTH {
        canonical.strip_prefix(COUNTRY_CODE).unwrap_or(canonical.as_str())
    } else {
        canonical.as_str()
    };

    if local.len() == LOCAL_NUMBER_LENGTH && local.chars().all(|c| c.is_ascii_digit()) {
        Some(local.to_string())
    } else {
        None
    }
}

/// Mask a phone number for logging, keeping only the last four digits
///
/// ```
/// use dr_shared::utils::phone::mask_phone_number;
///
/// assert_eq!(mask_phone_number("+919876543210"), "+********3210");
/// ```
pub fn mask_phone_number(phone: &str) -> String {
    let count = phone.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }

    let visible: String = phone.chars().skip(count - 4).collect();
    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(count - 5), visible)
    } else {
        format!("{}{}", "*".repeat(count - 4), visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_mobile_accepts_plan_numbers() {
        assert!(is_valid_mobile("9876543210"));
        assert!(is_valid_mobile("6123456789"));
        assert!(is_valid_mobile("919876543210"));
        assert!(is_valid_mobile("+919876543210"));
        assert!(is_valid_mobile("+9876543210"));
        assert!(is_valid_mobile(" 98765 43210 "));
        assert!(is_valid_mobile("+91 98765\t43210"));
    }

    #[test]
    fn test_is_valid_mobile_rejects_others() {
        assert!(!is_valid_mobile("987654321")); // 9 digits
        assert!(!is_valid_mobile("98765432101")); // 11 digits
        assert!(!is_valid_mobile("5876543210")); // leading 5
        assert!(!is_valid_mobile("0876543210")); // leading 0
        assert!(!is_valid_mobile("invalid"));
        assert!(!is_valid_mobile(""));
        assert!(!is_valid_mobile("+1 415 555 2671"));
        assert!(!is_valid_mobile("98765-43210"));
        assert!(!is_valid_mobile("++919876543210"));
    }

    #[test]
    fn test_normalize_mobile() {
        assert_eq!(normalize_mobile("9876543210"), "919876543210");
        assert_eq!(normalize_mobile("+919876543210"), "919876543210");
        assert_eq!(normalize_mobile("919876543210"), "919876543210");
        assert_eq!(normalize_mobile(" 98765 43210"), "919876543210");
        assert_eq!(normalize_mobile("+9876543210"), "919876543210");
    }

    #[test]
    fn test_normalize_mobile_is_idempotent() {
        for raw in ["9876543210", "+919876543210", "8123456789"] {
            let once = normalize_mobile(raw);
            assert_eq!(normalize_mobile(&once), once);
        }
    }

    #[test]
    fn test_normalize_mobile_best_effort() {
        assert_eq!(normalize_mobile("invalid"), "invalid");
        assert_eq!(normalize_mobile("+12345"), "12345");
        assert_eq!(normalize_mobile(""), "");
    }

    #[test]
    fn test_to_local_number() {
        assert_eq!(to_local_number("+919876543210"), Some("9876543210".to_string()));
        assert_eq!(to_local_number("9876543210"), Some("9876543210".to_string()));
        assert_eq!(to_local_number("12345"), None);
        assert_eq!(to_local_number("invalid"), None);
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("919876543210"), "********3210");
        assert_eq!(mask_phone_number("+919876543210"), "+********3210");
        assert_eq!(mask_phone_number("1234"), "****");
        assert_eq!(mask_phone_number("12"), "**");
    }
}
