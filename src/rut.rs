//! RUT normalization and check-digit validation.
//!
//! A RUT is the Chilean organization identifier used as the login key: a
//! digit body followed by a single check character (`0-9` or `K`). Input
//! arrives in free form (`12.345.678-k`, `12345678K`, with stray spaces);
//! the database only ever sees the canonical `<digits><check>` shape.

/// Canonicalize a free-form RUT into `<digits><check>` (check uppercased).
///
/// Returns `None` when the input is too short, the body is not all digits,
/// or the check character does not match the modulo-11 checksum.
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let mut chars: Vec<char> = raw
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect();

    if chars.len() < 2 {
        return None;
    }

    let check = chars.pop()?;
    let body: String = chars.into_iter().collect();

    if !body.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    if expected_check_digit(&body)? == check {
        Some(format!("{body}{check}"))
    } else {
        None
    }
}

/// True when the input normalizes to a checksum-valid RUT.
#[must_use]
pub fn is_valid(raw: &str) -> bool {
    normalize(raw).is_some()
}

/// Weighted modulo-11 check digit over the digit body.
///
/// Weights cycle 2..=7 starting from the least significant digit; the
/// remainder maps 11 to `0` and 10 to `K`.
fn expected_check_digit(body: &str) -> Option<char> {
    let mut factor: u64 = 2;
    let mut sum: u64 = 0;

    for digit in body.chars().rev() {
        sum += u64::from(digit.to_digit(10)?) * factor;
        factor = if factor == 7 { 2 } else { factor + 1 };
    }

    match 11 - (sum % 11) {
        11 => Some('0'),
        10 => Some('K'),
        rest => char::from_digit(u32::try_from(rest).ok()?, 10),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_validates() {
        assert_eq!(normalize("7.374.364-8").as_deref(), Some("73743648"));
        assert_eq!(normalize("12.345.678-5").as_deref(), Some("123456785"));
        assert_eq!(normalize(" 76086428-5 ").as_deref(), Some("760864285"));
    }

    #[test]
    fn normalize_uppercases_check_character() {
        assert_eq!(normalize("68-k").as_deref(), Some("68K"));
        assert_eq!(normalize("68-K").as_deref(), Some("68K"));
    }

    #[test]
    fn normalize_rejects_wrong_check_digit() {
        assert_eq!(normalize("12.345.678-9"), None);
        assert_eq!(normalize("73743647"), None);
        assert_eq!(normalize("7-K"), None);
    }

    #[test]
    fn normalize_rejects_short_input() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("5"), None);
        assert_eq!(normalize(".-5"), None);
    }

    #[test]
    fn normalize_rejects_non_digit_body() {
        assert_eq!(normalize("ABCD-5"), None);
        assert_eq!(normalize("12A45678-5"), None);
        assert_eq!(normalize("KK"), None);
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["7.374.364-8", "12.345.678-5", "68-k", "11.111.111-1"] {
            let normalized = normalize(raw).expect("valid vector");
            assert_eq!(normalize(&normalized).as_deref(), Some(normalized.as_str()));
        }
    }

    #[test]
    fn check_digit_golden_vectors() {
        assert_eq!(expected_check_digit("7374364"), Some('8'));
        assert_eq!(expected_check_digit("76086428"), Some('5'));
        assert_eq!(expected_check_digit("12345678"), Some('5'));
        assert_eq!(expected_check_digit("11111111"), Some('1'));
        assert_eq!(expected_check_digit("68"), Some('K'));
        assert_eq!(expected_check_digit("14"), Some('0'));
    }

    #[test]
    fn is_valid_matches_normalize() {
        assert!(is_valid("7.374.364-8"));
        assert!(!is_valid("7.374.364-0"));
        assert!(!is_valid("x"));
    }
}
