//! # Local form validation
//!
//! Everything here runs before any network call: a form that fails validation
//! never produces a request. Messages are the exact strings the views show.

/// Shown when a required course field is missing.
pub const REQUIRED_FIELDS_MSG: &str = "Please fill in all required fields";
/// Shown when the new password and its confirmation differ.
pub const PASSWORD_MISMATCH_MSG: &str = "Passwords do not match";

/// Capacity used when the field is left blank or unparseable.
pub const DEFAULT_CAPACITY: u32 = 50;
pub const MIN_CAPACITY: u32 = 1;
pub const MAX_CAPACITY: u32 = 500;

/// Check the admin course form's required fields: a non-blank title and a
/// selected instructor. Returns the instructor id on success.
pub fn validate_course_form(title: &str, instructor: &str) -> Result<i64, &'static str> {
    if title.trim().is_empty() {
        return Err(REQUIRED_FIELDS_MSG);
    }
    instructor.trim().parse().map_err(|_| REQUIRED_FIELDS_MSG)
}

/// Parse the capacity field, defaulting when blank or unparseable and
/// clamping the result to `[MIN_CAPACITY, MAX_CAPACITY]`.
pub fn parse_capacity(raw: &str) -> u32 {
    raw.trim()
        .parse()
        .unwrap_or(DEFAULT_CAPACITY)
        .clamp(MIN_CAPACITY, MAX_CAPACITY)
}

/// Validate an optional password change. Returns the password to send:
/// `None` when the field was left blank (keep the current password).
pub fn validate_password_change(
    password: &str,
    confirm: &str,
) -> Result<Option<String>, &'static str> {
    if password.is_empty() {
        return Ok(None);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH_MSG);
    }
    Ok(Some(password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_form_requires_a_title() {
        assert_eq!(validate_course_form("", "2"), Err(REQUIRED_FIELDS_MSG));
        assert_eq!(validate_course_form("   ", "2"), Err(REQUIRED_FIELDS_MSG));
    }

    #[test]
    fn course_form_requires_an_instructor() {
        // "Intro to Go" with the instructor omitted is blocked locally.
        assert_eq!(
            validate_course_form("Intro to Go", ""),
            Err(REQUIRED_FIELDS_MSG)
        );
    }

    #[test]
    fn course_form_accepts_complete_input() {
        assert_eq!(validate_course_form("Intro to Go", "2"), Ok(2));
        assert_eq!(validate_course_form("Intro to Go", " 14 "), Ok(14));
    }

    #[test]
    fn capacity_defaults_when_blank() {
        assert_eq!(parse_capacity(""), DEFAULT_CAPACITY);
        assert_eq!(parse_capacity("abc"), DEFAULT_CAPACITY);
    }

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(parse_capacity("0"), MIN_CAPACITY);
        assert_eq!(parse_capacity("-5"), DEFAULT_CAPACITY); // unparseable as u32
        assert_eq!(parse_capacity("501"), MAX_CAPACITY);
        assert_eq!(parse_capacity("9999"), MAX_CAPACITY);
        assert_eq!(parse_capacity("250"), 250);
    }

    #[test]
    fn blank_password_means_keep_current() {
        assert_eq!(validate_password_change("", ""), Ok(None));
        assert_eq!(validate_password_change("", "stale"), Ok(None));
    }

    #[test]
    fn mismatched_passwords_are_rejected_locally() {
        assert_eq!(
            validate_password_change("abc123", "xyz999"),
            Err(PASSWORD_MISMATCH_MSG)
        );
    }

    #[test]
    fn matching_passwords_pass_through() {
        assert_eq!(
            validate_password_change("abc123", "abc123"),
            Ok(Some("abc123".to_string()))
        );
    }
}
