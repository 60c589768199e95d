//! Content validators
//!
//! Format checks for common string identifiers.

use std::sync::LazyLock;

use crate::foundation::{ErrorInfo, FnRule, create_rule};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static GUID_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .unwrap()
});

/// Longest accepted address: a 64-character local part, `@` and a
/// 255-character domain.
pub const EMAIL_MAX_LENGTH: usize = 320;

pub static INVALID_EMAIL_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("email", "Invalid email address"));

pub static LENGTH_EMAIL_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("email_length", "Email address is too long"));

pub static GUID_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("guid", "Invalid identifier"));

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

/// Validates email format.
///
/// Addresses longer than [`EMAIL_MAX_LENGTH`] report
/// [`LENGTH_EMAIL_ERROR_INFO`] before the format is looked at.
pub fn email() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        if value.chars().count() > EMAIL_MAX_LENGTH {
            return Err(ctx.create_error(&LENGTH_EMAIL_ERROR_INFO));
        }
        if !EMAIL_REGEX.is_match(value) {
            return Err(ctx.create_error(&INVALID_EMAIL_ERROR_INFO));
        }
        Ok(())
    })
}

// ============================================================================
// GUID VALIDATOR
// ============================================================================

/// Validates a GUID in `8-4-4-4-12` hex form, either case.
pub fn guid() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        if !GUID_REGEX.is_match(value) {
            return Err(ctx.create_error(&GUID_ERROR_INFO));
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;

    #[test]
    fn test_email_valid() {
        let validator = email();
        assert!(validator.validate("user@example.com").is_ok());
        assert!(validator.validate("test.user+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        let validator = email();
        assert!(validator.validate("invalid").is_err());
        assert!(validator.validate("@example.com").is_err());
        assert!(validator.validate("user@").is_err());
        assert_eq!(
            validator.validate("user@").unwrap_err().code(),
            INVALID_EMAIL_ERROR_INFO.code
        );
    }

    #[test]
    fn test_email_length() {
        let local = "a".repeat(64);
        let label = "b".repeat(60);
        let fits = format!("{local}@{label}.{label}.{label}.ru");
        assert!(email().validate(&fits).is_ok());

        let long = format!("{local}@{}.ru", vec![label.as_str(); 5].join("."));
        assert!(long.len() > EMAIL_MAX_LENGTH);
        assert_eq!(email().validate(&long).unwrap_err().code(), LENGTH_EMAIL_ERROR_INFO.code);
    }

    #[test]
    fn test_guid() {
        let validator = guid();
        assert!(validator.validate("3F2504E0-4F89-11D3-9A0C-0305E82C3301").is_ok());
        assert!(validator.validate("3f2504e0-4f89-11d3-9a0c-0305e82c3301").is_ok());
        assert!(validator.validate("3F2504E04F8911D39A0C0305E82C3301").is_err());
        assert!(validator.validate("3F2504E0-4F89-11D3-9A0C-0305E82C330").is_err());
        assert_eq!(
            validator.validate("not-a-guid").unwrap_err().code(),
            GUID_ERROR_INFO.code
        );
    }
}
