//! Error model for validation failures
//!
//! Every failure kind is identified by an [`ErrorCode`]: an opaque token
//! compared by identity, never by its label. A [`ValidationError`] carries
//! the effective (possibly overridden) message together with the original
//! [`ErrorInfo`] as its `cause`, so callers can branch on `cause().code`
//! regardless of how the message was localized.
//!
//! Aggregate failures (objects, arrays) attach per-field or per-index child
//! errors through [`Issues`].

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

// ============================================================================
// ERROR CODE
// ============================================================================

static NEXT_CODE: AtomicU32 = AtomicU32::new(1);

/// An opaque, globally unique identifier for one failure kind.
///
/// Two codes are equal only if they were produced by the same
/// [`ErrorCode::new`] call. The label is kept for debugging and
/// serialization and plays no part in equality.
///
/// # Examples
///
/// ```
/// use formguard_validator::foundation::ErrorCode;
///
/// let a = ErrorCode::new("length");
/// let b = ErrorCode::new("length");
/// assert_ne!(a, b);
/// assert_eq!(a, a);
/// ```
#[derive(Clone, Copy)]
pub struct ErrorCode {
    id: u32,
    label: &'static str,
}

impl ErrorCode {
    /// Allocates a fresh code. Colliding labels still yield distinct codes.
    pub fn new(label: &'static str) -> Self {
        Self {
            id: NEXT_CODE.fetch_add(1, Ordering::Relaxed),
            label,
        }
    }

    /// Numeric identity of this code within the current process.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Debug label supplied at creation.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// Creates a new [`ErrorCode`].
pub fn create_error_code(label: &'static str) -> ErrorCode {
    ErrorCode::new(label)
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorCode {}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorCode({}#{})", self.label, self.id)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label)
    }
}

// ============================================================================
// ERROR INFO
// ============================================================================

/// A failure kind: its code and default message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    /// Identity of the failure kind.
    pub code: ErrorCode,
    /// Default human-readable description.
    pub message: Cow<'static, str>,
}

impl ErrorInfo {
    /// Pairs an existing code with a message.
    pub fn new(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Allocates a new code for `label` and pairs it with `message`.
    ///
    /// This is how the built-in `*_ERROR_INFO` statics are declared.
    pub fn register(label: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCode::new(label), message)
    }
}

// ============================================================================
// ISSUES
// ============================================================================

/// Child errors of an aggregate failure, keyed by their location.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Issues {
    /// Failing object fields in schema declaration order.
    Fields(IndexMap<String, ValidationError>),
    /// Failing array elements by index.
    Items(BTreeMap<usize, ValidationError>),
}

impl Issues {
    /// Number of direct child errors.
    pub fn len(&self) -> usize {
        match self {
            Self::Fields(fields) => fields.len(),
            Self::Items(items) => items.len(),
        }
    }

    /// Returns true when there are no child errors.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A validation failure.
///
/// Immutable once built: there are no setters, and [`with_message`] consumes
/// the error to produce a new one. The `cause` always holds the original
/// [`ErrorInfo`] even when the display message was overridden.
///
/// [`with_message`]: ValidationError::with_message
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: Cow<'static, str>,
    cause: ErrorInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    issues: Option<Issues>,
}

impl ValidationError {
    /// Builds an error whose message is the info's default message.
    pub fn new(info: &ErrorInfo) -> Self {
        Self::with_override(info, None)
    }

    /// Builds an error, replacing the display message when `message` is set.
    pub fn with_override(info: &ErrorInfo, message: Option<Cow<'static, str>>) -> Self {
        Self {
            message: message.unwrap_or_else(|| info.message.clone()),
            cause: info.clone(),
            issues: None,
        }
    }

    /// Builds an aggregate error carrying per-field or per-index children.
    pub fn aggregate(info: &ErrorInfo, issues: Issues) -> Self {
        Self {
            message: info.message.clone(),
            cause: info.clone(),
            issues: Some(issues),
        }
    }

    /// Returns the same failure with a different display message.
    #[must_use = "the original error is consumed"]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }

    /// The effective message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The originating failure kind.
    pub fn cause(&self) -> &ErrorInfo {
        &self.cause
    }

    /// Shorthand for `cause().code`.
    pub fn code(&self) -> ErrorCode {
        self.cause.code
    }

    /// Child errors, if this is an aggregate.
    pub fn issues(&self) -> Option<&Issues> {
        self.issues.as_ref()
    }

    /// Child error for an object field.
    pub fn field(&self, name: &str) -> Option<&ValidationError> {
        match &self.issues {
            Some(Issues::Fields(fields)) => fields.get(name),
            _ => None,
        }
    }

    /// Child error for an array element.
    pub fn item(&self, index: usize) -> Option<&ValidationError> {
        match &self.issues {
            Some(Issues::Items(items)) => items.get(&index),
            _ => None,
        }
    }
}
