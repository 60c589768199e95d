//! Presentation of aggregate errors
//!
//! Object and array guards return nested errors keyed by field name and
//! element index. This module turns that tree into shapes a UI can use:
//!
//! - [`ValidationError::flatten`]: `(path, message)` pairs, depth first
//! - [`to_plain_error`]: a JSON tree of messages mirroring the input
//! - [`to_pretty_error`]: one `path: message` line per failure

use std::fmt;

use serde_json::{Map, Value};

use crate::foundation::{Issues, ValidationError};

// ============================================================================
// PATHS
// ============================================================================

/// One step from a parent value to a child.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// Location of a failing value relative to the validated root.
///
/// Renders as `user.addresses[1].city`; the root itself is the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ErrorPath(Vec<PathSegment>);

impl ErrorPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment);
        Self(segments)
    }
}

impl fmt::Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if position == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// FLATTENING
// ============================================================================

impl ValidationError {
    /// Leaf failures with their paths, in field declaration and index order.
    ///
    /// # Examples
    ///
    /// ```
    /// use formguard_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let form = object(Schema::new().field("phones", array(string(rules![only_number()]))));
    /// let error = form.validate(&json!({ "phones": ["123", "12-3"] })).unwrap_err();
    ///
    /// let flat = error.flatten();
    /// assert_eq!(flat.len(), 1);
    /// assert_eq!(flat[0].0.to_string(), "phones[1]");
    /// assert_eq!(flat[0].1, "Only digits are allowed");
    /// ```
    pub fn flatten(&self) -> Vec<(ErrorPath, &str)> {
        let mut out = Vec::new();
        collect(self, &ErrorPath::root(), &mut out);
        out
    }
}

fn collect<'e>(error: &'e ValidationError, path: &ErrorPath, out: &mut Vec<(ErrorPath, &'e str)>) {
    match error.issues() {
        None => out.push((path.clone(), error.message())),
        Some(Issues::Fields(fields)) => {
            for (name, child) in fields {
                collect(child, &path.child(PathSegment::Field(name.clone())), out);
            }
        }
        Some(Issues::Items(items)) => {
            for (index, child) in items {
                collect(child, &path.child(PathSegment::Index(*index)), out);
            }
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Nested JSON of messages: objects for field issues, objects keyed by
/// index for item issues, strings for leaves.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use serde_json::json;
///
/// let form = object(Schema::new().field("inn", string(rules![inn_ul()])));
/// let error = form.validate(&json!({ "inn": "1" })).unwrap_err();
///
/// assert_eq!(to_plain_error(&error), json!({ "inn": "Invalid organisation INN" }));
/// ```
pub fn to_plain_error(error: &ValidationError) -> Value {
    match error.issues() {
        None => Value::String(error.message().to_owned()),
        Some(Issues::Fields(fields)) => Value::Object(
            fields
                .iter()
                .map(|(name, child)| (name.clone(), to_plain_error(child)))
                .collect::<Map<_, _>>(),
        ),
        Some(Issues::Items(items)) => Value::Object(
            items
                .iter()
                .map(|(index, child)| (index.to_string(), to_plain_error(child)))
                .collect::<Map<_, _>>(),
        ),
    }
}

/// One line per leaf failure; a failure of the root value is just its
/// message.
pub fn to_pretty_error(error: &ValidationError) -> String {
    error
        .flatten()
        .into_iter()
        .map(|(path, message)| {
            if path.is_root() {
                message.to_owned()
            } else {
                format!("{path}: {message}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorInfo, Rule};
    use crate::guards::{Schema, array, object, string};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn path_display() {
        let path = ErrorPath::root()
            .child(PathSegment::Field("user".into()))
            .child(PathSegment::Field("addresses".into()))
            .child(PathSegment::Index(1))
            .child(PathSegment::Field("city".into()));
        assert_eq!(path.to_string(), "user.addresses[1].city");
        assert_eq!(ErrorPath::root().to_string(), "");
    }

    #[test]
    fn scalar_error_flattens_to_root() {
        let info = ErrorInfo::register("x", "Broken");
        let error = ValidationError::new(&info);

        let flat = error.flatten();
        assert_eq!(flat, vec![(ErrorPath::root(), "Broken")]);
        assert_eq!(to_pretty_error(&error), "Broken");
        assert_eq!(to_plain_error(&error), json!("Broken"));
    }

    #[test]
    fn nested_error_keeps_paths() {
        let guard = object(
            Schema::new()
                .nested("user", Schema::new().field("addresses", array(object(
                    Schema::new().field("city", string(Vec::new())),
                )))),
        );
        let error = guard
            .validate(&json!({ "user": { "addresses": [{ "city": "Omsk" }, { "city": "" }] } }))
            .unwrap_err();

        assert_eq!(to_pretty_error(&error), "user.addresses[1].city: Required");
        assert_eq!(
            to_plain_error(&error),
            json!({ "user": { "addresses": { "1": { "city": "Required" } } } })
        );
    }
}
