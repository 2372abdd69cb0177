//! Dotted field paths over nested extra-field mappings
use serde_json::{Map, Value};
use std::fmt;

pub const SEPARATOR: char = '.';

/// A parsed dotted path such as `fieldA.childA`.
///
/// Splitting is literal: `""` is the single segment `""` and `a..b` is
/// `["a", "", "b"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(source: &str) -> Self {
        Self {
            segments: source.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Removes this path from `container`; see [`remove_path`].
    pub fn remove_from(&self, container: &mut Map<String, Value>) -> Option<Value> {
        remove_path(container, &self.segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Deletes the leaf key named by `path` if every ancestor resolves to an
/// object. Missing keys and non-object intermediates are no-ops. Emptied
/// parent objects are left in place.
pub fn remove_path<S: AsRef<str>>(container: &mut Map<String, Value>, path: &[S]) -> Option<Value> {
    match path {
        [] => None,
        [leaf] => container.remove(leaf.as_ref()),
        [head, rest @ ..] => match container.get_mut(head.as_ref()) {
            Some(Value::Object(child)) => remove_path(child, rest),
            _ => None,
        },
    }
}
