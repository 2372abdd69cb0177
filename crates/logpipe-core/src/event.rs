//! Event Model: LogEvent carried between pipeline stages
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single structured event flowing through the filter chain.
///
/// On the wire `extra` is flattened next to `@timestamp` and `message`, so
/// `{"@timestamp": "...", "message": "hi", "host": "a"}` round-trips with
/// `host` landing in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    #[serde(rename = "@timestamp")]
    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub message: String,

    /// Open-ended payload; nested mappings are `Value::Object`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LogEvent {
    pub fn new(timestamp: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
            extra: Map::new(),
        }
    }

    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Sets a top-level extra field, replacing any previous value.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Looks up a nested extra field by path segments.
    ///
    /// Returns `None` when any segment is missing or an intermediate value
    /// is not an object.
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.extra.get(first.as_ref())?;
        for segment in rest {
            current = current.as_object()?.get(segment.as_ref())?;
        }
        Some(current)
    }
}
