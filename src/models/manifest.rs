//! Decoded view of `manifest.json`
//!
//! The authoring tool accepts half-written manifests, so fields are kept as raw
//! JSON values and presence is judged loosely: `null`, `false`, `0`, `""` and an
//! absent key all count as missing.

use serde_json::Value;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    root: Value,
}

impl Manifest {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Raw field lookup. Non-object documents have no fields.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.root.get(name)
    }

    /// Whether the field is present with a truthy value.
    pub fn has(&self, name: &str) -> bool {
        self.field(name).is_some_and(is_truthy)
    }

    pub fn manifest_version(&self) -> Option<&Value> {
        self.field("manifest_version")
    }

    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.field("version").and_then(Value::as_str)
    }

    /// The `icons` value when truthy.
    pub fn icons(&self) -> Option<&Value> {
        self.field("icons").filter(|v| is_truthy(v))
    }

    /// Icon reference for a size key when truthy. Non-string references are
    /// rendered as JSON text so they can be reported.
    pub fn icon(&self, size: &str) -> Option<String> {
        self.icons()
            .and_then(|icons| icons.get(size))
            .filter(|v| is_truthy(v))
            .map(value_to_display)
    }

    /// The `permissions` value when truthy.
    pub fn permissions(&self) -> Option<&Value> {
        self.field("permissions").filter(|v| is_truthy(v))
    }

    /// The `content_security_policy` value when truthy.
    pub fn content_security_policy(&self) -> Option<&Value> {
        self.field("content_security_policy").filter(|v| is_truthy(v))
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }
}

/// JavaScript-style truthiness for JSON values.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings verbatim, everything else as compact JSON.
pub fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
