use crate::utils::error::{EtlError, Result};
use serde_json::{Map, Value};
use std::fmt;

pub const LAYERS_KEY: &str = "layers";
pub const NAME_KEY: &str = "nm";

/// Root object of a Lottie animation. Every key other than `layers` passes
/// through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct LottieDocument {
    pub data: Map<String, Value>,
}

impl LottieDocument {
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(data) => Ok(Self { data }),
            other => Err(EtlError::InvalidDocument {
                message: format!("expected a JSON object at the root, found {}", kind(&other)),
            }),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Two-space indented, no trailing newline.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.data)?)
    }

    /// The `layers` array, or an empty slice when the key is absent.
    pub fn layers(&self) -> Result<&[Value]> {
        match self.data.get(LAYERS_KEY) {
            None => Ok(&[]),
            Some(Value::Array(layers)) => Ok(layers.as_slice()),
            Some(other) => Err(EtlError::InvalidDocument {
                message: format!("'{}' must be an array, found {}", LAYERS_KEY, kind(other)),
            }),
        }
    }

    /// Moves the `layers` array out, leaving an empty one in its slot so the
    /// key keeps its position.
    pub fn take_layers(&mut self) -> Result<Vec<Value>> {
        match self.data.get_mut(LAYERS_KEY) {
            None => Ok(Vec::new()),
            Some(Value::Array(layers)) => Ok(std::mem::take(layers)),
            Some(other) => Err(EtlError::InvalidDocument {
                message: format!("'{}' must be an array, found {}", LAYERS_KEY, kind(other)),
            }),
        }
    }

    pub fn set_layers(&mut self, layers: Vec<Value>) {
        self.data.insert(LAYERS_KEY.to_string(), Value::Array(layers));
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.data)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalReport {
    pub layer_name: String,
    pub initial_count: usize,
    pub final_count: usize,
}

impl RemovalReport {
    pub fn removed(&self) -> usize {
        self.initial_count - self.final_count
    }

    pub fn nothing_removed(&self) -> bool {
        self.removed() == 0
    }

    pub fn message(&self) -> String {
        if self.nothing_removed() {
            format!("No layer named '{}' found. Nothing removed.", self.layer_name)
        } else {
            format!("Removed {} layer(s) named '{}'.", self.removed(), self.layer_name)
        }
    }
}

impl fmt::Display for RemovalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub document: LottieDocument,
    pub report: RemovalReport,
}
