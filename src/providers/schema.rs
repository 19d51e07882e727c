use crate::errors::{ActionError, ActionResult};
use serde_json::Value;
use std::fmt;

/// JSON type a parameter must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl FieldType {
    fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Object => value.is_object(),
            FieldType::Array => value.is_array(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldType::String => "a string",
            FieldType::Number => "a number",
            FieldType::Boolean => "a boolean",
            FieldType::Object => "an object",
            FieldType::Array => "an array",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldType,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldType) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldType) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Declared shape of a provider's parameter object.
///
/// Unknown fields are allowed; declared fields are checked for presence and
/// JSON type so that a failure can name the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSchema {
    pub fields: &'static [FieldSpec],
}

impl ParameterSchema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// Parses `params_json` and checks it against the schema.
    pub fn parse(&self, provider: &str, params_json: &str) -> ActionResult<Value> {
        let value: Value = serde_json::from_str(params_json)
            .map_err(|e| ActionError::parameter(provider, "$", format!("is not valid JSON: {}", e)))?;
        self.validate(provider, &value)?;
        Ok(value)
    }

    pub fn validate(&self, provider: &str, value: &Value) -> ActionResult<()> {
        let object = value
            .as_object()
            .ok_or_else(|| ActionError::parameter(provider, "$", "must be a JSON object"))?;

        for field in self.fields {
            match object.get(field.name) {
                None | Some(Value::Null) if field.required => {
                    return Err(ActionError::parameter(provider, field.name, "is required"));
                }
                None | Some(Value::Null) => {}
                Some(v) if !field.kind.accepts(v) => {
                    return Err(ActionError::parameter(
                        provider,
                        field.name,
                        format!("must be {}", field.kind),
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
