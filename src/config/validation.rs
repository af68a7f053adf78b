//! Field-by-field validation of raw plugin configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::coercion::{to_bool, type_name};

/// Outcome of validating a configuration mapping.
///
/// `errors` keeps every violation in the order fields were checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub success: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            errors: Vec::new(),
        }
    }

    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
        }
    }
}

/// Reads typed fields out of a JSON mapping, collecting violations instead
/// of stopping at the first one.
pub(crate) struct FieldReader<'a> {
    fields: Option<&'a Map<String, Value>>,
    errors: Vec<String>,
}

impl<'a> FieldReader<'a> {
    /// `Null` reads as an empty mapping.
    pub(crate) fn new(raw: &'a Value) -> Self {
        static EMPTY: std::sync::OnceLock<Map<String, Value>> = std::sync::OnceLock::new();
        match raw {
            Value::Object(map) => Self {
                fields: Some(map),
                errors: Vec::new(),
            },
            Value::Null => Self {
                fields: Some(EMPTY.get_or_init(Map::new)),
                errors: Vec::new(),
            },
            other => Self {
                fields: None,
                errors: vec![format!(
                    "config: expected a mapping, got {}",
                    type_name(other)
                )],
            },
        }
    }

    pub(crate) fn required_str(&mut self, key: &str) -> Option<String> {
        let fields = self.fields?;
        match fields.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.errors.push(format!(
                    "{}: expected a string, got {}",
                    key,
                    type_name(other)
                ));
                None
            }
            None => {
                self.errors.push(format!("{}: field required", key));
                None
            }
        }
    }

    /// Optional boolean under `key`, falling back to the legacy `aliases`
    /// when `key` is absent.
    pub(crate) fn optional_bool(&mut self, key: &str, aliases: &[&str], default: bool) -> bool {
        let Some(fields) = self.fields else {
            return default;
        };
        let found = std::iter::once(key)
            .chain(aliases.iter().copied())
            .find_map(|name| fields.get(name).map(|value| (name, value)));
        match found {
            Some((name, value)) => match to_bool(value) {
                Ok(b) => b,
                Err(reason) => {
                    self.errors.push(format!("{}: {}", name, reason));
                    default
                }
            },
            None => default,
        }
    }

    /// Keys present in the mapping but not in `known`.
    pub(crate) fn unknown_keys(&self, known: &[&str]) -> Vec<String> {
        self.fields
            .map(|fields| {
                fields
                    .keys()
                    .filter(|k| !known.contains(&k.as_str()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn finish(self) -> ValidationResult {
        ValidationResult::from_errors(self.errors)
    }
}
