//! Declarative object schema and the walker that evaluates it

use super::error::{FieldFailure, ValidationError};
use super::rule::Rule;
use serde_json::{Map, Value};

/// Shape and rules of one key in the form value tree
#[derive(Debug, Clone)]
pub enum FieldSchema {
    String(Vec<Rule>),
    Object(Schema),
}

/// Ordered set of keyed field schemas
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, FieldSchema)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &str, schema: FieldSchema) -> Self {
        self.fields.push((key.to_string(), schema));
        self
    }

    /// Shorthand for a string field with `rules`
    pub fn string(self, key: &str, rules: Vec<Rule>) -> Self {
        self.field(key, FieldSchema::String(rules))
    }

    /// Shorthand for a nested object field
    pub fn object(self, key: &str, schema: Schema) -> Self {
        self.field(key, FieldSchema::Object(schema))
    }

    /// Validate `data`, collecting every failure instead of stopping at the first
    pub fn validate(&self, data: &Value) -> Result<(), ValidationError> {
        let root = data.as_object().ok_or(ValidationError::RootNotObject)?;

        let mut failures = Vec::new();
        self.walk("", Some(root), &mut failures);

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Failed(failures))
        }
    }

    fn walk(&self, prefix: &str, node: Option<&Map<String, Value>>, out: &mut Vec<FieldFailure>) {
        for (key, schema) in &self.fields {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            let value = node.and_then(|map| map.get(key));

            match schema {
                FieldSchema::String(rules) => check_string(&path, value, rules, out),
                FieldSchema::Object(nested) => match value {
                    None | Some(Value::Null) => nested.walk(&path, None, out),
                    Some(Value::Object(map)) => nested.walk(&path, Some(map), out),
                    Some(_) => out.push(FieldFailure {
                        message: format!("{path} must be a `object` type"),
                        path,
                    }),
                },
            }
        }
    }
}

fn check_string(path: &str, value: Option<&Value>, rules: &[Rule], out: &mut Vec<FieldFailure>) {
    let text = match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(Value::Array(_) | Value::Object(_)) => {
            out.push(FieldFailure {
                path: path.to_string(),
                message: format!("{path} must be a `string` type"),
            });
            return;
        }
    };

    out.extend(
        rules
            .iter()
            .filter(|rule| !rule.check(text.as_deref()))
            .map(|rule| FieldFailure {
                path: path.to_string(),
                message: rule.message().to_string(),
            }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn failures(result: Result<(), ValidationError>) -> Vec<(String, String)> {
        match result {
            Err(ValidationError::Failed(f)) => f.into_iter().map(|f| (f.path, f.message)).collect(),
            other => panic!("expected failures, got {other:?}"),
        }
    }

    fn pair(path: &str, message: &str) -> (String, String) {
        (path.to_string(), message.to_string())
    }

    #[test]
    fn test_valid_data_passes() {
        let schema = Schema::new().string("name", vec![Rule::required("required")]);
        assert_eq!(schema.validate(&json!({"name": "Ana"})), Ok(()));
    }

    #[test]
    fn test_collects_all_failures_in_order() {
        let schema = Schema::new()
            .string("name", vec![Rule::required("name required")])
            .string(
                "street",
                vec![Rule::min_length(3, "too short"), Rule::required("street required")],
            );
        assert_eq!(
            failures(schema.validate(&json!({"name": "", "street": ""}))),
            vec![
                pair("name", "name required"),
                pair("street", "too short"),
                pair("street", "street required"),
            ]
        );
    }

    #[test]
    fn test_missing_key_fails_required_only() {
        let schema = Schema::new().string(
            "street",
            vec![Rule::min_length(3, "too short"), Rule::required("required")],
        );
        assert_eq!(
            failures(schema.validate(&json!({}))),
            vec![pair("street", "required")]
        );
    }

    #[test]
    fn test_nested_paths_are_dotted() {
        let schema = Schema::new().object(
            "address",
            Schema::new().string("street", vec![Rule::required("required")]),
        );
        assert_eq!(
            failures(schema.validate(&json!({"address": {"street": ""}}))),
            vec![pair("address.street", "required")]
        );
    }

    #[test]
    fn test_missing_object_still_checks_children() {
        let schema = Schema::new().object(
            "address",
            Schema::new().string("street", vec![Rule::required("required")]),
        );
        assert_eq!(
            failures(schema.validate(&json!({"address": null}))),
            vec![pair("address.street", "required")]
        );
    }

    #[test]
    fn test_type_mismatches() {
        let schema = Schema::new()
            .string("name", vec![])
            .object("address", Schema::new());
        assert_eq!(
            failures(schema.validate(&json!({"name": {"first": "Ana"}, "address": "Rua X"}))),
            vec![
                pair("name", "name must be a `string` type"),
                pair("address", "address must be a `object` type"),
            ]
        );
    }

    #[test]
    fn test_numbers_are_coerced() {
        let schema = Schema::new().string("number", vec![Rule::min_length(2, "short")]);
        assert_eq!(schema.validate(&json!({"number": 10})), Ok(()));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let schema = Schema::new().string("name", vec![Rule::required("required")]);
        assert_eq!(schema.validate(&json!({"name": "Ana", "extra": 1})), Ok(()));
    }

    #[test]
    fn test_non_object_root_is_engine_error() {
        let schema = Schema::new();
        assert_eq!(
            schema.validate(&json!("not a form")),
            Err(ValidationError::RootNotObject)
        );
    }
}
