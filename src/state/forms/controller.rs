//! Form controller: the table of mounted fields and its read/write API

use super::field::{FieldHandle, InputKind};
use super::path::{FieldPath, PathError};
use super::value_tree::{get_at, insert_at, leaf_paths, leaf_text};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Field path to human-readable validation message
pub type ErrorMap = BTreeMap<String, String>;

/// Owns every mounted field handle.
///
/// Handles are kept in registration order (which is also display order) and
/// indexed by their resolved path, so no two handles ever share a path.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    fields: Vec<FieldHandle>,
    index: HashMap<FieldPath, usize>,
    initial_data: Option<Value>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller whose fields take their defaults from `initial_data`
    pub fn with_initial_data(initial_data: Value) -> Self {
        Self {
            initial_data: Some(initial_data),
            ..Self::default()
        }
    }

    /// Register (or replace) the handle at `path`.
    ///
    /// The default value is `initial_value`, falling back to the initial data
    /// at the same path. A replaced handle keeps its display slot. A path that
    /// nests inside, or contains, another mounted path is rejected, since both
    /// could not be leaves of one value tree.
    pub fn register_field(
        &mut self,
        path: FieldPath,
        kind: InputKind,
        initial_value: Option<String>,
    ) -> Result<(), PathError> {
        if let Some(mounted) = self.overlapping(&path) {
            return Err(PathError::Overlaps {
                path: path.to_string(),
                mounted: mounted.to_string(),
            });
        }

        let default_value = initial_value.or_else(|| {
            self.initial_data
                .as_ref()
                .and_then(|data| get_at(data, &path))
                .and_then(leaf_text)
        });
        let handle = FieldHandle::new(path.clone(), kind, default_value);

        match self.index.get(&path) {
            Some(&slot) => self.fields[slot] = handle,
            None => {
                self.index.insert(path, self.fields.len());
                self.fields.push(handle);
            }
        }
        Ok(())
    }

    /// A mounted path other than `path` itself that nests with it
    pub fn overlapping(&self, path: &FieldPath) -> Option<&FieldPath> {
        self.fields
            .iter()
            .map(|f| &f.path)
            .find(|mounted| *mounted != path && mounted.overlaps(path))
    }

    /// Drop the handle at `path`, returning whether one existed
    pub fn unregister_field(&mut self, path: &FieldPath) -> bool {
        let Some(slot) = self.index.remove(path) else {
            return false;
        };
        self.fields.remove(slot);
        self.reindex();
        true
    }

    fn reindex(&mut self) {
        self.index = self
            .fields
            .iter()
            .enumerate()
            .map(|(slot, field)| (field.path.clone(), slot))
            .collect();
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.index.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Mounted handles in display order
    pub fn fields(&self) -> impl Iterator<Item = &FieldHandle> {
        self.fields.iter()
    }

    pub fn field(&self, path: &FieldPath) -> Option<&FieldHandle> {
        self.index.get(path).map(|&slot| &self.fields[slot])
    }

    fn field_mut(&mut self, path: &FieldPath) -> Option<&mut FieldHandle> {
        self.index.get(path).map(|&slot| &mut self.fields[slot])
    }

    pub fn value(&self, path: &FieldPath) -> Option<&str> {
        self.field(path).map(|f| f.value.as_str())
    }

    pub fn set_value(&mut self, path: &FieldPath, value: String) {
        if let Some(field) = self.field_mut(path) {
            field.value = value;
        }
    }

    /// Append a character to the live value
    pub fn push_char(&mut self, path: &FieldPath, c: char) {
        if let Some(field) = self.field_mut(path) {
            field.value.push(c);
        }
    }

    /// Remove the last character from the live value
    pub fn pop_char(&mut self, path: &FieldPath) {
        if let Some(field) = self.field_mut(path) {
            field.value.pop();
        }
    }

    pub fn error(&self, path: &FieldPath) -> Option<&str> {
        self.field(path).and_then(|f| f.error.as_deref())
    }

    /// Rebuild the nested value tree from every mounted field
    pub fn get_data(&self) -> Value {
        let mut tree = Map::new();
        for field in &self.fields {
            insert_at(&mut tree, &field.path, Value::String(field.value.clone()));
        }
        Value::Object(tree)
    }

    /// Push leaf values from `tree` into the matching mounted fields.
    ///
    /// Fields with no matching leaf keep their value; leaves with no mounted
    /// field are ignored.
    pub fn set_data(&mut self, tree: &Value) {
        for field in &mut self.fields {
            if let Some(text) = get_at(tree, &field.path).and_then(leaf_text) {
                field.value = text;
            }
        }

        for leaf in leaf_paths(tree) {
            if !self.fields.iter().any(|f| f.path.as_str() == leaf) {
                tracing::debug!("set_data: no field mounted at {leaf}, value dropped");
            }
        }
    }

    /// Replace every error annotation with the entries of `errors`.
    ///
    /// Fields not named lose their error. Entries naming a path with no
    /// mounted field are dropped.
    pub fn set_errors(&mut self, errors: ErrorMap) {
        for field in &mut self.fields {
            field.error = errors.get(field.path.as_str()).cloned();
        }

        for path in errors.keys() {
            if !self.fields.iter().any(|f| f.path.as_str() == path) {
                tracing::debug!("set_errors: no field mounted at {path}, error dropped");
            }
        }
    }

    /// Current errors of mounted fields
    pub fn get_errors(&self) -> ErrorMap {
        self.fields
            .iter()
            .filter_map(|f| {
                f.error
                    .as_ref()
                    .map(|e| (f.path.to_string(), e.clone()))
            })
            .collect()
    }

    /// Blank one field's value and error; unknown paths are ignored
    pub fn clear_field(&mut self, path: &FieldPath) {
        if let Some(field) = self.field_mut(path) {
            field.clear();
        }
    }

    /// Restore every field to its default value and clear all errors
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }

    /// Reset, then apply `tree` as with [`FormController::set_data`]
    pub fn reset_with(&mut self, tree: &Value) {
        self.reset();
        self.set_data(tree);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(raw: &str) -> FieldPath {
        FieldPath::parse(raw).unwrap()
    }

    /// Controller with the sample form's fields mounted
    fn sample_form() -> FormController {
        let mut form = FormController::new();
        for name in ["name", "email", "address.street", "address.number"] {
            form.register_field(path(name), InputKind::Text, None).unwrap();
        }
        form
    }

    fn errors(entries: &[(&str, &str)]) -> ErrorMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    mod registration {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_register_keeps_display_order() {
            let form = sample_form();
            let paths: Vec<_> = form.fields().map(|f| f.path.to_string()).collect();
            assert_eq!(paths, vec!["name", "email", "address.street", "address.number"]);
        }

        #[test]
        fn test_register_same_path_overwrites() {
            let mut form = sample_form();
            form.set_value(&path("email"), "x@y.com".into());
            form.register_field(path("email"), InputKind::Email, Some("d@e.f".into()))
                .unwrap();

            assert_eq!(form.len(), 4);
            assert_eq!(form.value(&path("email")), Some("d@e.f"));
            assert_eq!(form.field(&path("email")).unwrap().kind, InputKind::Email);
            assert_eq!(form.fields().nth(1).unwrap().path, path("email"));
        }

        #[test]
        fn test_register_rejects_nested_paths() {
            let mut form = sample_form();
            form.set_value(&path("address.street"), "S".into());

            let err = form
                .register_field(path("address"), InputKind::Text, None)
                .unwrap_err();
            assert_eq!(
                err,
                PathError::Overlaps {
                    path: "address".into(),
                    mounted: "address.street".into(),
                }
            );
            assert!(form
                .register_field(path("name.first"), InputKind::Text, None)
                .is_err());

            assert_eq!(form.len(), 4);
            assert_eq!(form.get_data()["address"]["street"], json!("S"));
        }

        #[test]
        fn test_unregister_reindexes() {
            let mut form = sample_form();
            assert!(form.unregister_field(&path("name")));
            assert!(!form.unregister_field(&path("name")));
            form.set_value(&path("address.number"), "7".into());
            assert_eq!(form.value(&path("address.number")), Some("7"));
            assert_eq!(form.len(), 3);
        }

        #[test]
        fn test_initial_data_supplies_defaults() {
            let mut form = FormController::with_initial_data(json!({
                "email": "foo@bar.com",
                "address": {"street": "Rua das tetas", "number": 123}
            }));
            for name in ["name", "email", "address.street", "address.number"] {
                form.register_field(path(name), InputKind::Text, None).unwrap();
            }
            assert_eq!(form.value(&path("name")), Some(""));
            assert_eq!(form.value(&path("email")), Some("foo@bar.com"));
            assert_eq!(form.value(&path("address.number")), Some("123"));
        }
    }

    mod data {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_get_data_nests_dotted_paths() {
            let mut form = sample_form();
            form.set_value(&path("name"), "Ana".into());
            form.set_value(&path("address.street"), "Rua X".into());
            assert_eq!(
                form.get_data(),
                json!({
                    "name": "Ana",
                    "email": "",
                    "address": {"street": "Rua X", "number": ""}
                })
            );
        }

        #[test]
        fn test_set_data_leaves_unmatched_fields_unchanged() {
            let mut form = sample_form();
            form.set_value(&path("name"), "Ana".into());
            form.set_data(&json!({
                "email": "x@y.com",
                "address": {"street": "S", "number": "5"}
            }));

            let data = form.get_data();
            assert_eq!(data["email"], json!("x@y.com"));
            assert_eq!(data["address"]["street"], json!("S"));
            assert_eq!(data["address"]["number"], json!("5"));
            assert_eq!(data["name"], json!("Ana"));
        }

        #[test]
        fn test_set_then_get_restricted_to_mounted_paths() {
            let mut form = sample_form();
            let tree = json!({
                "name": "Ana",
                "email": "a@b.com",
                "address": {"street": "Rua X", "number": "10", "zip": "999"},
                "phone": "555"
            });
            form.set_data(&tree);
            assert_eq!(
                form.get_data(),
                json!({
                    "name": "Ana",
                    "email": "a@b.com",
                    "address": {"street": "Rua X", "number": "10"}
                })
            );
        }

        #[test]
        fn test_set_data_stringifies_scalars() {
            let mut form = sample_form();
            form.set_value(&path("name"), "Ana".into());
            form.set_data(&json!({"name": null, "address": {"number": 42}}));
            assert_eq!(form.value(&path("name")), Some(""));
            assert_eq!(form.value(&path("address.number")), Some("42"));
        }

        #[test]
        fn test_set_data_ignores_object_over_leaf() {
            let mut form = sample_form();
            form.set_value(&path("email"), "keep@me.com".into());
            form.set_data(&json!({"email": {"nested": "x"}}));
            assert_eq!(form.value(&path("email")), Some("keep@me.com"));
        }

        #[test]
        fn test_push_and_pop_char() {
            let mut form = sample_form();
            form.push_char(&path("name"), 'A');
            form.push_char(&path("name"), 'n');
            form.pop_char(&path("name"));
            assert_eq!(form.value(&path("name")), Some("A"));
        }
    }

    mod error_annotations {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_errors_annotates_named_fields() {
            let mut form = sample_form();
            form.set_errors(errors(&[("name", "required"), ("address.street", "short")]));
            assert_eq!(form.error(&path("name")), Some("required"));
            assert_eq!(form.error(&path("address.street")), Some("short"));
            assert_eq!(form.error(&path("email")), None);
        }

        #[test]
        fn test_set_errors_replaces_previous() {
            let mut form = sample_form();
            form.set_errors(errors(&[("name", "required")]));
            form.set_errors(errors(&[("email", "invalid")]));
            assert_eq!(form.get_errors(), errors(&[("email", "invalid")]));
        }

        #[test]
        fn test_set_empty_errors_clears_everything() {
            let mut form = sample_form();
            form.set_errors(errors(&[("name", "required"), ("email", "invalid")]));
            form.set_errors(ErrorMap::new());
            assert!(form.get_errors().is_empty());
            assert!(form.fields().all(|f| f.error.is_none()));
        }

        #[test]
        fn test_unmounted_error_paths_are_dropped() {
            let mut form = sample_form();
            form.set_errors(errors(&[("name", "required"), ("nickname", "nope")]));

            let shown = form.fields().filter(|f| f.error.is_some()).count();
            assert_eq!(shown, 1);
            assert_eq!(form.get_errors(), errors(&[("name", "required")]));
        }

        #[test]
        fn test_clear_field_blanks_value_and_error() {
            let mut form = sample_form();
            form.set_value(&path("email"), "bad".into());
            form.set_errors(errors(&[("email", "invalid"), ("name", "required")]));
            form.clear_field(&path("email"));
            form.clear_field(&path("unknown"));

            assert_eq!(form.value(&path("email")), Some(""));
            assert_eq!(form.error(&path("email")), None);
            assert_eq!(form.error(&path("name")), Some("required"));
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_restores_defaults_and_clears_errors() {
            let mut form = FormController::with_initial_data(json!({"email": "foo@bar.com"}));
            for name in ["name", "email"] {
                form.register_field(path(name), InputKind::Text, None).unwrap();
            }
            form.set_value(&path("name"), "Ana".into());
            form.set_value(&path("email"), "other@bar.com".into());
            form.set_errors(errors(&[("name", "bad")]));

            form.reset();

            assert_eq!(form.get_data(), json!({"name": "", "email": "foo@bar.com"}));
            assert!(form.get_errors().is_empty());
        }

        #[test]
        fn test_set_data_does_not_change_defaults() {
            let mut form = sample_form();
            form.set_data(&json!({"email": "foo@bar.com"}));
            form.reset();
            assert_eq!(form.value(&path("email")), Some(""));
        }

        #[test]
        fn test_reset_with_applies_tree() {
            let mut form = sample_form();
            form.set_value(&path("name"), "Ana".into());
            form.reset_with(&json!({"email": "x@y.com"}));
            assert_eq!(form.value(&path("name")), Some(""));
            assert_eq!(form.value(&path("email")), Some("x@y.com"));
        }
    }
}
