//! Form field components and the per-field state they register

use super::controller::FormController;
use super::path::{resolve_path, FieldPath, PathError, Scope};

/// Presentation type of an input, mirrors the HTML `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
}

/// State the form controller keeps for one mounted field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHandle {
    pub path: FieldPath,
    pub kind: InputKind,
    pub value: String,
    pub default_value: Option<String>,
    pub error: Option<String>,
}

impl FieldHandle {
    pub fn new(path: FieldPath, kind: InputKind, default_value: Option<String>) -> Self {
        Self {
            path,
            kind,
            value: default_value.clone().unwrap_or_default(),
            default_value,
            error: None,
        }
    }

    /// Restore the value to its default and drop the error
    pub fn reset(&mut self) {
        self.value = self.default_value.clone().unwrap_or_default();
        self.error = None;
    }

    /// Blank the value and drop the error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            InputKind::Password => "•".repeat(self.value.chars().count()),
            InputKind::Text | InputKind::Email => self.value.clone(),
        }
    }
}

/// A labeled input bound to one field path.
///
/// Mounting resolves the name against the enclosing scope and registers a
/// handle with the controller; the handle then owns the live value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub name: String,
    pub kind: InputKind,
    pub label: Option<String>,
}

impl InputField {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: InputKind::Text,
            label: None,
        }
    }

    pub fn with_kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Full path of this input inside `scope`
    pub fn resolve(&self, scope: Option<&Scope>) -> Result<FieldPath, PathError> {
        resolve_path(&self.name, scope)
    }

    /// Register this input with the controller
    pub fn mount(
        &self,
        form: &mut FormController,
        scope: Option<&Scope>,
    ) -> Result<FieldPath, PathError> {
        let path = self.resolve(scope)?;
        form.register_field(path.clone(), self.kind, None)?;
        Ok(path)
    }

    /// Remove this input's handle from the controller
    pub fn unmount(
        &self,
        form: &mut FormController,
        scope: Option<&Scope>,
    ) -> Result<(), PathError> {
        let path = self.resolve(scope)?;
        form.unregister_field(&path);
        Ok(())
    }

    /// Rename the input, re-registering only when the resolved path changes
    pub fn rebind(
        &mut self,
        name: &str,
        form: &mut FormController,
        scope: Option<&Scope>,
    ) -> Result<FieldPath, PathError> {
        let old = self.resolve(scope)?;
        let new = resolve_path(name, scope)?;
        if old != new {
            if let Some(mounted) = form.overlapping(&new).filter(|&m| *m != old) {
                return Err(PathError::Overlaps {
                    path: new.to_string(),
                    mounted: mounted.to_string(),
                });
            }
            form.unregister_field(&old);
            form.register_field(new.clone(), self.kind, None)?;
        }
        self.name = name.to_string();
        Ok(new)
    }

    /// Label shown in the input border
    pub fn display_label(&self, path: &FieldPath) -> String {
        self.label.clone().unwrap_or_else(|| path.to_string())
    }
}
