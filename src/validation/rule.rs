//! Validation rules declared as data

use super::error::SchemaError;
use once_cell::sync::Lazy;
use regex::Regex;

/// HTML `type=email` syntax, with at least one dot and an alphabetic top-level label
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@",
        r"[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*",
        r"\.[a-zA-Z]{2,}$",
    ))
    .expect("email pattern is valid")
});

/// A single check applied to a string field, carrying its failure message
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must be present and non-empty
    Required { message: String },
    /// Present value must have at least `min` characters
    MinLength { min: usize, message: String },
    /// Non-empty value must match `regex`
    Pattern { regex: Regex, message: String },
    /// Non-empty value must look like an email address
    Email { message: String },
}

impl Rule {
    pub fn required(message: &str) -> Self {
        Rule::Required {
            message: message.to_string(),
        }
    }

    pub fn min_length(min: usize, message: &str) -> Self {
        Rule::MinLength {
            min,
            message: message.to_string(),
        }
    }

    pub fn pattern(pattern: &str, message: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Rule::Pattern {
            regex,
            message: message.to_string(),
        })
    }

    pub fn email(message: &str) -> Self {
        Rule::Email {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::Pattern { message, .. }
            | Rule::Email { message } => message,
        }
    }

    /// Check a value; `None` means the field is absent from the tree
    pub fn check(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (Rule::Required { .. }, value) => value.is_some_and(|v| !v.is_empty()),
            (_, None) => true,
            (Rule::MinLength { min, .. }, Some(v)) => v.chars().count() >= *min,
            (Rule::Pattern { .. } | Rule::Email { .. }, Some("")) => true,
            (Rule::Pattern { regex, .. }, Some(v)) => regex.is_match(v),
            (Rule::Email { .. }, Some(v)) => EMAIL_REGEX.is_match(v),
        }
    }
}
