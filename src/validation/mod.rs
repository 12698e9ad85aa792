//! Schema validation
//!
//! Rules are plain data ([`Rule`]) attached to keys of a [`Schema`]; a single
//! walker evaluates them against the form value tree and reports every
//! failure, not just the first.

mod error;
mod rule;
mod schema;

pub use error::{FieldFailure, SchemaError, ValidationError};
pub use rule::Rule;
pub use schema::{FieldSchema, Schema};

/// Schema of the signup form
pub fn signup_schema() -> Schema {
    Schema::new()
        .string("name", vec![Rule::required("O nome é obrigatório")])
        .string(
            "email",
            vec![
                Rule::email("Digite um e-mail válido"),
                Rule::required("O e-mail ó obrigatório"),
            ],
        )
        .object(
            "address",
            Schema::new().string(
                "street",
                vec![
                    Rule::min_length(3, "No mínimo 3 caracteres"),
                    Rule::required("A cidade é obrigatória"),
                ],
            ),
        )
}
