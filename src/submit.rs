//! Form submission: collect, validate, then commit or report

use crate::state::{ErrorMap, FormController};
use crate::validation::{Schema, ValidationError};
use serde_json::Value;
use thiserror::Error;

/// What a submission did to the form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Data was accepted; errors cleared and fields reset
    Committed(Value),
    /// Data was rejected; carries the errors now shown on mounted fields
    Rejected(ErrorMap),
}

/// Failures a submit handler does not recover from itself
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("validation could not run: {0}")]
    Validation(#[from] ValidationError),
}

/// Receives the collected form data on every submission
pub trait SubmitHandler {
    fn on_submit(
        &mut self,
        data: Value,
        form: &mut FormController,
    ) -> Result<SubmitOutcome, SubmitError>;
}

/// A form controller paired with its submit handler
#[derive(Debug)]
pub struct Form<H> {
    pub controller: FormController,
    handler: H,
}

impl<H: SubmitHandler> Form<H> {
    pub fn new(controller: FormController, handler: H) -> Self {
        Self {
            controller,
            handler,
        }
    }

    /// Submit programmatically, exactly as the submit button does
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let data = self.controller.get_data();
        self.handler.on_submit(data, &mut self.controller)
    }
}

/// Validates submissions against a schema and maps failures onto fields
#[derive(Debug, Clone)]
pub struct SchemaSubmitHandler {
    schema: Schema,
}

impl SchemaSubmitHandler {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }
}

impl SubmitHandler for SchemaSubmitHandler {
    fn on_submit(
        &mut self,
        data: Value,
        form: &mut FormController,
    ) -> Result<SubmitOutcome, SubmitError> {
        match self.schema.validate(&data) {
            Ok(()) => {
                tracing::info!("Form submitted: {data}");
                form.set_errors(ErrorMap::new());
                form.reset();
                Ok(SubmitOutcome::Committed(data))
            }
            Err(err @ ValidationError::Failed(_)) => {
                let errors = err.into_error_map().unwrap_or_default();
                tracing::debug!("Form rejected with {} error(s)", errors.len());
                form.set_errors(errors);
                Ok(SubmitOutcome::Rejected(form.get_errors()))
            }
            Err(other) => Err(other.into()),
        }
    }
}
