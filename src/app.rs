//! Application state and core logic

use crate::config::TuiConfig;
use crate::loader::{sample_data, DataLoader, DataSource, LoadEvent, StaticDataSource};
use crate::state::{FieldPath, FormController, InputField, InputKind, Scope};
use crate::submit::{Form, SchemaSubmitHandler, SubmitOutcome};
use crate::validation::signup_schema;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

/// Buttons of the action panel, in focus order
pub const ACTION_BUTTONS: [&str; 2] = ["Submit", "Reset"];

const SUBMIT_BUTTON: usize = 0;
const RESET_BUTTON: usize = 1;

/// An input together with the path it was mounted at
#[derive(Debug, Clone)]
pub struct MountedInput {
    pub input: InputField,
    pub path: FieldPath,
}

/// Inputs of the signup screen and the scope each one is mounted in
fn signup_inputs() -> Result<Vec<(InputField, Option<Scope>)>> {
    let address = Scope::new("address")?;
    Ok(vec![
        (InputField::new("name").with_label("Name"), None),
        (
            InputField::new("email")
                .with_kind(InputKind::Email)
                .with_label("E-mail"),
            None,
        ),
        (
            InputField::new("password")
                .with_kind(InputKind::Password)
                .with_label("Password"),
            None,
        ),
        (
            InputField::new("street").with_label("Street"),
            Some(address.clone()),
        ),
        (InputField::new("number").with_label("Number"), Some(address)),
    ])
}

/// Main application struct
pub struct App {
    /// Signup form and its submit handler
    pub form: Form<SchemaSubmitHandler>,
    /// Mounted inputs in display order
    pub inputs: Vec<MountedInput>,
    /// Focused input, or action button past the last input
    pub focus: usize,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    /// Pending prefill load
    loader: Option<DataLoader>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the app and start the prefill load when configured
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let mut app = Self::build(config)?;
        if config.prefill() {
            app.start_loading(Arc::new(StaticDataSource), config.load_delay());
        }
        Ok(app)
    }

    /// Create the app with every input mounted and nothing loading
    fn build(config: &TuiConfig) -> Result<Self> {
        let mut controller = if config.use_initial_data() {
            FormController::with_initial_data(sample_data())
        } else {
            FormController::new()
        };

        let mut inputs = Vec::new();
        for (input, scope) in signup_inputs()? {
            let path = input.mount(&mut controller, scope.as_ref())?;
            inputs.push(MountedInput { input, path });
        }

        Ok(Self {
            form: Form::new(controller, SchemaSubmitHandler::new(signup_schema())),
            inputs,
            focus: 0,
            status_message: None,
            loader: None,
            quit: false,
        })
    }

    /// Fetch prefill data from `source` after `delay`, replacing any pending load
    pub fn start_loading(&mut self, source: Arc<dyn DataSource>, delay: Duration) {
        self.loader = Some(DataLoader::spawn(source, delay));
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_some()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Number of focus stops (inputs followed by buttons)
    pub fn focus_count(&self) -> usize {
        self.inputs.len() + ACTION_BUTTONS.len()
    }

    /// Path of the focused input, `None` when a button has focus
    pub fn focused_path(&self) -> Option<&FieldPath> {
        self.inputs.get(self.focus).map(|m| &m.path)
    }

    /// Focused action button index, `None` when an input has focus
    pub fn focused_button(&self) -> Option<usize> {
        self.focus.checked_sub(self.inputs.len())
    }

    pub fn next_focus(&mut self) {
        self.focus = (self.focus + 1) % self.focus_count();
    }

    pub fn prev_focus(&mut self) {
        if self.focus == 0 {
            self.focus = self.focus_count() - 1;
        } else {
            self.focus -= 1;
        }
    }

    /// Apply finished loads to the form
    pub fn tick(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };

        let finished = loader.is_finished();
        while let Some(event) = loader.try_recv() {
            match event {
                LoadEvent::Loaded(data) => {
                    tracing::info!("Prefill data loaded");
                    self.form.controller.set_data(&data);
                    self.status_message = Some("Data loaded".to_string());
                }
                LoadEvent::Failed(message) => {
                    self.status_message = Some(format!("Failed to load data: {message}"));
                }
            }
        }

        if finished {
            self.loader = None;
        }
    }

    /// Submit the form and report the outcome in the status bar
    pub fn submit(&mut self) {
        self.status_message = match self.form.submit() {
            Ok(SubmitOutcome::Committed(_)) => Some(format!(
                "Submitted at {}",
                Local::now().format("%H:%M:%S")
            )),
            Ok(SubmitOutcome::Rejected(errors)) if errors.is_empty() => {
                Some("Submission rejected".to_string())
            }
            Ok(SubmitOutcome::Rejected(errors)) => {
                Some(format!("{} field(s) need attention", errors.len()))
            }
            Err(e) => {
                tracing::error!("Submit failed: {e}");
                Some(format!("Error: {e}"))
            }
        };
    }

    pub fn reset(&mut self) {
        self.form.controller.reset();
        self.status_message = Some("Form reset".to_string());
    }

    fn clear_focused_field(&mut self) {
        if let Some(path) = self.focused_path().cloned() {
            self.form.controller.clear_field(&path);
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char('l') if ctrl => self.clear_focused_field(),
            KeyCode::Tab => self.next_focus(),
            KeyCode::BackTab => self.prev_focus(),
            KeyCode::Enter => match self.focused_button() {
                Some(RESET_BUTTON) => self.reset(),
                Some(SUBMIT_BUTTON) | None => self.submit(),
                Some(_) => {}
            },
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(path) = self.focused_path().cloned() {
                    self.form.controller.push_char(&path, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(path) = self.focused_path().cloned() {
                    self.form.controller.pop_char(&path);
                }
            }
            _ => {}
        }
        Ok(())
    }
}
