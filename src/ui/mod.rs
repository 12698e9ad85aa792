//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_signup(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn test_app() -> App {
        let config = TuiConfig {
            prefill: Some(false),
            ..Default::default()
        };
        App::new(&config).unwrap()
    }

    #[test]
    fn test_renders_labels_and_buttons() {
        let screen = render(&test_app());
        for text in ["Hello World", "Name", "E-mail", "Street", "Submit", "Reset"] {
            assert!(screen.contains(text), "missing {text}");
        }
    }

    #[test]
    fn test_renders_field_errors() {
        let mut app = test_app();
        app.form.controller.set_data(&json!({
            "name": "",
            "email": "bad",
            "address": {"street": "Ru", "number": "1"}
        }));
        app.submit();

        let screen = render(&app);
        assert!(screen.contains("O nome é obrigatório"));
        assert!(screen.contains("Digite um e-mail válido"));
        assert!(screen.contains("No mínimo 3 caracteres"));
        assert!(screen.contains("need attention"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = test_app();
        let password = crate::state::FieldPath::parse("password").unwrap();
        app.form.controller.set_value(&password, "hunter2".into());

        let screen = render(&app);
        assert!(!screen.contains("hunter2"));
        assert!(screen.contains("•••••••"));
    }
}
