//! Form rendering module
//!
//! - `field_renderer`: one labeled input with its error line
//! - `signup_form`: the signup screen and its action panel

mod field_renderer;
mod signup_form;

pub use signup_form::draw_signup;
