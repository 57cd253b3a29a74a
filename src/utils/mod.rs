//! Small shared helpers.

mod html;

pub use html::html_escape;
