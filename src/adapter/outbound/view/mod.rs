//! Page rendering adapters.

pub mod html;

pub use html::{HtmlRenderer, STYLESHEET};
