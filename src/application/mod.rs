//! Application services implementing the inbound ports.

pub mod todo;

pub use todo::{list_path, TodoApp};
