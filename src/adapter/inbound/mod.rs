//! Inbound adapters: the HTTP server and the command-line interface.

pub mod cli;
pub mod http;
