//! Diagnostic tooling for the SAI website's n8n form webhook.
//!
//! The default command reads `data-webhook-url` from a static page, posts a
//! sample submission to it and prints what came back.

pub mod config;
pub mod enums;
pub mod errors;
pub mod logger;
pub mod services;
pub mod structs;
pub mod workers;
