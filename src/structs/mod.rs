pub mod cli;
pub mod config;
pub mod sample_payload;
pub mod webhook_response;
