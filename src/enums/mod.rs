pub mod commands;
pub mod response_body;
pub mod webhook_outcome;
