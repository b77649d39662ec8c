pub mod command_runner;
pub mod webhook_tester;
