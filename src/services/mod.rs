pub mod webhook_client;
