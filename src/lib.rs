pub mod backend;
pub mod config;
pub mod prompt;
pub mod protocol;
pub mod server;
