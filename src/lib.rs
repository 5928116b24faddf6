pub mod config;
pub mod modules;
pub mod server;
pub mod tracer;
