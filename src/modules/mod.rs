pub mod auth;
pub mod buyer;
pub mod common;
pub mod plate;
pub mod vehicle;
