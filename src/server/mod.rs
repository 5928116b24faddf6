pub mod controller;
pub mod open_api;
pub mod shutdown;
