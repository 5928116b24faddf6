pub mod catalogue;
pub mod classifier;
pub mod country;
pub mod dto;
pub mod guidance;
pub mod routes;
pub mod stats;
