pub mod error_codes;
pub mod extractors;
pub mod responses;
pub mod store_error;
pub mod validators;
