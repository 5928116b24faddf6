pub mod dto;
pub mod form;
pub mod price;
pub mod record;
pub mod repository;
pub mod routes;
pub mod service;
pub mod validation;
