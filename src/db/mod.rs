pub mod design;
pub mod postgres_service;
