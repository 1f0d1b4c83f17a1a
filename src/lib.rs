pub mod config;
pub mod db;
pub mod patterns;
pub mod routes;
pub mod types;
