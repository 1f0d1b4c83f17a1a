pub mod design;
pub mod error;
pub mod response;
