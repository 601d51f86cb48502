//! Products

pub mod errors;
pub mod models;
mod repository;
pub mod service;
mod validate;

pub use errors::ProductsServiceError;
pub use service::*;
