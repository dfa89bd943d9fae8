//! Core library exports for the CosmeReview catalog service.
//!
//! The `data` feature exposes the store schema, domain records and Diesel
//! repositories. The `server` feature adds the service layer and the
//! actix-web routes that serve product search and detail as JSON.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;
