pub use errors::{ServiceError, ServiceResult};

pub mod catalog;
pub mod errors;
pub mod facets;
pub mod products;
