//! Storage-independent catalog records and the shaping rules applied to them.

pub mod product;
pub mod review;
pub mod types;
pub mod video;
