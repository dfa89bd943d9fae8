//! Diesel row models and their conversions into domain records.

pub mod config;
pub mod product;
pub mod review;
pub mod video;
