// Library for tests to access modules

pub mod aggregation;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod render;
pub mod routes;
pub mod stats;
pub mod tools;
pub mod version;
