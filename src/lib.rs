pub mod config;
pub mod models;
pub mod storage;
pub mod store;

pub mod api;
pub mod redirect;
