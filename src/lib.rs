pub mod config;
pub mod error;
pub mod models;
pub mod auth;
pub mod store;
pub mod email;
pub mod service;
