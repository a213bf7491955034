// src/config/mod.rs
pub mod tools;

pub use tools::AppConfig;
