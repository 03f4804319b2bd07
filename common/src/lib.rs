pub mod config;
pub mod error;
pub mod survey;
pub mod wifi;
