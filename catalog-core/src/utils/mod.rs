pub mod config;
pub mod url;
