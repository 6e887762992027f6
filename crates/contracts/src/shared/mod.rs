pub mod config;
pub mod selection;
