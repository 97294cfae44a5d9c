pub mod catalog;
pub mod components;
pub mod config;
