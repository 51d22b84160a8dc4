pub mod commands;
pub mod config;
pub mod env;
pub mod parser;
pub mod state;
pub mod theme;
