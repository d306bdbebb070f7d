pub mod charging;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod fault;
pub mod models;
pub mod output;
pub mod state;
pub mod stats;
