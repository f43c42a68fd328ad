pub mod auction;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod handlers;
pub mod prompt;
pub mod render;
pub mod scheduler;
pub mod view;
