pub mod auction;
pub mod category;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
