pub mod category;
pub mod config;
pub mod export;
pub mod http;
pub mod report;
pub mod runtime;
