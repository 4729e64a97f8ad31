pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;
pub mod service;

pub use config::AppConfig;
pub use error::{CartError, Result};
pub use models::{LineItem, ParseResult, Site, Unit};
pub use parser::parse;
pub use service::{detect, extract, FinalizedRecords};
