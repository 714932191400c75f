/// Club Service Library
///
/// Backend for the club community site: member accounts, the categorized
/// message board, the match schedule, the photo/video album, club news,
/// and comments attachable to board posts, schedule entries and album
/// items. Sessions and HTML rendering live outside this service.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and the route table
/// - `models`: Row structs and domain enums
/// - `services`: Business logic layer
/// - `db`: SQLite pool and migrations
/// - `middleware`: Session-gateway auth and the ownership predicate
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
