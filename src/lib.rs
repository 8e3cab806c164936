pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod resources;
pub mod search;
pub mod session;

pub use db::Database;
pub use error::{Error, Result};
pub use session::Session;
