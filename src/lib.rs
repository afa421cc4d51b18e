#![doc = "The `tasktracker` library crate."]
#![doc = ""]
#![doc = "A shared task list behind username/password accounts. The crate holds the"]
#![doc = "configuration, store access, token handling, request gate and HTTP routes;"]
#![doc = "`main.rs` wires them into an actix-web server."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use crate::config::Config;
pub use crate::error::AppError;
