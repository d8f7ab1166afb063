//! Small sports-league API: user login and registration plus a read-only
//! championship catalog, all served from an in-memory store.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
