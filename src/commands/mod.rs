pub mod clean;
pub mod config;
pub mod helpers;
pub mod routes;
pub mod setup;
pub mod show;
