#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod connect;
pub mod error;
pub mod inventory;
pub mod prompt;
pub mod storage;
pub mod utils;
