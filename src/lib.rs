// Library root for Credential Gate

pub mod core;
pub mod auth;
pub mod session;
pub mod routing;
pub mod api;
pub mod config;
