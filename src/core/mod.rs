// Core domain types, errors, and crypto primitives

pub mod crypto;
pub mod errors;
pub mod models;
