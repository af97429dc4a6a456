// Session token enrichment and projection

pub mod token;

pub use token::{project, SessionClaims, SessionToken, TokenEnricher, MAX_SESSION_AGE_SECS};
