// Request routing decisions

pub mod guard;

pub use guard::RouteGuard;
