/// Shared kernel - error types, result aliases, cancellation and security helpers
pub mod cancellation;
pub mod error;
pub mod result;
pub mod security;

pub use cancellation::{CancelReason, ScanContext};
pub use result::{Result, ScanOutcome};
