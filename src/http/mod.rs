//! Single-shot HTTP GET with failure classification.

mod client;
mod outcome;

#[cfg(test)]
pub use client::MockTransport;
pub use client::{HttpClient, Transport};
pub use outcome::{FailureKind, Fetch, Response};
