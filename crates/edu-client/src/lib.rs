//! # edu-client
//!
//! HTTP client for the EduBot backend.
//!
//! - [`ApiClient::call`] sends one request and always returns an
//!   [`ApiOutcome`]; HTTP error statuses and transport faults become
//!   user-visible notices plus a "no result" outcome, never an `Err`.
//! - [`fixtures`] is the single registry of demo payloads used when the
//!   backend is unavailable.
//! - [`FallbackPolicy`] decides, per call site, whether a failed call may be
//!   replaced by its fixture.

pub mod endpoint;
pub mod fixtures;
pub mod notify;
pub mod policy;

mod client;
mod error;
mod http;
mod outcome;

pub use client::ApiClient;
pub use endpoint::Endpoint;
pub use error::ClientError;
pub use notify::{Notice, NoticeLevel, Notifier, RecordingNotifier, TracingNotifier};
pub use outcome::ApiOutcome;
pub use policy::{FallbackPolicy, Failure, Resolved, Source};
