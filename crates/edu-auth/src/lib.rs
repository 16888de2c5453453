//! # edu-auth
//!
//! Authentication for EduBot:
//! - [`login()`] against `/login`, with demo authentication as its offline fallback
//! - [`resume`] and [`logout`] over a [`SessionStore`]
//! - File-backed and in-memory session stores

pub mod error;
pub mod login;
pub mod session_store;

pub use error::AuthError;
pub use login::{LoginOutcome, login, logout, resume};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};
