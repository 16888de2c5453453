//! # edu-core
//!
//! Core types shared across all EduBot crates:
//! - Entity structs for the backend's wire shapes (session user, courses,
//!   enrollments, progress, report rows)
//! - Role and status enums with their wire spellings
//! - The loose response [`envelope::Envelope`] every endpoint is read through
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod envelope;
pub mod errors;
