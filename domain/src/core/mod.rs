//! Core domain concepts shared across all subdomains.
//!
//! - [`ids`]: typed identifiers for every persisted record
//! - [`error::DomainError`]: domain-level errors
//! - [`string::truncate`] and [`string::prefix`]: UTF-8 safe display cuts

pub mod error;
pub mod ids;
pub mod string;
