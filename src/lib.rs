//! Leafgen: prompt library for generating test-automation artifacts.
//!
//! Holds a fixed catalog of parameterized prompt templates (page objects,
//! feature files, test data) and renders them by substituting caller-supplied
//! `${name}` variables. The rendered string is forwarded verbatim to an
//! external text-generation service by the caller; this crate never contacts
//! that service itself.
//!
//! Also carries the branding/theme configuration consumed by the hosting
//! presentation layer.

pub mod cli;
pub mod commands;
pub mod error;
pub mod exit_codes;
pub mod prompt;
pub mod theme;
