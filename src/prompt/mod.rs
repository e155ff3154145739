//! Prompt library for driving an external text-generation service.
//!
//! This module provides:
//!
//! - **Catalog**: the fixed set of prompt templates and their stable
//!   keys/labels, all derived from one entry table
//! - **Template**: `${name}` placeholder substitution
//!
//! # Template syntax
//!
//! Templates use `${name}` placeholders:
//!
//! ```text
//! Context:
//! DOM:
//! ${domContent}
//! URL: ${pageUrl}
//! ```
//!
//! Placeholders with no binding pass through to the output verbatim.

mod catalog;
mod template;
mod texts;

pub use catalog::{ENTRIES, Prompt, PromptEntry, PromptKind, PromptLibrary};
pub use template::{substitute, vars};
