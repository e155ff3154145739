//! CLI argument parsing for leafgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Leafgen: prompt library for generating test-automation artifacts.
///
/// Renders parameterized prompt templates (page objects, feature files,
/// test data) for forwarding to an external text-generation service.
#[derive(Parser, Debug)]
#[command(name = "leafgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for leafgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available prompt templates.
    ///
    /// Prints the stable key and display label of every template
    /// in the built-in catalog.
    List,

    /// Render a prompt template to stdout.
    ///
    /// Substitutes the supplied variables into the named template and
    /// prints the trimmed result. Placeholders without a binding are
    /// left in the output verbatim.
    Render(RenderArgs),

    /// Print the branding/theme configuration as JSON.
    Theme,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Stable key of the template to render (e.g. CUCUMBER_ONLY).
    pub key: String,

    /// A variable binding, as name=value. May be repeated.
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// Variable bindings as a JSON object of strings.
    ///
    /// Merged with --var bindings; --var wins on conflict.
    #[arg(long, value_name = "JSON")]
    pub vars_json: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
