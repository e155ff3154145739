//! Implementation of the `leafgen render` command.
//!
//! Resolves a template by its stable key, substitutes the supplied
//! variables, and prints the trimmed result to stdout.

use std::collections::HashMap;

use crate::cli::RenderArgs;
use crate::error::{LeafgenError, Result};
use crate::prompt::PromptLibrary;

/// Execute the `leafgen render` command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let variables = collect_variables(&args)?;

    let library = PromptLibrary::builtin();
    let rendered = library.render(&args.key, &variables)?;

    println!("{}", rendered);
    Ok(())
}

/// Merge `--vars-json` and `--var` bindings into one map.
///
/// `--var` bindings are applied second, so they win over JSON on conflict.
fn collect_variables(args: &RenderArgs) -> Result<HashMap<String, String>> {
    let mut variables: HashMap<String, String> = match &args.vars_json {
        Some(json) => serde_json::from_str(json).map_err(|e| {
            LeafgenError::UserError(format!(
                "--vars-json must be a JSON object of strings: {}",
                e
            ))
        })?,
        None => HashMap::new(),
    };

    for binding in &args.vars {
        let (name, value) = binding.split_once('=').ok_or_else(|| {
            LeafgenError::UserError(format!(
                "invalid --var '{}': expected NAME=VALUE",
                binding
            ))
        })?;
        variables.insert(name.to_string(), value.to_string());
    }

    Ok(variables)
}
