//! Implementation of the `leafgen list` command.
//!
//! Prints the stable key and display label of every prompt in the catalog.

use crate::error::Result;
use crate::prompt::PromptLibrary;

/// Execute the `leafgen list` command.
pub fn cmd_list() -> Result<()> {
    let library = PromptLibrary::builtin();

    let key_width = library
        .prompts()
        .iter()
        .map(|p| p.key.len())
        .max()
        .unwrap_or(0);

    for prompt in library.prompts() {
        println!("{:<width$}  {}", prompt.key, prompt.label, width = key_width);
    }

    Ok(())
}
