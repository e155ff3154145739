//! Implementation of the `leafgen theme` command.
//!
//! Prints the branding/theme configuration as pretty JSON for consumption
//! by the presentation layer.

use crate::error::{LeafgenError, Result};
use crate::theme::Theme;

/// Execute the `leafgen theme` command.
pub fn cmd_theme() -> Result<()> {
    let theme = Theme::default();

    let json = serde_json::to_string_pretty(&theme)
        .map_err(|e| LeafgenError::UserError(format!("failed to serialize theme: {}", e)))?;

    println!("{}", json);
    Ok(())
}
