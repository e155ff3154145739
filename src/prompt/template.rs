//! Placeholder substitution for prompt templates.
//!
//! Templates embed `${name}` placeholders (commonly `${domContent}` and
//! `${pageUrl}`). Substitution walks the template once, left to right, and
//! replaces each placeholder whose name is bound in the variables map with
//! its value as an opaque literal: no recursive re-expansion, no escaping of
//! delimiter characters inside values, no expression evaluation.
//!
//! # Unknown placeholders
//!
//! A placeholder whose name is not bound passes through verbatim. This is
//! intentional: which variables a template requires is the caller's contract,
//! and an unreplaced token in the output is easier to diagnose than a request
//! rejected halfway through assembly. Do not tighten this into an error.
//!
//! There is no escape syntax for emitting a literal `${...}` from a
//! substituted value; none of the shipped templates need one.

use std::collections::HashMap;

/// Substitute `${name}` placeholders in `template` from `variables`.
///
/// Bound placeholders are replaced everywhere they occur; unbound ones are
/// left verbatim, as is an unterminated `${` sequence at the end of input.
/// The single pass means a value containing `${other}` is never re-expanded,
/// and applying the same binding again is a no-op.
///
/// # Examples
///
/// ```
/// use leafgen::prompt::{substitute, vars};
///
/// let vars = vars([("domContent", "<input id='u'/>")]);
/// let out = substitute("DOM: ${domContent} (${pageUrl})", &vars);
/// assert_eq!(out, "DOM: <input id='u'/> (${pageUrl})");
/// ```
pub fn substitute(template: &str, variables: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let token = &rest[start..];

        match token[2..].find('}') {
            Some(end) => {
                // end is relative to the byte after "${"
                let name = &token[2..2 + end];
                let consumed = end + 3;
                match variables.get(name) {
                    Some(value) => result.push_str(value),
                    None => result.push_str(&token[..consumed]),
                }
                rest = &rest[start + consumed..];
            }
            None => {
                // Unterminated "${" runs to end of input; emit verbatim.
                result.push_str(token);
                rest = "";
            }
        }
    }

    result.push_str(rest);
    result
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
