//! The prompt catalog: stable keys, display labels, and template bodies.
//!
//! Key, label, and body for each prompt come from one shared entry table, so
//! the key set and the label set cannot drift apart. Earlier revisions kept
//! the label map as a separate literal and the test-data prompt had no label
//! at all; deriving everything from [`ENTRIES`] closes that gap.

use std::collections::HashMap;

use crate::error::{LeafgenError, Result};
use crate::prompt::template::substitute;
use crate::prompt::texts;

/// The kind of artifact a prompt asks the generation service to produce.
///
/// This is the closed set of template keys. Discriminants index into
/// [`ENTRIES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    /// Selenium Java page object class only.
    SeleniumJavaPageOnly = 0,
    /// Playwright TypeScript page object class only.
    PlaywrightTypescriptPageOnly = 1,
    /// Cucumber feature file only.
    CucumberOnly = 2,
    /// Cucumber feature file plus Selenium Java step definitions.
    CucumberWithSeleniumJavaSteps = 3,
    /// Test data only.
    TestDataOnly = 4,
}

/// One row of the catalog: a kind, its stable key, its display label, and
/// its template body.
#[derive(Debug, Clone, Copy)]
pub struct PromptEntry {
    /// The kind this entry describes.
    pub kind: PromptKind,
    /// Stable identifier used to select the template.
    pub key: &'static str,
    /// External display/categorization label. Opaque to this crate.
    pub label: &'static str,
    /// The template body, with `${name}` placeholders.
    pub template: &'static str,
}

/// The built-in catalog. Order must match `PromptKind` discriminants;
/// `entry_table_matches_discriminants` enforces this.
pub static ENTRIES: [PromptEntry; 5] = [
    PromptEntry {
        kind: PromptKind::SeleniumJavaPageOnly,
        key: "SELENIUM_JAVA_PAGE_ONLY",
        label: "Selenium-Java-Page-Only",
        template: texts::SELENIUM_JAVA_PAGE_ONLY,
    },
    PromptEntry {
        kind: PromptKind::PlaywrightTypescriptPageOnly,
        key: "PLAYWRIGHT_TYPESCRIPT_PAGE_ONLY",
        label: "Playwright-Typescript-Page-Only",
        template: texts::PLAYWRIGHT_TYPESCRIPT_PAGE_ONLY,
    },
    PromptEntry {
        kind: PromptKind::CucumberOnly,
        key: "CUCUMBER_ONLY",
        label: "Cucumber-Only",
        template: texts::CUCUMBER_ONLY,
    },
    PromptEntry {
        kind: PromptKind::CucumberWithSeleniumJavaSteps,
        key: "CUCUMBER_WITH_SELENIUM_JAVA_STEPS",
        label: "Cucumber-With-Selenium-Java-Steps",
        template: texts::CUCUMBER_WITH_SELENIUM_JAVA_STEPS,
    },
    PromptEntry {
        kind: PromptKind::TestDataOnly,
        key: "TEST_DATA_ONLY",
        label: "Test-Data-Only",
        template: texts::TEST_DATA_ONLY,
    },
];

impl PromptKind {
    /// Every kind, in catalog order.
    pub const ALL: [PromptKind; 5] = [
        PromptKind::SeleniumJavaPageOnly,
        PromptKind::PlaywrightTypescriptPageOnly,
        PromptKind::CucumberOnly,
        PromptKind::CucumberWithSeleniumJavaSteps,
        PromptKind::TestDataOnly,
    ];

    fn entry(self) -> &'static PromptEntry {
        &ENTRIES[self as usize]
    }

    /// The stable identifier for this kind.
    pub fn key(self) -> &'static str {
        self.entry().key
    }

    /// The external display label for this kind. Total over the kind set.
    pub fn label(self) -> &'static str {
        self.entry().label
    }

    /// The template body for this kind.
    pub fn template(self) -> &'static str {
        self.entry().template
    }

    /// Parse a stable key back into a kind.
    pub fn from_key(key: &str) -> Option<PromptKind> {
        ENTRIES.iter().find(|e| e.key == key).map(|e| e.kind)
    }
}

/// An owned catalog row, for libraries built from non-static data.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Stable identifier used to select the template.
    pub key: String,
    /// External display/categorization label.
    pub label: String,
    /// The template body, with `${name}` placeholders.
    pub template: String,
}

/// An immutable store of prompts, keyed by stable identifier.
///
/// Built once and passed by reference to consumers. [`PromptLibrary::builtin`]
/// holds the shipped catalog; [`PromptLibrary::new`] lets tests substitute a
/// fixture catalog.
#[derive(Debug, Clone)]
pub struct PromptLibrary {
    prompts: Vec<Prompt>,
}

impl PromptLibrary {
    /// Build a library from an explicit list of prompts.
    pub fn new(prompts: Vec<Prompt>) -> Self {
        PromptLibrary { prompts }
    }

    /// The library of built-in prompts.
    pub fn builtin() -> Self {
        PromptLibrary {
            prompts: ENTRIES
                .iter()
                .map(|e| Prompt {
                    key: e.key.to_string(),
                    label: e.label.to_string(),
                    template: e.template.to_string(),
                })
                .collect(),
        }
    }

    /// All prompts, in catalog order.
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    fn find(&self, key: &str) -> Result<&Prompt> {
        self.prompts
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| LeafgenError::TemplateNotFound {
                key: key.to_string(),
            })
    }

    /// Look up the template body for `key`.
    ///
    /// An unknown key means the caller and the catalog are out of sync; the
    /// error carries the key and must surface rather than fall back to a
    /// wrong template.
    pub fn lookup(&self, key: &str) -> Result<&str> {
        self.find(key).map(|p| p.template.as_str())
    }

    /// Look up the display label for `key`.
    pub fn label_for(&self, key: &str) -> Result<&str> {
        self.find(key).map(|p| p.label.as_str())
    }

    /// Render the template for `key` with the supplied variables.
    ///
    /// Resolves the template via [`Self::lookup`] (propagating its failure
    /// unchanged), substitutes `${name}` placeholders from `variables`, and
    /// trims leading and trailing whitespace from the result. Placeholders
    /// not bound in `variables` stay in the output verbatim.
    pub fn render(&self, key: &str, variables: &HashMap<String, String>) -> Result<String> {
        let template = self.lookup(key)?;
        Ok(substitute(template, variables).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::template::vars;

    #[test]
    fn entry_table_matches_discriminants() {
        for (i, entry) in ENTRIES.iter().enumerate() {
            assert_eq!(entry.kind as usize, i, "entry {} out of order", entry.key);
        }
        for kind in PromptKind::ALL {
            assert_eq!(kind.entry().kind, kind);
        }
    }

    #[test]
    fn keys_and_labels_are_unique() {
        for (i, a) in ENTRIES.iter().enumerate() {
            for b in ENTRIES.iter().skip(i + 1) {
                assert_ne!(a.key, b.key);
                assert_ne!(a.label, b.label);
            }
        }
    }

    #[test]
    fn every_kind_has_a_nonempty_template() {
        let lib = PromptLibrary::builtin();
        for kind in PromptKind::ALL {
            let template = lib.lookup(kind.key()).unwrap();
            assert!(
                !template.trim().is_empty(),
                "blank template for {}",
                kind.key()
            );
        }
    }

    #[test]
    fn from_key_round_trips() {
        for kind in PromptKind::ALL {
            assert_eq!(PromptKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(PromptKind::from_key("CUCUMBER"), None);
        assert_eq!(PromptKind::from_key(""), None);
    }

    #[test]
    fn labels_match_external_identifiers() {
        assert_eq!(PromptKind::CucumberOnly.label(), "Cucumber-Only");
        assert_eq!(
            PromptKind::SeleniumJavaPageOnly.label(),
            "Selenium-Java-Page-Only"
        );
        assert_eq!(
            PromptKind::CucumberWithSeleniumJavaSteps.label(),
            "Cucumber-With-Selenium-Java-Steps"
        );
        assert_eq!(
            PromptKind::PlaywrightTypescriptPageOnly.label(),
            "Playwright-Typescript-Page-Only"
        );
        assert_eq!(PromptKind::TestDataOnly.label(), "Test-Data-Only");
    }

    #[test]
    fn lookup_unknown_key_fails_with_the_key() {
        let lib = PromptLibrary::builtin();
        for bad in ["", "NOT_A_PROMPT", "cucumber_only"] {
            let err = lib.lookup(bad).unwrap_err();
            assert_eq!(
                err,
                LeafgenError::TemplateNotFound {
                    key: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn render_unknown_key_propagates_lookup_failure() {
        let lib = PromptLibrary::builtin();
        let err = lib.render("MISSING", &vars([("domContent", "<p/>")])).unwrap_err();
        assert_eq!(
            err,
            LeafgenError::TemplateNotFound {
                key: "MISSING".to_string()
            }
        );
    }

    #[test]
    fn label_for_unknown_key_fails() {
        let lib = PromptLibrary::builtin();
        assert!(lib.label_for("MISSING").is_err());
    }

    #[test]
    fn render_is_trim_idempotent() {
        let lib = PromptLibrary::builtin();
        for kind in PromptKind::ALL {
            let out = lib.render(kind.key(), &HashMap::new()).unwrap();
            assert_eq!(out, out.trim(), "untrimmed output for {}", kind.key());
            assert!(!out.is_empty());
        }
    }

    #[test]
    fn render_cucumber_only_substitutes_dom() {
        let lib = PromptLibrary::builtin();
        let out = lib
            .render("CUCUMBER_ONLY", &vars([("domContent", "<input id='u'/>")]))
            .unwrap();
        assert!(out.starts_with("Instructions:"));
        assert!(out.contains("<input id='u'/>"));
        assert!(!out.contains("${domContent}"));
    }

    #[test]
    fn render_step_defs_substitutes_dom_and_url() {
        let lib = PromptLibrary::builtin();
        let template = lib.lookup("CUCUMBER_WITH_SELENIUM_JAVA_STEPS").unwrap();
        assert!(
            template.matches("${pageUrl}").count() >= 2,
            "pageUrl must occur in both the Context block and the example code"
        );

        let out = lib
            .render(
                "CUCUMBER_WITH_SELENIUM_JAVA_STEPS",
                &vars([("domContent", "<form></form>"), ("pageUrl", "http://x/login")]),
            )
            .unwrap();
        assert!(out.contains("<form></form>"));
        assert!(out.contains("URL: http://x/login"));
        assert!(out.contains("driver.get(\"http://x/login\");"));
        assert!(!out.contains("${domContent}"));
        assert!(!out.contains("${pageUrl}"));
    }

    #[test]
    fn render_without_variables_leaves_placeholders() {
        let lib = PromptLibrary::builtin();
        let out = lib.render("TEST_DATA_ONLY", &HashMap::new()).unwrap();
        assert!(out.contains("${domContent}"));
    }

    #[test]
    fn substitution_count_matches_occurrences() {
        let lib = PromptLibrary::new(vec![Prompt {
            key: "FIXTURE".to_string(),
            label: "Fixture".to_string(),
            template: "${x} and ${x}, then ${x}".to_string(),
        }]);
        let out = lib.render("FIXTURE", &vars([("x", "V")])).unwrap();
        assert_eq!(out.matches('V').count(), 3);
        assert!(!out.contains("${x}"));
    }

    #[test]
    fn fixture_library_shadows_builtin_catalog() {
        let lib = PromptLibrary::new(vec![Prompt {
            key: "CUCUMBER_ONLY".to_string(),
            label: "Fixture".to_string(),
            template: "  fixture body  ".to_string(),
        }]);
        assert_eq!(lib.render("CUCUMBER_ONLY", &HashMap::new()).unwrap(), "fixture body");
        assert!(lib.lookup("TEST_DATA_ONLY").is_err());
    }
}
