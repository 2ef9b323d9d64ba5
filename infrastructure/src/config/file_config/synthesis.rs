//! Synthesis configuration from TOML (`[synthesis]` section)

use super::{ConfigIssue, Severity};
use deepthink_domain::Locale;
use serde::{Deserialize, Serialize};

/// Raw synthesis configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSynthesisConfig {
    /// Language of replies and canned strings: "en" or "ru"
    pub locale: String,
}

impl Default for FileSynthesisConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default().to_string(),
        }
    }
}

impl FileSynthesisConfig {
    /// Parse the locale, falling back to the default with a warning
    pub fn parse_locale(&self) -> (Locale, Vec<ConfigIssue>) {
        match self.locale.parse::<Locale>() {
            Ok(locale) => (locale, vec![]),
            Err(_) => (
                Locale::default(),
                vec![ConfigIssue {
                    severity: Severity::Warning,
                    field: "synthesis.locale".to_string(),
                    message: format!(
                        "synthesis.locale: unknown value '{}', falling back to '{}'",
                        self.locale,
                        Locale::default()
                    ),
                }],
            ),
        }
    }
}
