use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::error::FilterError;

/// How filter text is interpreted
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Plain substring
    #[default]
    Fixed,
    /// Regular expression
    Regex,
}

/// Case-insensitive pattern tested against node labels
///
/// Empty text matches every label, including the empty root label.
#[derive(Debug, Clone)]
pub struct FilterPattern {
    text: String,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    All,
    Fixed(String),
    Regex(Regex),
}

impl FilterPattern {
    /// Substring pattern
    #[must_use]
    pub fn fixed(text: &str) -> Self {
        let matcher = if text.is_empty() {
            Matcher::All
        } else {
            Matcher::Fixed(text.to_lowercase())
        };
        Self {
            text: text.to_string(),
            matcher,
        }
    }

    /// Regular expression pattern
    ///
    /// # Errors
    /// Returns `FilterError::InvalidRegex` if the pattern fails to compile.
    pub fn regex(text: &str) -> Result<Self, FilterError> {
        if text.is_empty() {
            return Ok(Self::fixed(text));
        }
        let compiled = RegexBuilder::new(text)
            .case_insensitive(true)
            .build()
            .map_err(|e| FilterError::regex_compile(text, &e.to_string()))?;
        Ok(Self {
            text: text.to_string(),
            matcher: Matcher::Regex(compiled),
        })
    }

    /// Build a pattern in the given mode
    ///
    /// # Errors
    /// Returns `FilterError::InvalidRegex` for an invalid regex in `FilterMode::Regex`.
    pub fn new(text: &str, mode: FilterMode) -> Result<Self, FilterError> {
        match mode {
            FilterMode::Fixed => Ok(Self::fixed(text)),
            FilterMode::Regex => Self::regex(text),
        }
    }

    /// Pattern that matches everything
    #[must_use]
    pub fn match_all() -> Self {
        Self::fixed("")
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this pattern matches every label
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.matcher, Matcher::All)
    }

    #[must_use]
    pub fn is_match(&self, label: &str) -> bool {
        match &self.matcher {
            Matcher::All => true,
            Matcher::Fixed(needle) => label.to_lowercase().contains(needle.as_str()),
            Matcher::Regex(re) => re.is_match(label),
        }
    }
}

impl Default for FilterPattern {
    fn default() -> Self {
        Self::match_all()
    }
}
