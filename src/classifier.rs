/*!
 * Character classification for run detection.
 *
 * Every character of a source line falls in exactly one class:
 * - `Marker`: translatable content, starts or extends a run
 * - `Connector`: punctuation absorbed into a run only while one is active
 * - `Plain`: everything else, ends an active run
 */

use serde::{Deserialize, Serialize};

/// Connectors used when nothing else is configured
pub const DEFAULT_CONNECTORS: &str = " .,?!-";

/// Remove the whitespace the original tool strips: ASCII space, tab, line
/// feed, carriage return, vertical tab and form feed. Unicode spaces such as
/// U+00A0 or U+3000 are translatable content and stay.
pub fn trim_ascii_space(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
}

/// Class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Marker,
    Connector,
    Plain,
}

/// Rule deciding which characters count as translatable
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarkerRule {
    /// Characters that need an escape sequence to be written as a literal:
    /// everything outside ASCII plus ASCII control characters other than
    /// tab, line feed and carriage return
    #[default]
    Escaped,
    /// Only characters outside ASCII
    NonAscii,
}

impl MarkerRule {
    /// Check whether a character is translatable under this rule
    pub fn is_marker(self, c: char) -> bool {
        match self {
            Self::Escaped => {
                !c.is_ascii() || (c.is_ascii_control() && !matches!(c, '\t' | '\n' | '\r'))
            }
            Self::NonAscii => !c.is_ascii(),
        }
    }
}

/// Maps characters to their class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    marker_rule: MarkerRule,
    connectors: Vec<char>,
}

impl Classifier {
    /// Create a classifier from a marker rule and a set of connector characters
    pub fn new(marker_rule: MarkerRule, connectors: &str) -> Self {
        let mut connectors: Vec<char> = connectors.chars().collect();
        connectors.sort_unstable();
        connectors.dedup();
        Self {
            marker_rule,
            connectors,
        }
    }

    /// Classify one character. Marker wins over Connector.
    pub fn classify(&self, c: char) -> CharClass {
        if self.marker_rule.is_marker(c) {
            CharClass::Marker
        } else if self.connectors.binary_search(&c).is_ok() {
            CharClass::Connector
        } else {
            CharClass::Plain
        }
    }

    pub fn marker_rule(&self) -> MarkerRule {
        self.marker_rule
    }

    pub fn connectors(&self) -> &[char] {
        &self.connectors
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(MarkerRule::default(), DEFAULT_CONNECTORS)
    }
}

/// Classify a character with the default rule and connectors
pub fn classify(c: char) -> CharClass {
    if MarkerRule::Escaped.is_marker(c) {
        CharClass::Marker
    } else if DEFAULT_CONNECTORS.contains(c) {
        CharClass::Connector
    } else {
        CharClass::Plain
    }
}
