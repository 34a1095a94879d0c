/*!
 * Translation file parsing.
 *
 * A translation file holds one `<EXTRACTEDn> translated text` entry per line.
 * The identifier is separated from the text by the first space or tab and
 * must be a complete `<EXTRACTEDn>` token.
 */

use crate::errors::InsertError;
use crate::identifier::Identifier;

/// One line of a translation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    /// Token to replace, taken verbatim from the line
    pub tag: String,
    /// Raw translated text, not yet trimmed or escaped
    pub text: String,
}

impl TranslationEntry {
    /// Split a line (without its terminator) into tag and text
    pub fn parse_line(line: &str, line_number: usize) -> Result<Self, InsertError> {
        match line.split_once([' ', '\t']) {
            Some((tag, text)) if Identifier::parse(tag).is_some() => Ok(Self {
                tag: tag.to_string(),
                text: text.to_string(),
            }),
            _ => Err(InsertError::MalformedLine {
                line_number,
                content: line.to_string(),
            }),
        }
    }
}

/// All entries of a translation file, in file order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationFile {
    pub entries: Vec<TranslationEntry>,
}

impl TranslationFile {
    /// Parse translation file content. Blank lines are skipped; any other
    /// line must contain a separator.
    pub fn parse(content: &str) -> Result<Self, InsertError> {
        let mut entries = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            entries.push(TranslationEntry::parse_line(line, index + 1)?);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
