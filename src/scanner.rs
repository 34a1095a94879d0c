/*!
 * Run scanner.
 *
 * Walks a line character by character, keeping a single "active run" flag.
 * A marker character starts a run (allocating an identifier) or extends the
 * active one, a connector only extends an active run, and any other character
 * closes the active run. When a run closes its identifier is written to the
 * tagged line right before the character that closed it.
 */

use log::warn;

use crate::classifier::{CharClass, Classifier, trim_ascii_space};
use crate::identifier::{Identifier, IdentifierAllocator};

/// UTF-8 byte order mark as decoded text
pub const BOM: char = '\u{feff}';

/// One run of translatable content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Identifier allocated when the run started
    pub id: Identifier,
    /// Marker and connector characters of the run
    pub text: String,
    /// False when the line ended while the run was still active
    pub closed: bool,
}

/// Result of scanning a single line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScannedLine {
    /// Line for the tagged skeleton
    pub tagged: String,
    /// Runs found on the line, in discovery order
    pub runs: Vec<Run>,
    /// Manifest block for the line, `None` when the line has no runs
    pub block: Option<String>,
}

/// Result of scanning a whole document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    /// Source with every closed run replaced by its identifier
    pub skeleton: String,
    /// Identifier and text of every run, one block per source line
    pub manifest: String,
    /// All runs of the document, in discovery order
    pub runs: Vec<Run>,
}

impl Extraction {
    /// Runs whose identifier never made it into the skeleton
    pub fn dangling(&self) -> impl Iterator<Item = &Run> {
        self.runs.iter().filter(|run| !run.closed)
    }
}

/// Scans lines and documents for runs
#[derive(Debug, Clone)]
pub struct RunScanner {
    classifier: Classifier,
    close_trailing_runs: bool,
    strip_bom: bool,
}

impl RunScanner {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            close_trailing_runs: false,
            strip_bom: true,
        }
    }

    /// Write the identifier of a run still active at end of line to the
    /// tagged line. Off by default, which leaves such runs out of the
    /// skeleton exactly as existing tagged files have them.
    pub fn with_close_trailing_runs(mut self, close: bool) -> Self {
        self.close_trailing_runs = close;
        self
    }

    /// Drop a byte order mark at the start of the document
    pub fn with_strip_bom(mut self, strip: bool) -> Self {
        self.strip_bom = strip;
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Scan one line. The line terminator, if any, is part of `line` and is
    /// classified like every other character.
    pub fn scan_line(&self, line: &str, allocator: &mut IdentifierAllocator) -> ScannedLine {
        let mut tagged = String::with_capacity(line.len());
        let mut runs: Vec<Run> = Vec::new();
        let mut buffer = String::new();
        let mut active: Option<Run> = None;

        for c in line.chars() {
            let class = self.classifier.classify(c);
            match active.take() {
                Some(mut run) => match class {
                    CharClass::Marker | CharClass::Connector => {
                        run.text.push(c);
                        active = Some(run);
                    }
                    CharClass::Plain => {
                        run.closed = true;
                        buffer.push_str(&run.text);
                        buffer.push('\n');
                        tagged.push_str(&run.id.token());
                        tagged.push(c);
                        runs.push(run);
                    }
                },
                None => match class {
                    CharClass::Marker => {
                        let id = allocator.allocate();
                        buffer.push_str(&id.token());
                        active = Some(Run {
                            id,
                            text: c.to_string(),
                            closed: false,
                        });
                    }
                    CharClass::Connector | CharClass::Plain => tagged.push(c),
                },
            }
        }

        if let Some(mut run) = active.take() {
            buffer.push_str(&run.text);
            if self.close_trailing_runs {
                run.closed = true;
                buffer.push('\n');
                tagged.push_str(&run.id.token());
            }
            runs.push(run);
        }

        let trimmed = trim_ascii_space(&buffer);
        let block = if trimmed.is_empty() {
            None
        } else {
            Some(format!("{}\n", trimmed))
        };

        ScannedLine {
            tagged,
            runs,
            block,
        }
    }

    /// Scan a whole document with a fresh allocator
    pub fn scan_document(&self, text: &str) -> Extraction {
        let text = if self.strip_bom {
            text.strip_prefix(BOM).unwrap_or(text)
        } else {
            text
        };

        let mut allocator = IdentifierAllocator::new();
        let mut extraction = Extraction {
            skeleton: String::with_capacity(text.len()),
            ..Default::default()
        };

        for line in text.split_inclusive('\n') {
            let scanned = self.scan_line(line, &mut allocator);
            extraction.skeleton.push_str(&scanned.tagged);
            if let Some(block) = scanned.block {
                extraction.manifest.push_str(&block);
            }
            for run in scanned.runs.iter().filter(|run| !run.closed) {
                warn!(
                    "{} is still open at end of line and is missing from the tagged output",
                    run.id
                );
            }
            extraction.runs.extend(scanned.runs);
        }

        extraction
    }
}

impl Default for RunScanner {
    fn default() -> Self {
        Self::new(Classifier::default())
    }
}
