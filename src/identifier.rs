/*!
 * Run identifiers and their per-document allocator.
 */

use std::fmt;

/// Opening part of every identifier token
pub const TAG_PREFIX: &str = "<EXTRACTED";

/// Closing part of every identifier token
pub const TAG_SUFFIX: &str = ">";

/// Identifier of one extracted run, rendered as `<EXTRACTEDn>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(u64);

impl Identifier {
    pub fn new(index: u64) -> Self {
        Self(index)
    }

    pub fn index(self) -> u64 {
        self.0
    }

    /// Token written to the skeleton and the manifest
    pub fn token(self) -> String {
        self.to_string()
    }

    /// Parse a complete `<EXTRACTEDn>` token
    pub fn parse(token: &str) -> Option<Self> {
        let digits = token.strip_prefix(TAG_PREFIX)?.strip_suffix(TAG_SUFFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(Self)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", TAG_PREFIX, self.0, TAG_SUFFIX)
    }
}

/// Monotonic identifier counter scoped to a single document.
///
/// The allocator is threaded through the scan by `&mut` so numbering
/// continues across lines and restarts at zero for every new document.
#[derive(Debug, Default, Clone)]
pub struct IdentifierAllocator {
    next: u64,
}

impl IdentifierAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next identifier
    pub fn allocate(&mut self) -> Identifier {
        let id = Identifier(self.next);
        self.next += 1;
        id
    }

    /// Number of identifiers handed out so far
    pub fn issued(&self) -> u64 {
        self.next
    }
}
