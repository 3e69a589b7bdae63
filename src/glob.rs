//! Extended shell glob patterns
//!
//! Patterns always match the whole path:
//!
//! - `*` matches any run of characters, `/` included
//! - `?` matches a single character
//! - `[abc]`, `[a-z]` and negated `[!abc]` character classes
//! - `{js,css}` brace alternation
//! - `\` escapes the next character
//!
//! # Examples
//!
//! ```
//! use pkg_size_report::glob::GlobPattern;
//!
//! let pattern = GlobPattern::new("*.{map,d.ts}")?;
//! assert!(pattern.is_match("/dist/index.js.map"));
//! assert!(pattern.is_match("/dist/index.d.ts"));
//! assert!(!pattern.is_match("/dist/index.js"));
//! # Ok::<(), pkg_size_report::error::ReportError>(())
//! ```

use globset::{GlobBuilder, GlobMatcher};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// Compiled glob pattern
#[derive(Debug, Clone)]
pub struct GlobPattern {
    glob: String,
    matcher: GlobMatcher,
}

impl GlobPattern {
    /// Compile a glob pattern
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidGlob`] when the pattern does not parse,
    /// e.g. for an unclosed `{` group or `[` class.
    pub fn new(glob: &str) -> Result<Self, ReportError> {
        let compiled = GlobBuilder::new(glob)
            .literal_separator(false)
            .backslash_escape(true)
            .build()
            .map_err(|e| ReportError::InvalidGlob {
                pattern: glob.to_string(),
                reason: e.kind().to_string(),
            })?;
        log::debug!("Compiled glob '{}' to regex '{}'", glob, compiled.regex());

        Ok(Self {
            glob: glob.to_string(),
            matcher: compiled.compile_matcher(),
        })
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.glob
    }

    /// True when the whole path matches the pattern
    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}

impl FromStr for GlobPattern {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glob)
    }
}

impl PartialEq for GlobPattern {
    fn eq(&self, other: &Self) -> bool {
        self.glob == other.glob
    }
}

impl Eq for GlobPattern {}
