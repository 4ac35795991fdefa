//! Pattern matcher type for the `RegExp` exotic kind.
//!
//! A [`Pattern`] pairs a compiled [`regex::Regex`] with a JavaScript-style
//! flags string, and renders as `/source/flags` — the exact payload text the
//! `t!RegExp:` tag carries.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tson::Pattern;
//!
//! let pattern = Pattern::with_flags("ab+c", "i").unwrap();
//! assert_eq!(pattern.to_string(), "/ab+c/i");
//! assert!(pattern.is_match("xABBC"));
//!
//! let parsed: Pattern = "/ab+c/i".parse().unwrap();
//! assert_eq!(parsed, pattern);
//! ```

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::str::FromStr;

/// Flags with no effect on matching in this engine (`g`, `y` control
/// iteration, `d` match indices, `u`/`v` unicode modes). They are carried
/// verbatim so the tagged rendering survives a round trip.
const CARRIED_FLAGS: &str = "dguvy";

/// Flags applied at compile time.
const APPLIED_FLAGS: &str = "ims";

/// A compiled regular expression with its original source and flags.
///
/// Equality compares source text and flags, not engine internals, so two
/// patterns built from the same rendering always compare equal.
///
/// # Examples
///
/// ```rust
/// use serde_tson::Pattern;
///
/// let a = Pattern::new("[0-9]+").unwrap();
/// let b: Pattern = "/[0-9]+/".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "[0-9]+");
/// assert_eq!(a.flags(), "");
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    flags: String,
}

impl Pattern {
    /// Compiles a pattern from source text with no flags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the source is not a valid
    /// regular expression.
    pub fn new(source: &str) -> Result<Self> {
        Self::with_flags(source, "")
    }

    /// Compiles a pattern from source text and a flags string.
    ///
    /// The `i`, `m` and `s` flags affect matching; the remaining JavaScript
    /// flags (`d`, `g`, `u`, `v`, `y`) are carried through unchanged.
    /// Unknown or repeated flags are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the source does not compile or
    /// the flags string is invalid.
    pub fn with_flags(source: &str, flags: &str) -> Result<Self> {
        let rendered = format!("/{}/{}", source, flags);
        for (i, flag) in flags.chars().enumerate() {
            if !APPLIED_FLAGS.contains(flag) && !CARRIED_FLAGS.contains(flag) {
                return Err(Error::invalid_pattern(
                    &rendered,
                    format!("unknown flag '{}'", flag),
                ));
            }
            if flags[..i].contains(flag) {
                return Err(Error::invalid_pattern(
                    &rendered,
                    format!("repeated flag '{}'", flag),
                ));
            }
        }
        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map_err(|e| Error::invalid_pattern(&rendered, e))?;
        Ok(Pattern {
            regex,
            flags: flags.to_string(),
        })
    }

    /// Returns the pattern source text, without delimiters or flags.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the flags string.
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Returns `true` if the pattern matches anywhere in the haystack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tson::Pattern;
    ///
    /// let pattern = Pattern::new("b.t").unwrap();
    /// assert!(pattern.is_match("rabbit? bat!"));
    /// assert!(!pattern.is_match("cow"));
    /// ```
    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Returns the underlying compiled regex.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str() && self.flags == other.flags
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.as_str(), self.flags)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    /// Parses the `/source/flags` rendering produced by [`Display`](fmt::Display).
    ///
    /// The source may itself contain `/`; the flags start after the last one.
    fn from_str(text: &str) -> Result<Self> {
        let rest = text
            .strip_prefix('/')
            .ok_or_else(|| Error::invalid_pattern(text, "missing leading '/'"))?;
        let close = rest
            .rfind('/')
            .ok_or_else(|| Error::invalid_pattern(text, "missing closing '/'"))?;
        Pattern::with_flags(&rest[..close], &rest[close + 1..])
    }
}
